//! User settings loaded from an optional TOML file.
//!
//! The default location is `<config dir>/onepatch/config.toml`:
//!
//! - Linux: `~/.config/onepatch/config.toml`
//! - macOS: `~/Library/Application Support/onepatch/config.toml`
//! - Windows: `%APPDATA%\onepatch\config.toml`
//!
//! ```toml
//! default_format = "reason"
//! output_dir = "converted"
//! overwrite = false
//! ```
//!
//! Command-line flags always win over settings.

use std::path::{Path, PathBuf};

use onepatch_core::{Format, UnknownFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application name used for directory paths.
const APP_NAME: &str = "onepatch";

const CONFIG_FILE: &str = "config.toml";

/// Errors loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the file
    #[error("failed to read settings '{path}': {source}")]
    ReadFile {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse settings '{path}': {source}")]
    TomlParse {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// `default_format` names no known format
    #[error("invalid default_format in settings: {0}")]
    DefaultFormat(#[from] UnknownFormat),
}

/// Settings as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Target format used when `--to` is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Directory for converted files when `--out-dir` is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing files without `--force`.
    pub overwrite: bool,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text).map_err(|source| SettingsError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.default_format()?;
        Ok(settings)
    }

    /// Load settings.
    ///
    /// An explicit path must exist. The default path is optional; when it is
    /// missing the defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Loaded, SettingsError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Loaded {
                settings: Settings::default(),
                path,
                found: false,
            });
        }

        let text = std::fs::read_to_string(&path).map_err(|source| SettingsError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_toml(&text, &path)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(Loaded {
            settings,
            path,
            found: true,
        })
    }

    /// The configured default format, if any.
    pub fn default_format(&self) -> Result<Option<Format>, UnknownFormat> {
        self.default_format.as_deref().map(str::parse).transpose()
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Settings together with where they came from.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// Effective settings.
    pub settings: Settings,
    /// File that was (or would have been) read.
    pub path: PathBuf,
    /// Whether the file existed.
    pub found: bool,
}

/// `<config dir>/onepatch/config.toml`, falling back to the working directory.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(CONFIG_FILE)
}
