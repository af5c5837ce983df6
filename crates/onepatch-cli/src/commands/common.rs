//! Shared CLI helpers used across multiple commands.

use std::path::{Path, PathBuf};

use anyhow::Context;
use onepatch_core::format::{self, FALLBACK_STEM};
use onepatch_core::{Document, Format};

use crate::settings::Settings;

/// Read and decode a preset or bank file.
///
/// The format comes from `from` when given, otherwise from the extension.
pub fn read_document(path: &Path, from: Option<Format>) -> anyhow::Result<(Format, Document)> {
    let format = match from.or_else(|| Format::from_path(path)) {
        Some(format) => format,
        None => anyhow::bail!(
            "Cannot tell the format of '{}'. Use --from to name it.",
            path.display()
        ),
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let document = format::decode(format, &bytes, &file_stem(path))
        .with_context(|| format!("failed to decode '{}' as {format}", path.display()))?;
    Ok((format, document))
}

/// File stem of `path` as UTF-8, lossy.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_STEM.to_string())
}

/// Resolve the target format from `--to` or the settings.
pub fn target_format(to: Option<Format>, settings: &Settings) -> anyhow::Result<Format> {
    if let Some(format) = to {
        return Ok(format);
    }
    match settings.default_format()? {
        Some(format) => Ok(format),
        None => anyhow::bail!("No target format. Pass --to or set default_format in the settings."),
    }
}

/// Resolve the output directory from `--out-dir` or the settings.
pub fn output_dir(out_dir: Option<PathBuf>, settings: &Settings) -> PathBuf {
    out_dir
        .or_else(|| settings.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write `bytes` to `path`, refusing to replace an existing file unless
/// `overwrite` is set.
pub fn write_output(path: &Path, bytes: &[u8], overwrite: bool) -> anyhow::Result<()> {
    if path.exists() && !overwrite {
        anyhow::bail!(
            "'{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_format_prefers_flag() {
        let settings = Settings {
            default_format: Some("au".to_string()),
            ..Settings::default()
        };
        assert_eq!(target_format(Some(Format::Fxp), &settings).unwrap(), Format::Fxp);
        assert_eq!(target_format(None, &settings).unwrap(), Format::Au);
        assert!(target_format(None, &Settings::default()).is_err());
    }

    #[test]
    fn output_dir_falls_back_to_settings_then_cwd() {
        let settings = Settings {
            output_dir: Some(PathBuf::from("conf")),
            ..Settings::default()
        };
        assert_eq!(output_dir(Some("flag".into()), &settings), PathBuf::from("flag"));
        assert_eq!(output_dir(None, &settings), PathBuf::from("conf"));
        assert_eq!(output_dir(None, &Settings::default()), PathBuf::from("."));
    }
}
