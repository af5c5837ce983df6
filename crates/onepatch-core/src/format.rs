//! Format selection and conversion between any two formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::au::{decode_au, encode_au};
use crate::bank::Bank;
use crate::error::DecodeError;
use crate::fxb::{decode_fxb, encode_fxb};
use crate::fxp::{decode_fxp, encode_fxp};
use crate::preset::Preset;
use crate::reason::{decode_reason, encode_reason};

/// One of the four on-disk representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// VST2 program (`.fxp`).
    Fxp,
    /// VST2 bank of 100 programs (`.fxb`).
    Fxb,
    /// Audio Unit preset (`.aupreset`).
    Au,
    /// Reason Rack Extension patch (`.repatch`).
    Reason,
}

impl Format {
    /// All formats, in display order.
    pub const ALL: [Format; 4] = [Format::Fxp, Format::Fxb, Format::Au, Format::Reason];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Fxp => "fxp",
            Format::Fxb => "fxb",
            Format::Au => "aupreset",
            Format::Reason => "repatch",
        }
    }

    /// Match a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether the format holds a bank rather than a single preset.
    pub fn is_bank(self) -> bool {
        self == Format::Fxb
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Fxp => "fxp",
            Format::Fxb => "fxb",
            Format::Au => "au",
            Format::Reason => "reason",
        };
        f.write_str(name)
    }
}

/// Error returned when a format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}' (expected fxp, fxb, au or reason)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "fxp" => Ok(Format::Fxp),
            "fxb" => Ok(Format::Fxb),
            "au" | "aupreset" | "aup" => Ok(Format::Au),
            "reason" | "repatch" | "re" => Ok(Format::Reason),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// A decoded file: a single preset or a bank.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// FXP, AU or Reason content.
    Preset(Preset),
    /// FXB content.
    Bank(Bank),
}

impl Document {
    /// The presets held, in slot order.
    pub fn presets(&self) -> &[Preset] {
        match self {
            Document::Preset(preset) => std::slice::from_ref(preset),
            Document::Bank(bank) => &bank.presets,
        }
    }
}

/// Stem used when a name sanitizes to nothing.
pub const FALLBACK_STEM: &str = "Untitled";

/// An encoded output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// File name safe to create on any platform, `{stem}.{extension}`.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Decode `bytes` in `format`.
///
/// `name_hint` names presets whose format carries no name (Reason).
pub fn decode(format: Format, bytes: &[u8], name_hint: &str) -> Result<Document, DecodeError> {
    tracing::debug!(%format, len = bytes.len(), "decoding");
    Ok(match format {
        Format::Fxp => Document::Preset(decode_fxp(bytes)?),
        Format::Au => Document::Preset(decode_au(bytes)?),
        Format::Reason => Document::Preset(decode_reason(bytes, name_hint)?),
        Format::Fxb => Document::Bank(decode_fxb(bytes)?),
    })
}

/// Encode a single preset.
pub fn encode_preset(preset: &Preset, target: Format) -> Vec<u8> {
    match target {
        Format::Fxp => encode_fxp(preset),
        Format::Au => encode_au(preset),
        Format::Reason => encode_reason(preset),
        Format::Fxb => encode_fxb(&Bank::new(vec![preset.clone()])),
    }
}

/// Encode a document into `target`.
///
/// A preset becomes one file named after it; written as FXB it fills slot 1
/// of an otherwise init bank. A bank written as FXB becomes one file named
/// `bank_stem`; written as any other format it becomes one file per slot,
/// numbered so that duplicate preset names never collide.
pub fn encode(document: &Document, target: Format, bank_stem: &str) -> Vec<Encoded> {
    match (document, target) {
        (Document::Preset(preset), _) => vec![Encoded {
            file_name: suggested_file_name(&sanitize_stem(&preset.name), target),
            bytes: encode_preset(preset, target),
        }],
        (Document::Bank(bank), Format::Fxb) => vec![Encoded {
            file_name: suggested_file_name(&sanitize_stem(bank_stem), target),
            bytes: encode_fxb(bank),
        }],
        (Document::Bank(bank), _) => bank
            .iter()
            .enumerate()
            .map(|(slot, preset)| Encoded {
                file_name: slot_file_name(slot, preset, target),
                bytes: encode_preset(preset, target),
            })
            .collect(),
    }
}

/// `{stem}.{extension}` for `format`.
pub fn suggested_file_name(stem: &str, format: Format) -> String {
    format!("{stem}.{}", format.extension())
}

/// Make a preset name safe to use as a file stem.
///
/// Path separators, control characters and characters Windows reserves are
/// replaced by `_`. Leading and trailing whitespace and dots are dropped.
pub fn sanitize_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Output file name for the preset in bank slot `slot` (zero-based).
pub fn slot_file_name(slot: usize, preset: &Preset, target: Format) -> String {
    suggested_file_name(
        &format!("{:03} {}", slot + 1, sanitize_stem(&preset.name)),
        target,
    )
}
