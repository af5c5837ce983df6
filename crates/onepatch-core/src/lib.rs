//! Preset model and codecs for the kiloHearts kHs ONE synthesizer.
//!
//! kHs ONE presets live in four on-disk formats. This crate decodes each of
//! them into one canonical [`Preset`] and encodes a preset back into any of
//! them.
//!
//! # Formats
//!
//! - **FXP** ([`fxp`]): VST2 program chunk, big-endian headers around a
//!   little-endian float array
//! - **FXB** ([`fxb`]): VST2 bank of exactly 100 programs
//! - **AU** ([`au`]): Apple plist with the FXP embedded as base64
//! - **Reason** ([`reason`]): `JukeboxPatch` XML with derived delay/LFO knobs
//!
//! All codecs are pure functions over byte slices. Nothing here touches the
//! filesystem.
//!
//! # Example
//!
//! ```rust
//! use onepatch_core::{Preset, decode_fxp, encode_fxp, encode_reason};
//!
//! let mut preset = Preset::new("Soft Pad");
//! preset.set_value("AMP_ENV_A", 0.6).unwrap();
//!
//! let fxp = encode_fxp(&preset);
//! let decoded = decode_fxp(&fxp).unwrap();
//! assert_eq!(decoded.name, "Soft Pad");
//!
//! let repatch = encode_reason(&decoded);
//! assert!(repatch.starts_with(b"<?xml version=\"1.0\"?>"));
//! ```

mod error;
mod param;
mod preset;
mod bank;

/// Magic numbers and fixed-width byte primitives.
pub mod magic;

/// The fixed parameter catalog.
pub mod schema;

/// Reason-only derived parameters.
pub mod derived;

/// Presets bundled with the library.
pub mod factory_presets;

pub mod fxp;
pub mod fxb;
pub mod au;
pub mod reason;

/// Format selection and conversion.
pub mod format;

pub use error::DecodeError;
pub use param::{ParamKind, Parameter, Steps};
pub use preset::{MIN_SUPPORTED_VERSION, Preset};
pub use bank::{BANK_SIZE, Bank};
pub use schema::ParamSpec;
pub use derived::{DerivedParams, TransferParams};
pub use factory_presets::{INIT_PRESET_NAME, init_preset};
pub use fxp::{decode_fxp, encode_fxp};
pub use fxb::{decode_fxb, encode_fxb};
pub use au::{decode_au, encode_au};
pub use reason::{decode_reason, encode_reason};
pub use format::{Document, Encoded, Format, UnknownFormat};
