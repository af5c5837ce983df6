//! FXP: a single program as a VST2 opaque chunk.
//!
//! # Layout
//!
//! All header integers are big-endian; the plugin chunk is little-endian.
//!
//! | Field            | Size | Value                                  |
//! |------------------|------|----------------------------------------|
//! | chunk magic      | 4    | `CcnK`                                 |
//! | byte size        | 4    | bytes after this field                 |
//! | fx magic         | 4    | `FPCh`                                 |
//! | format version   | 4    | `1`                                    |
//! | fx id            | 4    | `kHs1`                                 |
//! | plugin version   | 4    | e.g. `1014`                            |
//! | parameter count  | 4    | schema length                          |
//! | program name     | 28   | 24 usable bytes, NUL padded            |
//! | chunk size       | 4    | size of the parameter chunk            |
//! | parameter chunk  | n    | see [`encode_param_chunk`]             |

use crate::error::DecodeError;
use crate::magic::{
    ByteReader, CHUNK_MAGIC, EFFECT_ID, NAME_FIELD_BYTES, PRESET_MAGIC, put_f32_le, put_magic,
    put_name_field, put_u32_be, put_u32_le, read_name_field,
};
use crate::preset::{MIN_SUPPORTED_VERSION, Preset};
use crate::schema;

/// VST2 chunk format version written after the inner magic.
pub(crate) const FORMAT_VERSION: u32 = 1;

/// Serialize a preset as an FXP file.
pub fn encode_fxp(preset: &Preset) -> Vec<u8> {
    let chunk = encode_param_chunk(preset);

    let mut body = Vec::with_capacity(24 + NAME_FIELD_BYTES + chunk.len());
    put_magic(&mut body, PRESET_MAGIC);
    put_u32_be(&mut body, FORMAT_VERSION);
    put_magic(&mut body, EFFECT_ID);
    put_u32_be(&mut body, preset.version);
    put_u32_be(&mut body, preset.len() as u32);
    put_name_field(&mut body, &preset.name);
    put_u32_be(&mut body, chunk.len() as u32);
    body.extend_from_slice(&chunk);

    let mut out = Vec::with_capacity(8 + body.len());
    put_magic(&mut out, CHUNK_MAGIC);
    put_u32_be(&mut out, body.len() as u32);
    out.extend_from_slice(&body);
    out
}

/// Parse an FXP file.
///
/// The header is validated in full before any parameter is read, so a
/// rejected file never yields a partially populated preset.
pub fn decode_fxp(bytes: &[u8]) -> Result<Preset, DecodeError> {
    let mut reader = ByteReader::new(bytes);

    reader.expect_magic(CHUNK_MAGIC)?;
    let _byte_size = reader.read_u32_be()?;
    reader.expect_magic(PRESET_MAGIC)?;
    let _format_version = reader.read_u32_be()?;
    reader.expect_magic(EFFECT_ID)?;
    let version = reader.read_u32_be()?;
    check_version(version)?;
    let param_count = reader.read_u32_be()?;

    let name = read_name_field(reader.take(NAME_FIELD_BYTES)?);
    let chunk_size = reader.read_u32_be()? as usize;
    let chunk = reader.take(chunk_size)?;

    tracing::debug!(name = %name, version, param_count, chunk_size, "decoding fxp");

    let mut preset = Preset::new(name);
    decode_param_chunk(&mut preset, chunk)?;
    if preset.version != version {
        tracing::trace!(version, chunk_version = preset.version, "chunk version differs from header");
    }
    Ok(preset)
}

/// Serialize the plugin's opaque chunk: version, count, then one
/// little-endian `f32` per parameter in schema order.
pub fn encode_param_chunk(preset: &Preset) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + 4 * preset.len());
    put_u32_le(&mut out, preset.version);
    put_u32_le(&mut out, preset.len() as u32);
    for param in preset.iter() {
        put_f32_le(&mut out, param.normalized_value() as f32);
    }
    out
}

/// Read an opaque chunk into `preset`.
///
/// The chunk's own version is the preset's version, for FXP programs and FXB
/// slots alike; it must be at least [`MIN_SUPPORTED_VERSION`]. A container
/// header version is only checked against the same minimum. The declared
/// parameter count is advisory; exactly one value per schema entry is
/// consumed.
pub fn decode_param_chunk(preset: &mut Preset, chunk: &[u8]) -> Result<(), DecodeError> {
    let mut reader = ByteReader::new(chunk);
    let version = reader.read_u32_le()?;
    check_version(version)?;
    let declared = reader.read_u32_le()?;
    if declared as usize != schema::len() {
        tracing::trace!(declared, expected = schema::len(), "parameter count mismatch");
    }
    for param in preset.iter_mut() {
        let value = reader.read_f32_le()?;
        param.set_normalized_value(f64::from(value))?;
    }
    preset.version = version;
    Ok(())
}

pub(crate) fn check_version(version: u32) -> Result<(), DecodeError> {
    if version < MIN_SUPPORTED_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            version,
            minimum: MIN_SUPPORTED_VERSION,
        });
    }
    Ok(())
}
