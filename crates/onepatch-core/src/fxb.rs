//! FXB: a 100-program bank as a VST2 opaque chunk.
//!
//! The bank chunk is the plugin's own little-endian format: a version
//! followed by, for each program, a 28-byte name field, the program's
//! parameter-chunk length and the parameter chunk itself (the same chunk an
//! FXP carries, without any FXP headers around it).
//!
//! Slot names are read from the whole 28-byte field, the same way an FXP
//! program name is read, rather than only its first 24 bytes. Files this
//! crate writes never put more than 24 bytes of name there, so the two
//! readings only differ for foreign files that fill the padding; those keep
//! the extra bytes.

use crate::bank::{BANK_SIZE, Bank};
use crate::error::DecodeError;
use crate::fxp::{FORMAT_VERSION, check_version, decode_param_chunk, encode_param_chunk};
use crate::magic::{
    BANK_MAGIC, ByteReader, CHUNK_MAGIC, EFFECT_ID, NAME_FIELD_BYTES, put_magic, put_name_field,
    put_u32_be, put_u32_le, read_name_field,
};
use crate::preset::{MIN_SUPPORTED_VERSION, Preset};

/// Reserved bytes between the program count and the bank chunk.
const RESERVED_BYTES: usize = 128;

/// Serialize a bank as an FXB file with exactly 100 programs.
pub fn encode_fxb(bank: &Bank) -> Vec<u8> {
    let chunk = encode_bank_chunk(&bank.normalized_presets());

    let mut body = Vec::with_capacity(20 + RESERVED_BYTES + 4 + chunk.len());
    put_magic(&mut body, BANK_MAGIC);
    put_u32_be(&mut body, FORMAT_VERSION);
    put_magic(&mut body, EFFECT_ID);
    put_u32_be(&mut body, MIN_SUPPORTED_VERSION);
    put_u32_be(&mut body, BANK_SIZE as u32);
    body.resize(body.len() + RESERVED_BYTES, 0);
    put_u32_be(&mut body, chunk.len() as u32);
    body.extend_from_slice(&chunk);

    let mut out = Vec::with_capacity(8 + body.len());
    put_magic(&mut out, CHUNK_MAGIC);
    put_u32_be(&mut out, body.len() as u32);
    out.extend_from_slice(&body);
    out
}

fn encode_bank_chunk(presets: &[Preset]) -> Vec<u8> {
    let mut out = Vec::new();
    put_u32_le(&mut out, MIN_SUPPORTED_VERSION);
    for preset in presets {
        put_name_field(&mut out, &preset.name);
        let chunk = encode_param_chunk(preset);
        put_u32_le(&mut out, chunk.len() as u32);
        out.extend_from_slice(&chunk);
    }
    out
}

/// Parse an FXB file.
///
/// Header problems fail the whole bank. Inside the bank chunk, a program
/// whose parameter chunk cannot be read is skipped with a warning and the
/// rest are still returned. If the bank chunk itself ends early, the
/// programs read so far are returned.
pub fn decode_fxb(bytes: &[u8]) -> Result<Bank, DecodeError> {
    let mut reader = ByteReader::new(bytes);

    reader.expect_magic(CHUNK_MAGIC)?;
    let _byte_size = reader.read_u32_be()?;
    reader.expect_magic(BANK_MAGIC)?;
    let _format_version = reader.read_u32_be()?;
    reader.expect_magic(EFFECT_ID)?;
    let version = reader.read_u32_be()?;
    check_version(version)?;
    let program_count = reader.read_u32_be()?;
    reader.skip(RESERVED_BYTES)?;

    let chunk_size = reader.read_u32_be()? as usize;
    let chunk = reader.take(chunk_size)?;

    tracing::debug!(version, program_count, chunk_size, "decoding fxb");

    let presets = decode_bank_chunk(chunk, program_count as usize)?;
    Ok(Bank::new(presets))
}

fn decode_bank_chunk(chunk: &[u8], program_count: usize) -> Result<Vec<Preset>, DecodeError> {
    let mut reader = ByteReader::new(chunk);
    let bank_version = reader.read_u32_le()?;
    tracing::trace!(bank_version, "bank chunk");

    let mut presets = Vec::with_capacity(program_count.min(BANK_SIZE));
    for slot in 0..program_count {
        let (name, param_chunk) = match read_slot(&mut reader) {
            Ok(slot) => slot,
            Err(e) => {
                tracing::warn!(slot, "bank chunk ended early: {e}");
                break;
            }
        };

        let mut preset = Preset::new(name);
        match decode_param_chunk(&mut preset, param_chunk) {
            Ok(()) => presets.push(preset),
            Err(e) => tracing::warn!(slot, name = %preset.name, "skipping program: {e}"),
        }
    }
    Ok(presets)
}

fn read_slot<'a>(reader: &mut ByteReader<'a>) -> Result<(String, &'a [u8]), DecodeError> {
    let name = read_name_field(reader.take(NAME_FIELD_BYTES)?);
    let len = reader.read_u32_le()? as usize;
    Ok((name, reader.take(len)?))
}
