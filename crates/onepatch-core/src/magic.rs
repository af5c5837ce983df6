//! Magic numbers and fixed-width primitives shared by the binary codecs.
//!
//! VST2 chunk files mix byte orders: the outer headers are big-endian while
//! the opaque plugin chunk written by kHs ONE is little-endian. [`ByteReader`]
//! and the `put_*` writers make the order explicit at every call site.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::DecodeError;

/// Interpret four ASCII bytes as a big-endian `u32`, the way VST2 stores magics.
pub const fn magic(tag: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*tag)
}

/// Outer chunk magic for both FXP and FXB files.
pub const CHUNK_MAGIC: &[u8; 4] = b"CcnK";

/// Inner magic of an opaque-chunk program file.
pub const PRESET_MAGIC: &[u8; 4] = b"FPCh";

/// Inner magic of an opaque-chunk bank file.
pub const BANK_MAGIC: &[u8; 4] = b"FBCh";

/// kHs ONE plugin identifier. Also the AU `subtype`.
pub const EFFECT_ID: &[u8; 4] = b"kHs1";

/// AU manufacturer code (`" kHs"`).
pub const AU_MANUFACTURER: &[u8; 4] = b" kHs";

/// AU component type for music devices (`"aumu"`).
pub const AU_TYPE: &[u8; 4] = b"aumu";

/// Usable bytes of a program name.
pub const NAME_MAX_BYTES: usize = 24;

/// On-disk width of a program name field, including padding.
pub const NAME_FIELD_BYTES: usize = 28;

/// Sequential reader over a borrowed byte buffer.
///
/// Every read checks the remaining length first, so a short buffer surfaces
/// as [`DecodeError::TruncatedBuffer`] instead of a panic.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    /// Start reading at the beginning of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Consume the next `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.buf.len() < len {
            return Err(DecodeError::TruncatedBuffer {
                needed: len,
                available: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        self.take(len).map(|_| ())
    }

    /// Read a big-endian `u32`.
    pub fn read_u32_be(&mut self) -> Result<u32, DecodeError> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    /// Read a little-endian `u32`.
    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Read a little-endian IEEE-754 single.
    pub fn read_f32_le(&mut self) -> Result<f32, DecodeError> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    /// Read a big-endian magic and fail unless it equals `expected`.
    pub fn expect_magic(&mut self, expected: &[u8; 4]) -> Result<(), DecodeError> {
        let found = self.read_u32_be()?;
        if found != magic(expected) {
            return Err(DecodeError::malformed_header(expected, found));
        }
        Ok(())
    }
}

/// Append a big-endian `u32`.
pub fn put_u32_be(out: &mut Vec<u8>, value: u32) {
    let mut field = [0u8; 4];
    BigEndian::write_u32(&mut field, value);
    out.extend_from_slice(&field);
}

/// Append a little-endian `u32`.
pub fn put_u32_le(out: &mut Vec<u8>, value: u32) {
    let mut field = [0u8; 4];
    LittleEndian::write_u32(&mut field, value);
    out.extend_from_slice(&field);
}

/// Append a little-endian IEEE-754 single.
pub fn put_f32_le(out: &mut Vec<u8>, value: f32) {
    let mut field = [0u8; 4];
    LittleEndian::write_f32(&mut field, value);
    out.extend_from_slice(&field);
}

/// Append a four-byte magic.
pub fn put_magic(out: &mut Vec<u8>, tag: &[u8; 4]) {
    put_u32_be(out, magic(tag));
}

/// Append a program name as a 28-byte field.
///
/// The UTF-8 bytes are cropped to at most 24 (never splitting a character)
/// and the remainder is zero-filled.
pub fn put_name_field(out: &mut Vec<u8>, name: &str) {
    let mut end = name.len().min(NAME_MAX_BYTES);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    out.extend_from_slice(&name.as_bytes()[..end]);
    out.resize(out.len() + NAME_FIELD_BYTES - end, 0);
}

/// Decode a name field, dropping the trailing NUL padding.
pub fn read_name_field(field: &[u8]) -> String {
    String::from_utf8_lossy(field)
        .trim_end_matches('\0')
        .to_string()
}
