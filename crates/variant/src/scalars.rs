//! Tagless scalar helpers for callers that already know the wire type from
//! surrounding context (for example, elements inside a StringArray).
//!
//! Each pair reads or writes a bare payload with no leading tag, using the
//! exact little-endian layouts of the tagged codecs.

use gd_buffers::{Reader, Writer};

use crate::decoder::{self, VariantDecoder};
use crate::encoder::{self, VariantEncoder};
use crate::error::VariantError;

/// Padding needed after `len` content bytes to reach a 4-byte boundary.
pub(crate) fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

macro_rules! scalar_pair {
    ($encode:ident, $decode:ident, $ty:ty, $write:ident, $read:ident, $name:literal) => {
        #[doc = concat!("Encodes a bare little-endian ", $name, " with no leading tag.")]
        pub fn $encode(value: $ty) -> Vec<u8> {
            let mut writer = Writer::with_capacity(std::mem::size_of::<$ty>());
            writer.$write(value);
            writer.into_vec()
        }

        #[doc = concat!("Decodes a bare little-endian ", $name, " from the start of `data`.")]
        pub fn $decode(data: &[u8]) -> Result<$ty, VariantError> {
            let mut reader = Reader::new(data);
            Ok(reader.$read()?)
        }
    };
}

scalar_pair!(encode_i8, decode_i8, i8, i8, try_i8, "i8");
scalar_pair!(encode_u8, decode_u8, u8, u8, try_u8, "u8");
scalar_pair!(encode_i16, decode_i16, i16, i16, try_i16, "i16");
scalar_pair!(encode_u16, decode_u16, u16, u16, try_u16, "u16");
scalar_pair!(encode_i32, decode_i32, i32, i32, try_i32, "i32");
scalar_pair!(encode_u32, decode_u32, u32, u32, try_u32, "u32");
scalar_pair!(encode_i64, decode_i64, i64, i64, try_i64, "i64");
scalar_pair!(encode_u64, decode_u64, u64, u64, try_u64, "u64");
scalar_pair!(encode_f32, decode_f32, f32, f32, try_f32, "f32");
scalar_pair!(encode_f64, decode_f64, f64, f64, try_f64, "f64");

/// Encodes a bare string payload: u32 byte length, UTF-8 content, zero
/// padding up to the next 4-byte boundary. No leading tag.
pub fn encode_string(value: &str) -> Vec<u8> {
    let mut e = VariantEncoder::new();
    encoder::write_string_payload(&mut e, value);
    e.into_bytes()
}

/// Decodes a bare string payload from the start of `data`.
///
/// Returns the string and the bytes consumed (length prefix, content, and
/// padding), so callers iterating a sequence of payloads can advance their
/// cursor past the padding.
pub fn decode_string(data: &[u8]) -> Result<(String, usize), VariantError> {
    let mut d = VariantDecoder::new(data);
    let value = decoder::read_string_payload(&mut d)?;
    Ok((value, d.consumed()))
}
