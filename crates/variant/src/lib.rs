//! Binary codec for the self-describing tagged Variant wire format spoken
//! by Godot-style engine peers.
//!
//! Every value travels as a 4-byte little-endian type tag followed by a
//! kind-specific payload. [`encode_variant`] and [`decode_variant`] cover
//! the generic tagged path — composites (arrays, dictionaries, homogeneous
//! string arrays) recurse through the same tag dispatch per element. The
//! `scalars` helpers read and write bare payloads for callers that already
//! know the wire type from surrounding context.
//!
//! ```
//! use gd_variant::{decode_variant, encode_variant, Variant};
//!
//! let value = Variant::Array(vec![Variant::Int(42), Variant::Str("hi".into())]);
//! let bytes = encode_variant(&value).unwrap();
//! let decoded = decode_variant(&bytes).unwrap();
//! assert_eq!(decoded.value, value);
//! assert_eq!(decoded.length, bytes.len());
//! ```

mod constants;
mod decoder;
mod encoder;
mod error;
mod registry;
mod scalars;
mod variant;

pub use constants::VariantTag;
pub use decoder::{decode_variant, Decoded, VariantDecoder};
pub use encoder::{encode_json, encode_variant, VariantEncoder};
pub use error::VariantError;
pub use scalars::{
    decode_f32, decode_f64, decode_i16, decode_i32, decode_i64, decode_i8, decode_string,
    decode_u16, decode_u32, decode_u64, decode_u8, encode_f32, encode_f64, encode_i16, encode_i32,
    encode_i64, encode_i8, encode_string, encode_u16, encode_u32, encode_u64, encode_u8,
};
pub use variant::{Plane, Variant};
