//! Generic tagged encode: map the value's kind to its tag, resolve the
//! registry, and write tag then payload.

use gd_buffers::Writer;

use crate::error::VariantError;
use crate::registry;
use crate::scalars::pad_len;
use crate::variant::Variant;

/// Buffer-owning encoder; the mirror of [`VariantDecoder`].
///
/// [`VariantDecoder`]: crate::VariantDecoder
#[derive(Default)]
pub struct VariantEncoder {
    pub(crate) writer: Writer,
}

impl VariantEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the encoder and returns everything written.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_vec()
    }

    /// Writes one tagged Variant: a 4-byte little-endian tag derived from
    /// the value's kind, then the payload of the codec the registry
    /// resolves for that tag.
    pub fn write_variant(&mut self, value: &Variant) -> Result<(), VariantError> {
        let tag = value.tag() as u32;
        let codec = registry::lookup(tag)?;
        self.writer.u32(tag);
        (codec.encode)(self, value)
    }
}

// Payload encoders registered per tag, mirrors of the decoder fns. Each is
// total over Variant; a mismatched kind reports UnsupportedValueShape,
// though the tag dispatch in write_variant never produces one.

// ------------------------------------------------------------------ leaves

pub(crate) fn write_nil(_: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Nil => Ok(()),
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_bool(e: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Bool(b) => {
            e.writer.u8(*b as u8);
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_int(e: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Int(i) => {
            e.writer.i64(*i);
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_float(e: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Float(f) => {
            e.writer.f64(*f);
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_plane(e: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Plane(p) => {
            e.writer.f32(p.x);
            e.writer.f32(p.y);
            e.writer.f32(p.z);
            e.writer.f32(p.distance);
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_str(e: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Str(s) => {
            write_string_payload(e, s);
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

/// String payload: u32 byte length, UTF-8 content, zero padding up to the
/// next 4-byte boundary.
pub(crate) fn write_string_payload(e: &mut VariantEncoder, s: &str) {
    let bytes = s.as_bytes();
    e.writer.u32(bytes.len() as u32);
    e.writer.buf(bytes);
    e.writer.pad(pad_len(bytes.len()));
}

// -------------------------------------------------------------- composites

pub(crate) fn write_array(e: &mut VariantEncoder, value: &Variant) -> Result<(), VariantError> {
    match value {
        Variant::Array(items) => {
            e.writer.u32(items.len() as u32);
            for item in items {
                e.write_variant(item)?;
            }
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_dictionary(
    e: &mut VariantEncoder,
    value: &Variant,
) -> Result<(), VariantError> {
    match value {
        Variant::Dictionary(entries) => {
            e.writer.u32(entries.len() as u32);
            for (key, val) in entries {
                e.write_variant(key)?;
                e.write_variant(val)?;
            }
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

pub(crate) fn write_string_array(
    e: &mut VariantEncoder,
    value: &Variant,
) -> Result<(), VariantError> {
    match value {
        Variant::StringArray(items) => {
            e.writer.u32(items.len() as u32);
            for item in items {
                write_string_payload(e, item);
            }
            Ok(())
        }
        _ => Err(VariantError::UnsupportedValueShape),
    }
}

/// Encodes one value as a tagged wire Variant.
pub fn encode_variant(value: &Variant) -> Result<Vec<u8>, VariantError> {
    let mut encoder = VariantEncoder::new();
    encoder.write_variant(value)?;
    Ok(encoder.into_bytes())
}

/// Classifies an untyped JSON value and encodes it as a tagged Variant.
pub fn encode_json(value: &serde_json::Value) -> Result<Vec<u8>, VariantError> {
    encode_variant(&Variant::from_json(value)?)
}
