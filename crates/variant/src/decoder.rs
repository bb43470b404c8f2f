//! Generic tagged decode: read a 4-byte tag, resolve the registry, and
//! recurse into composite payloads with exact cursor accounting.

use gd_buffers::Reader;

use crate::error::VariantError;
use crate::registry;
use crate::scalars::pad_len;
use crate::variant::{Plane, Variant};

/// Result of a successful top-level decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The decoded value.
    pub value: Variant,
    /// Bytes consumed from the start of the input, tag included. Always
    /// equals exactly what the matching encoder would have produced.
    pub length: usize,
}

/// Cursor-tracking decoder over a borrowed byte buffer.
///
/// The input is never mutated; composite decodes walk elements strictly in
/// sequence because each child's offset is only known once all prior
/// children's lengths have been consumed.
pub struct VariantDecoder<'a> {
    pub(crate) reader: Reader<'a>,
}

impl<'a> VariantDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.reader.pos()
    }

    /// Reads one tagged Variant at the cursor: a 4-byte little-endian tag,
    /// then the payload of whichever codec the registry resolves.
    pub fn read_variant(&mut self) -> Result<Variant, VariantError> {
        let tag = self.reader.try_u32()?;
        let codec = registry::lookup(tag)?;
        (codec.decode)(self)
    }
}

// Payload decoders registered per tag. Free functions so they coerce to the
// registry's fn pointer type.

// ------------------------------------------------------------------ leaves

pub(crate) fn read_nil(_: &mut VariantDecoder) -> Result<Variant, VariantError> {
    Ok(Variant::Nil)
}

/// Bool payload is a single byte; any nonzero value decodes as true.
pub(crate) fn read_bool(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    Ok(Variant::Bool(d.reader.try_u8()? != 0))
}

pub(crate) fn read_int(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    Ok(Variant::Int(d.reader.try_i64()?))
}

pub(crate) fn read_float(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    Ok(Variant::Float(d.reader.try_f64()?))
}

/// Four consecutive f32 fields in x, y, z, distance order.
pub(crate) fn read_plane(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    let x = d.reader.try_f32()?;
    let y = d.reader.try_f32()?;
    let z = d.reader.try_f32()?;
    let distance = d.reader.try_f32()?;
    Ok(Variant::Plane(Plane { x, y, z, distance }))
}

pub(crate) fn read_str(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    Ok(Variant::Str(read_string_payload(d)?))
}

/// String payload: u32 byte length, UTF-8 content, then padding up to the
/// next 4-byte boundary. Padding byte values are ignored.
pub(crate) fn read_string_payload(d: &mut VariantDecoder) -> Result<String, VariantError> {
    let len = d.reader.try_u32()? as usize;
    let content = d.reader.try_utf8(len)?.to_owned();
    d.reader.skip(pad_len(len))?;
    Ok(content)
}

// -------------------------------------------------------------- composites

/// Elements are full tagged Variants, heterogeneous kinds allowed.
pub(crate) fn read_array(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    let count = d.reader.try_u32()? as usize;
    let mut items = Vec::with_capacity(count.min(d.reader.remaining()));
    for _ in 0..count {
        items.push(d.read_variant()?);
    }
    Ok(Variant::Array(items))
}

/// Each entry is two tagged Variants, key first, then value. Wire order is
/// preserved.
pub(crate) fn read_dictionary(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    let count = d.reader.try_u32()? as usize;
    // Each entry needs at least two 4-byte tags; a count past what the
    // remaining bytes could hold would be rejected by the element reads, so
    // never preallocate more than that.
    let mut entries = Vec::with_capacity(count.min(d.reader.remaining() / 8));
    for _ in 0..count {
        let key = d.read_variant()?;
        let value = d.read_variant()?;
        entries.push((key, value));
    }
    Ok(Variant::Dictionary(entries))
}

/// Fast path: elements are bare string payloads with no leading tags.
pub(crate) fn read_string_array(d: &mut VariantDecoder) -> Result<Variant, VariantError> {
    let count = d.reader.try_u32()? as usize;
    // Each bare string payload is at least a 4-byte length prefix.
    let mut items = Vec::with_capacity(count.min(d.reader.remaining() / 4));
    for _ in 0..count {
        items.push(read_string_payload(d)?);
    }
    Ok(Variant::StringArray(items))
}

/// Decodes one tagged Variant from the start of `data`.
///
/// Trailing bytes past the value are left unread; `length` reports exactly
/// how many bytes the value occupied.
pub fn decode_variant(data: &[u8]) -> Result<Decoded, VariantError> {
    let mut decoder = VariantDecoder::new(data);
    let value = decoder.read_variant()?;
    Ok(Decoded {
        value,
        length: decoder.consumed(),
    })
}
