//! Immutable wire-tag to codec dispatch table.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::VariantTag;
use crate::decoder::{self, VariantDecoder};
use crate::encoder::{self, VariantEncoder};
use crate::error::VariantError;
use crate::variant::Variant;

/// Payload decode half of a codec pair. Runs after the tag has been
/// consumed; the decoder's cursor sits at the first payload byte.
pub type DecodeFn = fn(&mut VariantDecoder) -> Result<Variant, VariantError>;

/// Payload encode half of a codec pair. The tag has already been written.
pub type EncodeFn = fn(&mut VariantEncoder, &Variant) -> Result<(), VariantError>;

/// A pure (decode, encode) function pair registered for one wire tag.
#[derive(Clone, Copy)]
pub struct VariantCodec {
    pub decode: DecodeFn,
    pub encode: EncodeFn,
}

fn build() -> HashMap<u32, VariantCodec> {
    let mut table = HashMap::new();
    let mut register = |tag: VariantTag, decode: DecodeFn, encode: EncodeFn| {
        table.insert(tag as u32, VariantCodec { decode, encode });
    };
    register(VariantTag::Nil, decoder::read_nil, encoder::write_nil);
    register(VariantTag::Bool, decoder::read_bool, encoder::write_bool);
    register(VariantTag::Int, decoder::read_int, encoder::write_int);
    register(VariantTag::Float, decoder::read_float, encoder::write_float);
    register(VariantTag::String, decoder::read_str, encoder::write_str);
    register(VariantTag::Plane, decoder::read_plane, encoder::write_plane);
    register(
        VariantTag::Dictionary,
        decoder::read_dictionary,
        encoder::write_dictionary,
    );
    register(VariantTag::Array, decoder::read_array, encoder::write_array);
    register(
        VariantTag::StringArray,
        decoder::read_string_array,
        encoder::write_string_array,
    );
    table
}

/// Process-wide registry, built once on first use and read-only afterwards.
/// Concurrent lookups are safe without synchronization because the table is
/// never mutated post-init.
fn registry() -> &'static HashMap<u32, VariantCodec> {
    static REGISTRY: OnceLock<HashMap<u32, VariantCodec>> = OnceLock::new();
    REGISTRY.get_or_init(build)
}

/// O(1) lookup of the codec pair registered for `tag`.
pub fn lookup(tag: u32) -> Result<&'static VariantCodec, VariantError> {
    registry()
        .get(&tag)
        .ok_or(VariantError::UnknownTypeTag(tag))
}
