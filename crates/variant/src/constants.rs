//! Wire tag constants, one per Variant kind.

/// 4-byte little-endian type tags identifying a Variant's kind on the wire.
///
/// Values follow the peer engine's Variant type ordering and are stable for
/// the lifetime of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum VariantTag {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Plane = 9,
    Dictionary = 18,
    Array = 19,
    StringArray = 23,
}

impl VariantTag {
    /// Checked conversion from a raw wire tag.
    pub fn from_u32(raw: u32) -> Option<VariantTag> {
        match raw {
            0 => Some(VariantTag::Nil),
            1 => Some(VariantTag::Bool),
            2 => Some(VariantTag::Int),
            3 => Some(VariantTag::Float),
            4 => Some(VariantTag::String),
            9 => Some(VariantTag::Plane),
            18 => Some(VariantTag::Dictionary),
            19 => Some(VariantTag::Array),
            23 => Some(VariantTag::StringArray),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_roundtrip() {
        for tag in [
            VariantTag::Nil,
            VariantTag::Bool,
            VariantTag::Int,
            VariantTag::Float,
            VariantTag::String,
            VariantTag::Plane,
            VariantTag::Dictionary,
            VariantTag::Array,
            VariantTag::StringArray,
        ] {
            assert_eq!(VariantTag::from_u32(tag as u32), Some(tag));
        }
        assert_eq!(VariantTag::from_u32(5), None);
        assert_eq!(VariantTag::from_u32(0xab), None);
    }
}
