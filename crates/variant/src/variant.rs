//! [`Variant`] — the tagged value union carried by the wire format.

use crate::constants::VariantTag;
use crate::error::VariantError;

/// A plane in Hessian normal form, as the peer engine represents it.
///
/// All four fields travel as consecutive little-endian f32 values in
/// x, y, z, distance order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub distance: f32,
}

/// Tagged value union over every kind the wire format carries.
///
/// Variants form a tree: composites own their children by value, so no
/// cycles can occur. Values are ephemeral — built from wire bytes or by the
/// caller just before encoding, and never mutated in place afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Nil,
    Bool(bool),
    /// Tagged integer kind; 64-bit end-to-end so the full range round-trips
    /// exactly.
    Int(i64),
    /// Tagged float kind; 64-bit end-to-end.
    Float(f64),
    Str(String),
    Plane(Plane),
    /// Heterogeneous sequence of tagged child values, in insertion order.
    Array(Vec<Variant>),
    /// Ordered key/value pairs in wire order; keys may be of any kind and
    /// are never re-sorted.
    Dictionary(Vec<(Variant, Variant)>),
    /// Homogeneous string sequence encoded without per-element tags.
    ///
    /// Never inferred during classification; callers opt in when they know
    /// every element is a string and want the smaller encoding.
    StringArray(Vec<String>),
}

impl Variant {
    /// The wire tag for this value's kind.
    pub fn tag(&self) -> VariantTag {
        match self {
            Variant::Nil => VariantTag::Nil,
            Variant::Bool(_) => VariantTag::Bool,
            Variant::Int(_) => VariantTag::Int,
            Variant::Float(_) => VariantTag::Float,
            Variant::Str(_) => VariantTag::String,
            Variant::Plane(_) => VariantTag::Plane,
            Variant::Array(_) => VariantTag::Array,
            Variant::Dictionary(_) => VariantTag::Dictionary,
            Variant::StringArray(_) => VariantTag::StringArray,
        }
    }

    /// Classifies an untyped JSON value into a Variant.
    ///
    /// Shape tests run in a fixed order: null, boolean, whole number vs
    /// fractional number, string, `{x, y, z, distance}` record, sequence,
    /// keyed mapping. A whole number above `i64::MAX`, or a number
    /// representable by no numeric kind, fails with
    /// [`VariantError::UnsupportedValueShape`].
    pub fn from_json(value: &serde_json::Value) -> Result<Variant, VariantError> {
        match value {
            serde_json::Value::Null => Ok(Variant::Nil),
            serde_json::Value::Bool(b) => Ok(Variant::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Variant::Int(i))
                } else if n.as_u64().is_some() {
                    // Whole number above i64::MAX: the tagged integer kind
                    // cannot hold it exactly.
                    Err(VariantError::UnsupportedValueShape)
                } else if let Some(f) = n.as_f64() {
                    Ok(Variant::Float(f))
                } else {
                    Err(VariantError::UnsupportedValueShape)
                }
            }
            serde_json::Value::String(s) => Ok(Variant::Str(s.clone())),
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(Variant::from_json(item)?);
                }
                Ok(Variant::Array(out))
            }
            serde_json::Value::Object(obj) => {
                if let Some(plane) = plane_record(obj) {
                    return Ok(Variant::Plane(plane));
                }
                let mut out = Vec::with_capacity(obj.len());
                for (key, val) in obj {
                    out.push((Variant::Str(key.clone()), Variant::from_json(val)?));
                }
                Ok(Variant::Dictionary(out))
            }
        }
    }
}

/// Matches an object holding exactly the four numeric plane fields.
fn plane_record(obj: &serde_json::Map<String, serde_json::Value>) -> Option<Plane> {
    if obj.len() != 4 {
        return None;
    }
    let field = |name: &str| obj.get(name).and_then(serde_json::Value::as_f64);
    Some(Plane {
        x: field("x")? as f32,
        y: field("y")? as f32,
        z: field("z")? as f32,
        distance: field("distance")? as f32,
    })
}

impl From<Variant> for serde_json::Value {
    fn from(value: Variant) -> Self {
        match value {
            Variant::Nil => serde_json::Value::Null,
            Variant::Bool(b) => serde_json::Value::Bool(b),
            Variant::Int(i) => serde_json::Value::from(i),
            Variant::Float(f) => serde_json::Value::from(f),
            Variant::Str(s) => serde_json::Value::String(s),
            Variant::Plane(p) => serde_json::json!({
                "x": p.x,
                "y": p.y,
                "z": p.z,
                "distance": p.distance,
            }),
            Variant::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Variant::Dictionary(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, val)| (json_key(key), serde_json::Value::from(val)))
                    .collect(),
            ),
            Variant::StringArray(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::String).collect())
            }
        }
    }
}

/// JSON object keys must be strings; non-string Variant keys render as their
/// JSON text.
fn json_key(key: Variant) -> String {
    match key {
        Variant::Str(s) => s,
        other => serde_json::Value::from(other).to_string(),
    }
}
