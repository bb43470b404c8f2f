use gd_variant::{
    decode_variant, encode_json, encode_variant, Plane, Variant, VariantError,
};
use serde_json::json;

fn roundtrip(value: &Variant) -> Variant {
    let encoded = encode_variant(value).unwrap_or_else(|e| panic!("encode failed: {e}"));
    let decoded = decode_variant(&encoded).unwrap_or_else(|e| panic!("decode failed: {e}"));
    assert_eq!(decoded.length, encoded.len(), "length accuracy for {value:?}");
    decoded.value
}

#[test]
fn variant_leaf_roundtrip_matrix() {
    let values = [
        Variant::Nil,
        Variant::Bool(true),
        Variant::Bool(false),
        Variant::Int(42),
        Variant::Int(-42),
        Variant::Int(0),
        Variant::Int(i64::MIN),
        Variant::Int(i64::MAX),
        Variant::Str(String::new()),
        Variant::Str("test".to_owned()),
        Variant::Str("true".to_owned()),
        Variant::Str("hello world hello world".to_owned()),
    ];
    for value in values {
        assert_eq!(roundtrip(&value), value);
    }
}

#[test]
fn variant_float_roundtrip_matrix() {
    for value in [-42.4, 42.45, 0.0, 0.15] {
        match roundtrip(&Variant::Float(value)) {
            Variant::Float(decoded) => {
                assert!((decoded - value).abs() < 1e-5, "{decoded} vs {value}")
            }
            other => panic!("expected float, got {other:?}"),
        }
    }
}

#[test]
fn plane_roundtrip_and_payload_size() {
    let plane = Variant::Plane(Plane {
        x: 1.5,
        y: -2.0,
        z: 0.0,
        distance: 10.25,
    });
    let encoded = encode_variant(&plane).unwrap();
    // 4-byte tag plus exactly 16 payload bytes.
    assert_eq!(encoded.len(), 20);
    assert_eq!(roundtrip(&plane), plane);
}

#[test]
fn array_roundtrip_preserves_heterogeneous_order() {
    let array = Variant::Array(vec![
        Variant::Nil,
        Variant::Bool(true),
        Variant::Bool(false),
        Variant::Int(12),
        Variant::Int(-12),
        Variant::Str("test".to_owned()),
        Variant::Array(vec![Variant::Int(1), Variant::Str("nested".to_owned())]),
        Variant::Dictionary(vec![(
            Variant::Str("key".to_owned()),
            Variant::Float(0.5),
        )]),
    ]);
    assert_eq!(roundtrip(&array), array);
}

#[test]
fn dictionary_roundtrip_preserves_wire_order_and_mixed_keys() {
    let dict = Variant::Dictionary(vec![
        (Variant::Str("test2".to_owned()), Variant::Nil),
        (Variant::Str("true".to_owned()), Variant::Bool(false)),
        (Variant::Int(12), Variant::Int(-12)),
        (Variant::Str("test".to_owned()), Variant::Str("test".to_owned())),
        (
            Variant::Str("nested".to_owned()),
            Variant::Dictionary(vec![(Variant::Str("deep".to_owned()), Variant::Int(1))]),
        ),
    ]);
    // Vec equality checks both pairs and their order; nothing is re-sorted.
    assert_eq!(roundtrip(&dict), dict);
}

#[test]
fn string_array_roundtrip_including_empty() {
    let values = [
        Variant::StringArray(vec![]),
        Variant::StringArray(vec!["hello".to_owned()]),
        Variant::StringArray(vec![
            "hello".to_owned(),
            "world".to_owned(),
            "hello world".to_owned(),
            String::new(),
        ]),
    ];
    for value in values {
        assert_eq!(roundtrip(&value), value);
    }
}

#[test]
fn string_array_is_smaller_than_tagged_array() {
    let strings = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    let fast = encode_variant(&Variant::StringArray(strings.clone())).unwrap();
    let generic = encode_variant(&Variant::Array(
        strings.into_iter().map(Variant::Str).collect(),
    ))
    .unwrap();
    // One 4-byte tag saved per element.
    assert_eq!(generic.len() - fast.len(), 3 * 4);
}

#[test]
fn trailing_bytes_are_left_unread() {
    let value = Variant::Array(vec![Variant::Int(518), Variant::Str("tail".to_owned())]);
    let mut encoded = encode_variant(&value).unwrap();
    let exact_len = encoded.len();
    encoded.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    let decoded = decode_variant(&encoded).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.length, exact_len);
}

#[test]
fn bool_nonzero_payload_decodes_true() {
    // Tag 1 (Bool) little-endian, then a nonzero payload byte.
    let decoded = decode_variant(&[0x01, 0x00, 0x00, 0x00, 0x02]).unwrap();
    assert_eq!(decoded.value, Variant::Bool(true));
    assert_eq!(decoded.length, 5);
}

#[test]
fn two_byte_buffer_fails_truncated() {
    assert_eq!(
        decode_variant(&[0x01, 0x00]).err(),
        Some(VariantError::TruncatedBuffer)
    );
}

#[test]
fn unregistered_tag_fails_unknown() {
    assert_eq!(
        decode_variant(&[0xab, 0x00, 0x00, 0x00, 0x00]).err(),
        Some(VariantError::UnknownTypeTag(0xab))
    );
}

#[test]
fn truncated_composite_child_fails() {
    let value = Variant::Array(vec![Variant::Str("hello".to_owned()), Variant::Int(7)]);
    let encoded = encode_variant(&value).unwrap();
    // Cutting anywhere inside the buffer must fail, never return a partial
    // array.
    for cut in 1..encoded.len() {
        assert_eq!(
            decode_variant(&encoded[..cut]).err(),
            Some(VariantError::TruncatedBuffer),
            "cut at {cut}"
        );
    }
}

#[test]
fn composite_count_exceeding_remaining_bytes_fails_truncated() {
    // A header claiming u32::MAX elements over an empty remainder must
    // report truncation, not attempt to reserve room for the claimed count.
    for tag in [19u8, 18, 23] {
        let bytes = [tag, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(
            decode_variant(&bytes).err(),
            Some(VariantError::TruncatedBuffer),
            "tag {tag}"
        );
    }
}

#[test]
fn string_payload_with_invalid_utf8_fails() {
    // Tag 4 (String), length 2, content 0xff 0xfe, two padding bytes.
    let bytes = [
        0x04, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0xff, 0xfe, 0x00, 0x00,
    ];
    assert_eq!(
        decode_variant(&bytes).err(),
        Some(VariantError::InvalidUtf8)
    );
}

#[test]
fn json_encode_roundtrip() {
    let value = json!({
        "test2": null,
        "true": false,
        "count": -12,
        "name": "test",
        "items": [null, true, 12, "test2", {"inner": 0.15}],
    });
    let encoded = encode_json(&value).unwrap();
    let decoded = decode_variant(&encoded).unwrap();
    assert_eq!(decoded.length, encoded.len());
    assert_eq!(serde_json::Value::from(decoded.value), value);
}

#[test]
fn json_plane_record_is_classified() {
    let encoded = encode_json(&json!({"x": 1.5, "y": -2.0, "z": 0.0, "distance": 10.25})).unwrap();
    let decoded = decode_variant(&encoded).unwrap();
    assert_eq!(
        decoded.value,
        Variant::Plane(Plane {
            x: 1.5,
            y: -2.0,
            z: 0.0,
            distance: 10.25,
        })
    );
}

#[test]
fn json_oversized_integer_fails_unsupported() {
    assert_eq!(
        encode_json(&json!(u64::MAX)).err(),
        Some(VariantError::UnsupportedValueShape)
    );
}
