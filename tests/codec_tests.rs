//! Tests for the key and value codecs
//!
//! These tests verify:
//! - Integer encodings preserve numeric order as byte strings
//! - Integer keys decode back to their value
//! - Text and byte keys encode to themselves
//! - Widths that are not integer layouts are rejected on decode

use proptest::prelude::*;
use rangekv::codec::{decode_int, decode_value, encode_value, I64_WIDTH, U32_WIDTH};
use rangekv::{Key, KvError};

// =============================================================================
// Order Preservation
// =============================================================================

proptest! {
    #[test]
    fn prop_u32_encoding_preserves_order(a: u32, b: u32) {
        let (ea, eb) = (Key::U32(a).encode(), Key::U32(b).encode());
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
    }

    #[test]
    fn prop_i64_encoding_preserves_order(a: i64, b: i64) {
        let (ea, eb) = (Key::I64(a).encode(), Key::I64(b).encode());
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
    }

    #[test]
    fn prop_u32_round_trip(n: u32) {
        prop_assert_eq!(decode_int(&Key::U32(n).encode()).unwrap(), i64::from(n));
    }

    #[test]
    fn prop_i64_round_trip(n: i64) {
        prop_assert_eq!(decode_int(&Key::I64(n).encode()).unwrap(), n);
    }

    #[test]
    fn prop_text_encodes_to_itself(s in ".*") {
        prop_assert_eq!(Key::from(s.as_str()).encode(), s.as_bytes().to_vec());
    }
}

#[test]
fn test_multibyte_values_sort_after_small_ones() {
    // 256 = [0x00, 0x00, 0x01, 0x00]; little-endian would give [0x00, 0x01, ...]
    assert!(Key::U32(1).encode() < Key::U32(256).encode());
    assert!(Key::U32(255).encode() < Key::U32(256).encode());
    assert!(Key::U32(65_535).encode() < Key::U32(65_536).encode());
}

#[test]
fn test_negative_sorts_before_positive() {
    assert!(Key::I64(-1).encode() < Key::I64(0).encode());
    assert!(Key::I64(i64::MIN).encode() < Key::I64(-1).encode());
    assert!(Key::I64(0).encode() < Key::I64(i64::MAX).encode());
}

// =============================================================================
// Layouts
// =============================================================================

#[test]
fn test_u32_layout() {
    assert_eq!(Key::U32(0x0102_0304).encode(), vec![0x01, 0x02, 0x03, 0x04]);
    assert_eq!(Key::U32(7).encoded_len(), U32_WIDTH);
}

#[test]
fn test_i64_layout() {
    assert_eq!(Key::I64(0).encode(), vec![0x80, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(Key::I64(-1).encode(), vec![0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(Key::I64(7).encoded_len(), I64_WIDTH);
}

#[test]
fn test_bytes_encode_to_themselves() {
    let raw: Vec<u8> = vec![0xff, 0x00, 0x10];
    assert_eq!(Key::from(raw.clone()).encode(), raw);
    assert_eq!(Key::from(&raw[..]).encode(), raw);
    assert_eq!(Key::from(b"abc").encode(), b"abc".to_vec());
}

#[test]
fn test_encoded_len_matches_encode() {
    let keys = [
        Key::U32(1),
        Key::I64(-9),
        Key::from("héllo"),
        Key::from(vec![1u8, 2, 3]),
        Key::from(""),
    ];
    for key in &keys {
        assert_eq!(key.encoded_len(), key.encode().len());
    }
}

#[test]
fn test_from_conversions() {
    assert_eq!(Key::from(5u32), Key::U32(5));
    assert_eq!(Key::from(-5i64), Key::I64(-5));
    assert_eq!(Key::from("a"), Key::Text("a".to_string()));
    assert_eq!(Key::from(String::from("a")), Key::Text("a".to_string()));
    assert_eq!(Key::from(&Key::U32(1)), Key::U32(1));
    assert!(Key::U32(1).is_integer());
    assert!(Key::I64(1).is_integer());
    assert!(!Key::from("1").is_integer());
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_decode_rejects_other_widths() {
    for len in [0usize, 1, 3, 5, 7, 9, 16] {
        let bytes = vec![0u8; len];
        assert!(
            matches!(decode_int(&bytes), Err(KvError::UnsupportedKeyType(_))),
            "width {} should be rejected",
            len
        );
    }
}

#[test]
fn test_decode_u32_extremes() {
    assert_eq!(decode_int(&Key::U32(u32::MAX).encode()).unwrap(), u32::MAX as i64);
    assert_eq!(decode_int(&Key::U32(0).encode()).unwrap(), 0);
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn test_value_round_trip() {
    let value = (42u64, "label".to_string(), vec![1.0f32, 2.0]);
    let bytes = encode_value(&value).unwrap();
    let decoded: (u64, String, Vec<f32>) = decode_value(&bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_value_decode_truncated() {
    let bytes = encode_value(&(1u64, 2u64)).unwrap();
    let result: rangekv::Result<(u64, u64)> = decode_value(&bytes[..4]);
    assert!(matches!(result, Err(KvError::Serialization(_))));
}
