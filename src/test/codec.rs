//! Round-trip and reference-vector tests for the Base-16/Base-64 codecs.

use crate::codec::{base16, base64};

#[test]
fn base16_round_trips() {
    let data: Vec<u8> = (0..=255u8).collect();
    let encoded = base16::encode(&data);
    assert_eq!(base16::decode(&encoded).unwrap(), data);
}

#[test]
fn base16_decode_tolerates_whitespace() {
    assert_eq!(base16::decode("48 65\n6c 6c\t6f").unwrap(), b"Hello");
}

#[test]
fn base16_decode_rejects_odd_length() {
    assert!(base16::decode("abc").is_err());
}

#[test]
fn base16_decode_rejects_non_hex() {
    assert!(base16::decode("zz").is_err());
}

#[test]
fn base64_round_trips() {
    let data: Vec<u8> = (0..=255u8).collect();
    let encoded = base64::encode(&data);
    assert_eq!(base64::decode(&encoded).unwrap(), data);
}

#[test]
fn base64_known_vector() {
    assert_eq!(base64::encode(b"Hello"), "SGVsbG8=");
    assert_eq!(base64::decode("SGVsbG8=").unwrap(), b"Hello");
}

#[test]
fn base64_sanitize_strips_comments_and_whitespace() {
    let sanitized = base64::sanitize("SGVs\n# comment line\nbG8=");
    assert_eq!(sanitized, "SGVsbG8=");
    assert_eq!(base64::decode(&sanitized).unwrap(), b"Hello");
}

#[test]
fn base64_decode_rejects_bad_length() {
    assert!(base64::decode("abc").is_err());
}
