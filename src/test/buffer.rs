//! Tests for the zeroizing byte buffer.

use crate::buffer::ByteBuffer;

#[test]
fn with_length_zero_fills() {
    let buf = ByteBuffer::with_length(16);
    assert_eq!(buf.as_slice(), &[0u8; 16]);
}

#[test]
fn resize_preserves_prefix_and_zero_fills_growth() {
    let mut buf = ByteBuffer::from_slice(b"abc");
    buf.resize(5);
    assert_eq!(buf.as_slice(), b"abc\0\0");
    buf.resize(2);
    assert_eq!(buf.as_slice(), b"ab");
}

#[test]
fn extend_appends() {
    let mut buf = ByteBuffer::from_slice(b"foo");
    buf.extend(b"bar");
    assert_eq!(buf.as_slice(), b"foobar");
}

#[test]
fn into_vec_recovers_contents() {
    let buf = ByteBuffer::from_slice(b"hello");
    assert_eq!(buf.into_vec(), b"hello".to_vec());
}
