//! Tests for base16 encoding.

use rand::Rng;
use rfc4648_base16::{encode, encode_append, encoded_len, try_encode_into, Case};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected: String = blob.iter().map(|b| format!("{:02x}", b)).collect();
        assert_eq!(encode(&blob, Case::Lower), expected);
        assert_eq!(encode(&blob, Case::Upper), expected.to_uppercase());
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b"", Case::Lower), "");
    assert_eq!(encode(b"", Case::Upper), "");
}

#[test]
fn literal_vector() {
    assert_eq!(encode(&[0x0f, 0xf0], Case::from_upper(false)), "0ff0");
    assert_eq!(encode(&[0x0f, 0xf0], Case::from_upper(true)), "0FF0");
}

#[test]
fn default_case_is_lower() {
    assert_eq!(encode(&[0xab], Case::default()), "ab");
}

#[test]
fn try_encode_capacity() {
    let blob = [1u8, 2, 3];
    let mut exact = [0u8; 6];
    assert_eq!(try_encode_into(&blob, &mut exact, Case::Lower), Some(6));
    assert_eq!(&exact, b"010203");

    let mut short = [0u8; 5];
    assert_eq!(try_encode_into(&blob, &mut short, Case::Lower), None);
    assert_eq!(short, [0u8; 5]);
}

#[test]
fn try_encode_into_utf16() {
    let mut dest = vec![0u16; encoded_len(2)];
    assert_eq!(try_encode_into(&[0xca, 0xfe], &mut dest, Case::Upper), Some(4));
    assert_eq!(String::from_utf16(&dest).unwrap(), "CAFE");
}

#[test]
fn reused_buffer() {
    let mut dest = [0u8; 64];
    let mut out = String::new();
    for _ in 0..50 {
        let blob = generate_blob();
        out.clear();
        encode_append(&blob, &mut out, Case::Lower);
        assert_eq!(out, encode(&blob, Case::Lower));

        let blob = &blob[..blob.len().min(32)];
        let written = try_encode_into(blob, &mut dest, Case::Lower).unwrap();
        assert_eq!(&dest[..written], encode(blob, Case::Lower).as_bytes());
    }
}
