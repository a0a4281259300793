//! Properties and reference vectors for the ZIGMA core: registers after
//! keying, encode/decode round-trips, and hash-finalization behavior.

use crate::zigma::State;

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn unkeyed_digest_matches_reference_vector() {
    let digest = State::new_hash().hash_final(32);
    assert_eq!(hex(&digest), "c1e0df6ce706a32fb7b25b7ac55f436ad29c9fe54b096f54a2a128bb08c9651f");
}

#[test]
fn digest_is_prefix_stable() {
    let short = State::new_hash().hash_final(32);
    let long = State::new_hash().hash_final(36);
    assert_eq!(short, long[..32]);
}

#[test]
fn keyed_registers_match_reference_vector() {
    let state = State::new_keyed(b"A").unwrap();
    assert_eq!(state.registers(), (20, 22, 76, 226, 189));
}

#[test]
fn keyed_encode_matches_reference_vector() {
    let mut state = State::new_keyed(b"secret").unwrap();
    let mut data = b"Hello, ZIGMA!".to_vec();
    state.encode_span(&mut data);
    assert_eq!(hex(&data), "81b4d2a28c50ea1089cdc68d90");
}

#[test]
fn decode_inverts_encode() {
    let message = b"Hello, ZIGMA!".to_vec();

    let mut enc_state = State::new_keyed(b"secret").unwrap();
    let mut ciphertext = message.clone();
    enc_state.encode_span(&mut ciphertext);

    let mut dec_state = State::new_keyed(b"secret").unwrap();
    let mut plaintext = ciphertext;
    dec_state.decode_span(&mut plaintext);

    assert_eq!(plaintext, message);
}

#[test]
fn large_key_round_trips_message() {
    let key: Vec<u8> = (0..=255u8).collect();
    let message: Vec<u8> = (0..64 * 1024u32).map(|i| (i % 251) as u8).collect();

    let mut enc_state = State::new_keyed(&key).unwrap();
    let mut ciphertext = message.clone();
    enc_state.encode_span(&mut ciphertext);

    let mut dec_state = State::new_keyed(&key).unwrap();
    let mut plaintext = ciphertext;
    dec_state.decode_span(&mut plaintext);

    assert_eq!(plaintext, message);
}

#[test]
#[ignore = "exercises the full 1 MiB bound; slow, run explicitly"]
fn large_key_round_trips_one_mebibyte_message() {
    let key: Vec<u8> = (0..=255u8).collect();
    let message: Vec<u8> = (0..1024 * 1024u32).map(|i| (i % 251) as u8).collect();

    let mut enc_state = State::new_keyed(&key).unwrap();
    let mut ciphertext = message.clone();
    enc_state.encode_span(&mut ciphertext);

    let mut dec_state = State::new_keyed(&key).unwrap();
    let mut plaintext = ciphertext;
    dec_state.decode_span(&mut plaintext);

    assert_eq!(plaintext, message);
}

#[test]
fn empty_key_is_rejected() {
    assert!(State::new_keyed(b"").is_err());
}

#[test]
fn nearby_keys_diverge_almost_everywhere() {
    let message = vec![0u8; 1024];

    let mut a = State::new_keyed(b"password").unwrap();
    let mut ca = message.clone();
    a.encode_span(&mut ca);

    let mut b = State::new_keyed(b"passwore").unwrap();
    let mut cb = message;
    b.encode_span(&mut cb);

    let differing = ca.iter().zip(cb.iter()).filter(|(x, y)| x != y).count();
    assert!(differing as f64 / ca.len() as f64 > 0.99);
}
