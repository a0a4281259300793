//! The ZIGMA stream cipher core.
//!
//! ZIGMA keeps a single byte of "confusion" source: a permutation of the 256
//! byte values, mutated one swap at a time as bytes are processed. Unlike a
//! block cipher, there's no separate notion of [block mode](crate::Cipher) —
//! the cipher is defined directly over data of any length, one byte at a
//! time, with every byte's transform depending on all the bytes that came
//! before it (see [`State::encode_byte`]).
//!
//! The same machinery serves three purposes:
//!
//!   * **keyed encryption** — [`State::new_keyed`] permutes a fresh state
//!     under a key, then [`State::encode_byte`]/[`State::encode_span`] turn
//!     plaintext into ciphertext;
//!   * **keyed decryption** — an identically-keyed state run through
//!     [`State::decode_byte`]/[`State::decode_span`] is the left inverse of
//!     encoding;
//!   * **unkeyed hashing** — [`State::new_hash`] gives a deterministic,
//!     key-independent starting state; encoding the message into it and then
//!     calling [`State::hash_final`] drains it into a digest of any length.

mod digest;
mod schedule;
mod state;
mod stream;

pub use state::State;
