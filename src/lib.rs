#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

pub mod buffer;
pub mod cipher;
pub mod cli;
pub mod codec;
pub mod error;
mod key;
mod text;
pub mod zigma;

pub use {
    buffer::ByteBuffer,
    cipher::{Cipher, Zigma},
    codec::Base,
    error::{CliError, DecodeFormatError, EmptyKey},
    key::Key,
    text::{Ciphertext, Plaintext},
    zigma::State,
};
