//! Text encodings for binary data passed on the command line or read from a
//! file: hex ([`base16`]) and standard Base-64 ([`base64`]).

pub mod base16;
pub mod base64;

/// The text encoding a key, message, or digest is represented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Base16,
    Base64,
}

impl Base {
    /// Encode `data` for output. `Binary` passes bytes through unchanged;
    /// the other variants produce ASCII text.
    pub fn encode(self, data: &[u8]) -> Vec<u8> {
        match self {
            Base::Binary => data.to_vec(),
            Base::Base16 => base16::encode(data).into_bytes(),
            Base::Base64 => base64::encode(data).into_bytes(),
        }
    }

    /// Decode raw input bytes read from a file or stdin. `Binary` passes
    /// bytes through unchanged; the other variants are interpreted as
    /// (lossily-converted) ASCII text, so any byte outside the expected
    /// alphabet surfaces as a [`crate::error::DecodeFormatError`] rather than
    /// silent corruption.
    pub fn decode(self, raw: &[u8]) -> Result<Vec<u8>, crate::error::DecodeFormatError> {
        match self {
            Base::Binary => Ok(raw.to_vec()),
            Base::Base16 => base16::decode(&String::from_utf8_lossy(raw)),
            Base::Base64 => {
                let text = base64::sanitize(&String::from_utf8_lossy(raw));
                base64::decode(&text)
            }
        }
    }
}
