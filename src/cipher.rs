use crate::{Ciphertext, Key, Plaintext};

mod stream;

pub use stream::Zigma;

/// A cipher is defined over plaintext/ciphertext of any length.
pub trait Cipher {
    type Err;
    type Key;

    /// Encrypt the plaintext. This operation can fail, for example, if the
    /// key doesn't meet the cipher's requirements.
    fn encrypt(
        data: Plaintext<&[u8]>,
        key: Key<Self::Key>,
    ) -> Result<Ciphertext<Vec<u8>>, Self::Err>;

    /// Decrypt the ciphertext. This operation can fail, for example, if the
    /// ciphertext was not created by this cipher.
    fn decrypt(
        data: Ciphertext<&[u8]>,
        key: Key<Self::Key>,
    ) -> Result<Plaintext<Vec<u8>>, Self::Err>;
}
