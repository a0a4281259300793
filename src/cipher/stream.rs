use crate::{zigma::State, Cipher, Ciphertext, EmptyKey, Key, Plaintext};

/// The ZIGMA stream cipher, adapted to the [`Cipher`] interface.
///
/// There's no block mode to choose: every call starts a fresh
/// [`State`](crate::zigma::State) under the given key and encodes the whole
/// input as one continuous span.
#[derive(Debug)]
pub struct Zigma;

impl Cipher for Zigma {
    type Err = EmptyKey;
    type Key = Vec<u8>;

    fn encrypt(
        data: Plaintext<&[u8]>,
        key: Key<Self::Key>,
    ) -> Result<Ciphertext<Vec<u8>>, Self::Err> {
        let mut state = State::new_keyed(&key.0)?;
        let mut out = data.0.to_vec();
        state.encode_span(&mut out);
        Ok(Ciphertext(out))
    }

    fn decrypt(
        data: Ciphertext<&[u8]>,
        key: Key<Self::Key>,
    ) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        let mut state = State::new_keyed(&key.0)?;
        let mut out = data.0.to_vec();
        state.decode_span(&mut out);
        Ok(Plaintext(out))
    }
}
