use super::state::State;

impl State {
    /// Drain the state into an `n`-byte digest (C4).
    ///
    /// First, the loop counters 255 down to 0 are run through
    /// [`encode_byte`](State::encode_byte) and discarded — this mixes every
    /// index into the state before any output is produced. Then `n` zero
    /// bytes are encoded in turn to produce the digest. Because the digest
    /// is just the continuation of the same keystream, it is prefix-stable:
    /// the first `n` bytes of an `n'`-byte digest (`n' >= n`) of an
    /// identically-constructed state equal the `n`-byte digest.
    pub fn hash_final(&mut self, n: usize) -> Vec<u8> {
        for i in (0..=255u8).rev() {
            self.encode_byte(i);
        }
        (0..n).map(|_| self.encode_byte(0)).collect()
    }
}
