use zeroize::Zeroize;

/// The ZIGMA cipher state.
///
/// `P` is a permutation of the 256 byte values; this invariant holds at
/// construction and is preserved by every transform in [`super::stream`],
/// which only ever swaps pairs of entries. `a`, `b`, `c` are indices into
/// `P`; `x` and `y` are the feedback registers threaded through each
/// byte transform.
///
/// A `State` is created once (via [`State::new_hash`] or
/// [`State::new_keyed`]) and then driven monotonically through
/// [`encode_byte`](State::encode_byte) / [`decode_byte`](State::decode_byte)
/// calls — there is no rewind. Two states keyed from the same key are equal
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub(super) p: [u8; 256],
    pub(super) a: u8,
    pub(super) b: u8,
    pub(super) c: u8,
    pub(super) x: u8,
    pub(super) y: u8,
}

impl State {
    /// The deterministic, key-independent state used as the starting point
    /// for digest computation (and the substrate [`State::new_keyed`]
    /// permutes under a key).
    pub fn new_hash() -> Self {
        let mut p = [0u8; 256];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = 255 - i as u8;
        }
        State { p, a: 1, b: 3, c: 5, x: 7, y: 11 }
    }

    /// The `(a, b, c, x, y)` registers, in that order.
    pub fn registers(&self) -> (u8, u8, u8, u8, u8) {
        (self.a, self.b, self.c, self.x, self.y)
    }
}

/// Zero the permutation vector and all registers on drop, using a write the
/// compiler is not permitted to elide. This is the state-side half of the
/// secrets hygiene obligation spec.md assigns to the byte buffer destructor.
impl Drop for State {
    fn drop(&mut self) {
        self.p.zeroize();
        self.a.zeroize();
        self.b.zeroize();
        self.c.zeroize();
        self.x.zeroize();
        self.y.zeroize();
    }
}
