use super::state::State;

impl State {
    /// Advance the state by one step and return the XOR mask used by both
    /// [`encode_byte`](State::encode_byte) and [`decode_byte`](State::decode_byte).
    /// `tmp` is the prior `P[y]`, which also feeds the `c` index update.
    fn step(&mut self) -> u8 {
        let p = &mut self.p;
        // `b += P[a]` reads P at the pre-increment `a` (a C `index_A++` postfix
        // increment); only `a` itself advances to the incremented value.
        let old_a = self.a;
        self.a = self.a.wrapping_add(1);
        self.b = self.b.wrapping_add(p[old_a as usize]);

        let tmp = p[self.y as usize];
        p[self.y as usize] = p[self.b as usize];
        p[self.b as usize] = p[self.x as usize];
        p[self.x as usize] = p[self.a as usize];
        p[self.a as usize] = tmp;

        self.c = self.c.wrapping_add(p[tmp as usize]);

        let first = p[(p[self.b as usize].wrapping_add(p[self.a as usize])) as usize];
        let inner = p[self.x as usize]
            .wrapping_add(p[self.y as usize])
            .wrapping_add(p[self.c as usize]);
        let second = p[p[inner as usize] as usize];

        first ^ second
    }

    /// Encode a single plaintext byte, returning the ciphertext byte.
    pub fn encode_byte(&mut self, plain: u8) -> u8 {
        let z = self.step();
        let cipher = plain ^ z;
        self.x = plain;
        self.y = cipher;
        cipher
    }

    /// Decode a single ciphertext byte, returning the plaintext byte.
    ///
    /// For a state keyed identically to the one that produced `cipher` via
    /// [`encode_byte`](State::encode_byte), and fed the same byte sequence in
    /// order, `decode_byte` is the left inverse of `encode_byte`: both sides
    /// compute the same `z` at every step because steps 1–4 of [`State::step`]
    /// depend only on the state before the step, which evolves identically
    /// once `x` and `y` are set to the same plaintext/ciphertext pair.
    pub fn decode_byte(&mut self, cipher: u8) -> u8 {
        let z = self.step();
        let plain = cipher ^ z;
        self.x = plain;
        self.y = cipher;
        plain
    }

    /// Apply [`encode_byte`](State::encode_byte) across `data` in place (the
    /// bulk driver, C5).
    pub fn encode_span(&mut self, data: &mut [u8]) {
        for b in data.iter_mut() {
            *b = self.encode_byte(*b);
        }
    }

    /// Apply [`decode_byte`](State::decode_byte) across `data` in place.
    pub fn decode_span(&mut self, data: &mut [u8]) {
        for b in data.iter_mut() {
            *b = self.decode_byte(*b);
        }
    }
}
