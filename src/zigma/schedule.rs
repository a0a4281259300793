use {crate::EmptyKey, docext::docext, super::state::State};

/// Key-schedule scratch. `rsum` and `keypos` are local to the randomizer and
/// never survive initialization — they don't appear on [`State`] itself.
struct Randomizer<'k> {
    key: &'k [u8],
    rsum: u8,
    keypos: usize,
}

impl<'k> Randomizer<'k> {
    fn new(key: &'k [u8]) -> Self {
        Randomizer { key, rsum: 0, keypos: 0 }
    }

    /// Sample a byte in $[0, \mathrm{limit}]$, biased toward uniform via
    /// mask-and-reject: candidates are drawn as `rsum & mask` where `mask`
    /// is the smallest $2^n - 1 \geq \mathrm{limit}$, and rejected while
    /// $u > \mathrm{limit}$. After 11 rejections this falls back to
    /// $u \bmod \mathrm{limit}$, so every call terminates regardless of key
    /// content.
    #[docext]
    fn next(&mut self, p: &[u8; 256], limit: u8) -> u8 {
        let mask = smallest_ones_mask(limit);
        let mut retries: u32 = 0;

        loop {
            self.rsum = p[self.rsum as usize].wrapping_add(self.key[self.keypos]);
            self.keypos += 1;
            if self.keypos == self.key.len() {
                self.keypos = 0;
                self.rsum = self.rsum.wrapping_add(self.key.len() as u8);
            }

            let mut u = mask & self.rsum;
            retries += 1;
            if retries > 11 {
                // The original computes `u %= limit` here; at limit == 0 that's
                // a divide by zero (UB in C, a panic in Rust). 0 is the only
                // value `u <= limit` admits at limit == 0, so short-circuit to
                // it instead of reproducing the crash.
                u = if limit == 0 { 0 } else { u % limit };
            }
            if u <= limit {
                return u;
            }
        }
    }

    fn rsum(&self) -> u8 {
        self.rsum
    }
}

/// Smallest `2^n - 1 >= limit`.
fn smallest_ones_mask(limit: u8) -> u8 {
    let mut mask: u16 = 1;
    while mask < limit as u16 {
        mask = (mask << 1) + 1;
    }
    mask as u8
}

impl State {
    /// Keyed initialization (spec.md §4.2). `key` must be non-empty; an
    /// empty key is rejected here rather than silently treated as an
    /// unkeyed state — callers who want unkeyed state use
    /// [`State::new_hash`] instead.
    pub fn new_keyed(key: &[u8]) -> Result<Self, EmptyKey> {
        if key.is_empty() {
            return Err(EmptyKey);
        }

        let mut p = [0u8; 256];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = 255 - i as u8;
        }

        let mut rng = Randomizer::new(key);
        for i in (0..=255usize).rev() {
            let t = rng.next(&p, i as u8) as usize;
            p.swap(i, t);
        }

        let a = p[1];
        let b = p[3];
        let c = p[5];
        let x = p[7];
        let y = p[rng.rsum() as usize];

        Ok(State { p, a, b, c, x, y })
    }
}
