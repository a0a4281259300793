use zeroize::Zeroize;

/// Default minimum capacity for a freshly allocated [`ByteBuffer`] (an
/// implementation hint carried over from the original, not a contract).
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// An owned, growable byte container.
///
/// Mirrors the original `Buffer { data, length, capacity }`: `length <=
/// capacity` always holds, and [`ByteBuffer::resize`] preserves the prefix
/// up to `min(old_length, new_length)`. The backing storage is zeroed
/// before release — the only security-relevant obligation of this
/// component, since key material and plaintext both pass through it.
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// A new, empty buffer with at least [`DEFAULT_CAPACITY`] bytes reserved.
    pub fn new() -> Self {
        ByteBuffer { data: Vec::with_capacity(DEFAULT_CAPACITY) }
    }

    /// A buffer of `length` zeroed bytes, with at least
    /// [`DEFAULT_CAPACITY`] bytes reserved.
    pub fn with_length(length: usize) -> Self {
        let mut buf = Self::new();
        buf.resize(length);
        buf
    }

    /// A buffer initialized from an existing byte slice.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut data = Vec::with_capacity(bytes.len().max(DEFAULT_CAPACITY));
        data.extend_from_slice(bytes);
        ByteBuffer { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Resize to `length`, preserving the prefix up to `min(old, new)` and
    /// zero-filling any newly exposed bytes.
    pub fn resize(&mut self, length: usize) {
        self.data.resize(length, 0);
    }

    /// Append `bytes` to the end of the buffer, growing as needed.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }
}

impl Drop for ByteBuffer {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        ByteBuffer { data }
    }
}
