use alloc::vec::Vec;

/// Bytes received but not yet decoded.
///
/// New chunks are appended in arrival order. The consumed prefix is dropped
/// lazily, on a later [`push`](Self::push) once it makes up more than half of
/// the buffer, so a pass can keep borrowing from the buffer while it advances
/// the cursor.
#[derive(Debug, Default)]
pub(crate) struct PendingInput {
    bytes: Vec<u8>,
    pos: usize,
    /// Absolute stream offset of `bytes[0]`.
    base: u64,
}

impl PendingInput {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, chunk: &[u8]) {
        // compact once the consumed prefix is more than half the buffer
        if self.pos == self.bytes.len() {
            self.bytes.clear();
            self.base += self.pos as u64;
            self.pos = 0;
        } else if self.pos > self.bytes.len() / 2 {
            self.bytes.drain(..self.pos);
            self.base += self.pos as u64;
            self.pos = 0;
        }
        self.bytes.extend_from_slice(chunk);
    }

    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Absolute stream position of the cursor.
    #[inline]
    pub(crate) fn offset(&self) -> u64 {
        self.base + self.pos as u64
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.available());
        self.pos += n;
    }

    /// Consumes up to `n` bytes and returns them.
    #[inline]
    pub(crate) fn take(&mut self, n: usize) -> &[u8] {
        let n = n.min(self.available());
        let start = self.pos;
        self.pos += n;
        &self.bytes[start..self.pos]
    }

    /// Consumes exactly `N` bytes. The caller checks availability first.
    #[inline]
    pub(crate) fn take_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N));
        out
    }
}
