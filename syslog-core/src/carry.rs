//! Carry buffer for tokens interrupted by a chunk boundary.
//!
//! When a chunk ends in the middle of a token, the bytes consumed so far are
//! appended here and the next `exec` call keeps extending them. SD values
//! that contain escapes are also decoded into this buffer, since the decoded
//! bytes no longer match the input.
//!
//! The buffer is empty whenever no token is in flight. Clearing keeps the
//! allocation, so steady-state streaming does not reallocate.

/// Owned bytes of the in-flight token.
#[derive(Debug, Default)]
pub struct CarryBuffer {
    bytes: Vec<u8>,
}

impl CarryBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create with room for `capacity` bytes up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { bytes: Vec::with_capacity(capacity) }
    }

    /// Append a run of token bytes.
    #[inline]
    pub fn extend(&mut self, run: &[u8]) {
        self.bytes.extend_from_slice(run);
    }

    /// Append a single (decoded) byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// The token bytes accumulated so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Allocated capacity, retained across [`clear`](Self::clear).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Drop the token bytes, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}
