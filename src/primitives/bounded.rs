//! Fixed-capacity byte buffer
//!
//! `BoundedBuffer<N>` stores up to `N` bytes inline. Appends are checked
//! against the remaining capacity and are atomic: a chunk is either copied
//! whole or the buffer is left untouched.
//!
//! The contents are wiped when cleared and when the buffer is dropped, as
//! the buffer typically holds seed material.

use zeroize::Zeroize;

/// Reported when an append would overflow a [`BoundedBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Bytes the caller tried to append.
    pub requested: usize,
    /// Free bytes left in the buffer at the time of the call.
    pub available: usize,
    /// Total capacity of the buffer.
    pub capacity: usize,
}

/// Inline byte buffer holding at most `N` bytes.
pub struct BoundedBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedBuffer<N> {
    /// Total number of bytes the buffer can hold.
    pub const CAPACITY: usize = N;

    /// Creates an empty, zero-filled buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    /// Number of valid bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Free bytes left before the buffer is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        N - self.len
    }

    /// The valid prefix of the buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Appends `data` in full, or fails without modifying the buffer.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if `len + data.len()` exceeds `N`.
    pub fn try_extend(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        if data.len() > self.remaining() {
            return Err(self.overflow(data.len()));
        }

        self.bytes[self.len..self.len + data.len()].copy_from_slice(data);
        self.len += data.len();

        Ok(())
    }

    /// Appends a single byte, or fails without modifying the buffer.
    pub fn try_push(&mut self, byte: u8) -> Result<(), CapacityError> {
        self.try_extend(&[byte])
    }

    /// Wipes the contents and resets the length to zero.
    pub fn clear(&mut self) {
        self.bytes.zeroize();
        self.len = 0;
    }

    fn overflow(&self, requested: usize) -> CapacityError {
        CapacityError {
            requested,
            available: self.remaining(),
            capacity: N,
        }
    }
}

impl<const N: usize> Default for BoundedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Drop for BoundedBuffer<N> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
