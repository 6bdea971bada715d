//! Counter-mode block generation and the leftover-byte cache.

use zeroize::Zeroize;

use crate::hash::{HASH256_OUTPUT, Hash256};

/// Length of the hashed block: `state || counter`.
const COUNTER_BLOCK_LEN: usize = HASH256_OUTPUT + 8;

/// Derives output block number `counter` from the finalized `state`.
///
/// The block input is the 32-byte state followed by the counter as a
/// big-endian `u64`.
pub(crate) fn counter_block<H: Hash256>(
    state: &[u8; HASH256_OUTPUT],
    counter: u64,
) -> [u8; HASH256_OUTPUT] {
    let mut block = [0u8; COUNTER_BLOCK_LEN];

    block[..HASH256_OUTPUT].copy_from_slice(state);
    block[HASH256_OUTPUT..].copy_from_slice(&counter.to_be_bytes());

    let out = H::hash256(&block);
    block.zeroize();

    out
}

/// Most recently generated output block and its read cursor.
///
/// Invariant: `position <= length`, and `length` is either 0 (empty) or
/// a full block.
pub(crate) struct OutputCache {
    block: [u8; HASH256_OUTPUT],
    position: usize,
    length: usize,
}

impl OutputCache {
    pub(crate) const fn new() -> Self {
        Self {
            block: [0u8; HASH256_OUTPUT],
            position: 0,
            length: 0,
        }
    }

    /// Unread bytes left in the cached block.
    #[inline]
    pub(crate) fn unread(&self) -> usize {
        self.length - self.position
    }

    /// Replaces the cached block with a freshly generated one.
    pub(crate) fn refill(&mut self, block: [u8; HASH256_OUTPUT]) {
        self.block = block;
        self.position = 0;
        self.length = HASH256_OUTPUT;
    }

    /// Copies as many unread bytes as fit into `out`, advancing the cursor.
    ///
    /// Returns the number of bytes copied.
    pub(crate) fn drain_into(&mut self, out: &mut [u8]) -> usize {
        let n = self.unread().min(out.len());

        out[..n].copy_from_slice(&self.block[self.position..self.position + n]);
        self.position += n;

        n
    }

    /// Wipes the block and empties the cache.
    pub(crate) fn reset(&mut self) {
        self.block.zeroize();
        self.position = 0;
        self.length = 0;
    }
}

impl Drop for OutputCache {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
