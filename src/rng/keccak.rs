//! Counter-mode PRNG over a 256-bit hash
//!
//! This module implements the deterministic generator used for seeding and
//! nonce derivation. It is built from a single [`Hash256`] primitive:
//!
//! - **inject** appends input to a fixed-capacity buffer
//! - **flip** hashes the whole buffer once into a 32-byte state
//! - **extract** produces block `i` as `Hash256(state || i)`, with `i` a
//!   64-bit big-endian counter starting at zero
//!
//! Unread bytes of the last block are kept in an output cache and served
//! first by the next extract call. The stream is therefore a pure function
//! of the absorbed input and the total number of bytes requested, however
//! the requests are split.

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};
use rand::{TryCryptoRng, TryRngCore};
use zeroize::Zeroize;

use super::backend::{self, Prng};
use super::counter::{OutputCache, counter_block};
use super::error::{Operation, Phase, PrngError};
use super::params::{MAX_BUFFER_SIZE, PrngParams};
use crate::hash::{HASH256_OUTPUT, Hash256, Sha3_256};
use crate::primitives::BoundedBuffer;

/// Counter-mode PRNG context.
///
/// `H` is the hash primitive and `CAP` the maximum number of bytes that can
/// be absorbed before [`flip`](Prng::flip). The context owns all of its
/// state; sharing it between threads requires external synchronization.
pub struct KeccakPrng<H: Hash256 = Sha3_256, const CAP: usize = MAX_BUFFER_SIZE> {
    /// Input absorbed so far. Wiped once the state is derived.
    buffer: BoundedBuffer<CAP>,

    /// Digest of the absorbed input, zero until finalized
    state: [u8; HASH256_OUTPUT],

    /// Index of the next block to generate
    counter: u64,

    finalized: bool,

    cache: OutputCache,

    params: PrngParams,

    _hash: PhantomData<fn() -> H>,
}

impl<H: Hash256, const CAP: usize> KeccakPrng<H, CAP> {
    /// Creates an initialized context using the current revision's behavior.
    pub fn new() -> Self {
        Self::with_params(PrngParams::default())
    }

    /// Creates an initialized context with explicit compatibility parameters.
    pub fn with_params(params: PrngParams) -> Self {
        Self {
            buffer: BoundedBuffer::new(),
            state: [0u8; HASH256_OUTPUT],
            counter: 0,
            finalized: false,
            cache: OutputCache::new(),
            params,
            _hash: PhantomData,
        }
    }

    pub fn params(&self) -> PrngParams {
        self.params
    }

    /// Number of input bytes absorbed since the last `init`.
    ///
    /// Drops back to zero once the context is finalized, as the buffer is
    /// wiped at flip.
    pub fn absorbed(&self) -> usize {
        self.buffer.len()
    }

    /// Index of the next output block.
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl<H: Hash256, const CAP: usize> Prng for KeccakPrng<H, CAP> {
    const NAME: &'static str = "keccak-counter";

    fn new() -> Self {
        Self::with_params(PrngParams::default())
    }

    fn init(&mut self) {
        self.buffer.clear();
        self.state.zeroize();
        self.counter = 0;
        self.finalized = false;
        self.cache.reset();

        debug!("{}: initialized, capacity {} bytes", Self::NAME, CAP);
    }

    fn inject(&mut self, data: &[u8]) -> Result<(), PrngError> {
        if self.finalized {
            return Err(PrngError::invalid_state(Operation::Inject, Phase::Finalized));
        }

        self.buffer.try_extend(data)?;

        trace!(
            "{}: absorbed {} bytes ({} total)",
            Self::NAME,
            data.len(),
            self.buffer.len()
        );

        Ok(())
    }

    fn flip(&mut self) -> Result<(), PrngError> {
        if self.finalized {
            return Err(PrngError::invalid_state(Operation::Flip, Phase::Finalized));
        }

        if let Some(separator) = self.params.domain_separator {
            self.buffer.try_push(separator)?;
        }

        let absorbed = self.buffer.len();

        self.state = H::hash256(self.buffer.as_slice());
        self.buffer.clear();
        self.finalized = true;
        self.counter = 0;
        self.cache.reset();

        debug!("{}: finalized over {} bytes", Self::NAME, absorbed);

        Ok(())
    }

    fn extract_into(&mut self, out: &mut [u8]) -> Result<(), PrngError> {
        if !self.finalized {
            return Err(PrngError::invalid_state(Operation::Extract, Phase::Accumulating));
        }

        let mut offset = if self.params.carry_leftover {
            self.cache.drain_into(out)
        } else {
            self.cache.reset();
            0
        };

        while offset < out.len() {
            let block = counter_block::<H>(&self.state, self.counter);

            self.cache.refill(block);
            offset += self.cache.drain_into(&mut out[offset..]);

            self.counter = self.counter.wrapping_add(1);
        }

        trace!(
            "{}: extracted {} bytes, next block {}, {} cached",
            Self::NAME,
            out.len(),
            self.counter,
            self.cache.unread()
        );

        Ok(())
    }

    fn phase(&self) -> Phase {
        if self.finalized {
            Phase::Finalized
        } else {
            Phase::Accumulating
        }
    }
}

impl<H: Hash256, const CAP: usize> TryRngCore for KeccakPrng<H, CAP> {
    type Error = PrngError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        backend::next_u32(self)
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        backend::next_u64(self)
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.extract_into(dst)
    }
}

impl<H: Hash256, const CAP: usize> TryCryptoRng for KeccakPrng<H, CAP> {}

impl<H: Hash256, const CAP: usize> Default for KeccakPrng<H, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hash256, const CAP: usize> fmt::Debug for KeccakPrng<H, CAP> {
    /// Secret material (buffer contents, state, cached block) is redacted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakPrng")
            .field("phase", &self.phase())
            .field("absorbed", &self.buffer.len())
            .field("capacity", &CAP)
            .field("counter", &self.counter)
            .field("cached", &self.cache.unread())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<H: Hash256, const CAP: usize> Drop for KeccakPrng<H, CAP> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
