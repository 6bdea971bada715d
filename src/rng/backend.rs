//! The generator contract shared by every backend.

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::error::{PrngError, Phase};
use super::params::SYSTEM_SEED_LEN;

/// An absorb-then-squeeze pseudorandom generator.
///
/// A context starts in [`Phase::Accumulating`], absorbs input through
/// [`inject`](Prng::inject), crosses the one-way [`flip`](Prng::flip), and
/// then produces output through [`extract_into`](Prng::extract_into)
/// indefinitely. Every backend reports out-of-sequence calls as
/// [`PrngError::InvalidState`] and leaves the context unchanged on error.
pub trait Prng: Sized {
    /// Short backend name used in log records.
    const NAME: &'static str;

    /// Creates a freshly initialized context.
    fn new() -> Self;

    /// Re-initializes the context, discarding all input and output state.
    fn init(&mut self);

    /// Absorbs `data`. Repeated calls are equivalent to one call with the
    /// concatenated input.
    fn inject(&mut self, data: &[u8]) -> Result<(), PrngError>;

    /// Finalizes the absorbed input. Allowed exactly once per `init`.
    fn flip(&mut self) -> Result<(), PrngError>;

    /// Fills `out` with the next bytes of the output stream.
    fn extract_into(&mut self, out: &mut [u8]) -> Result<(), PrngError>;

    fn phase(&self) -> Phase;

    fn is_finalized(&self) -> bool {
        self.phase() == Phase::Finalized
    }

    /// Returns the next `len` bytes of the output stream.
    fn extract(&mut self, len: usize) -> Result<Vec<u8>, PrngError> {
        let mut out = vec![0u8; len];
        self.extract_into(&mut out)?;
        Ok(out)
    }

    /// Creates a context that has absorbed `seed` and is ready for output.
    fn from_seed(seed: &[u8]) -> Result<Self, PrngError> {
        let mut prng = Self::new();
        prng.inject(seed)?;
        prng.flip()?;
        Ok(prng)
    }

    /// Creates a context seeded from operating system entropy.
    ///
    /// The temporary seed buffer is wiped before returning.
    fn from_system() -> Result<Self, PrngError> {
        let mut seed = [0u8; SYSTEM_SEED_LEN];

        let seeded = OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| PrngError::Entropy(e.to_string()))
            .and_then(|_| Self::from_seed(&seed));

        seed.zeroize();
        seeded
    }
}

// Word draws used by the `TryRngCore` implementations. Bytes are decoded
// little-endian, as `rand` expects.

pub(crate) fn next_u32<P: Prng>(prng: &mut P) -> Result<u32, PrngError> {
    let mut bytes = [0u8; 4];
    prng.extract_into(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

pub(crate) fn next_u64<P: Prng>(prng: &mut P) -> Result<u64, PrngError> {
    let mut bytes = [0u8; 8];
    prng.extract_into(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}
