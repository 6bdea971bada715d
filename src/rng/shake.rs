//! SHAKE256 sponge PRNG
//!
//! Alternate backend with the same interface as `KeccakPrng`. Input is
//! absorbed directly into a SHAKE256 sponge, `flip` applies the XOF padding
//! and switches the sponge to squeezing, and `extract` reads the next bytes
//! of the XOF stream.
//!
//! Since nothing is buffered, injection has no capacity limit. The output
//! is the standard SHAKE256 stream of the concatenated input.

use std::fmt;

use log::{debug, trace};
use rand::{TryCryptoRng, TryRngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake256, Shake256Reader};

use super::backend::{self, Prng};
use super::error::{Operation, Phase, PrngError};

enum Sponge {
    Absorbing(Shake256),
    Squeezing(Shake256Reader),
}

/// SHAKE256-based PRNG context.
pub struct Shake256Prng {
    sponge: Sponge,
    absorbed: u64,
}

impl Shake256Prng {
    pub fn new() -> Self {
        Self::absorbing()
    }

    fn absorbing() -> Self {
        Self {
            sponge: Sponge::Absorbing(Shake256::default()),
            absorbed: 0,
        }
    }

    /// Number of input bytes absorbed since the last `init`.
    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }
}

impl Prng for Shake256Prng {
    const NAME: &'static str = "shake256";

    fn new() -> Self {
        Self::absorbing()
    }

    fn init(&mut self) {
        self.sponge = Sponge::Absorbing(Shake256::default());
        self.absorbed = 0;

        debug!("{}: initialized", Self::NAME);
    }

    fn inject(&mut self, data: &[u8]) -> Result<(), PrngError> {
        let Sponge::Absorbing(hasher) = &mut self.sponge else {
            return Err(PrngError::invalid_state(Operation::Inject, Phase::Finalized));
        };

        hasher.update(data);
        self.absorbed += data.len() as u64;

        trace!("{}: absorbed {} bytes", Self::NAME, data.len());

        Ok(())
    }

    fn flip(&mut self) -> Result<(), PrngError> {
        let Sponge::Absorbing(hasher) = &self.sponge else {
            return Err(PrngError::invalid_state(Operation::Flip, Phase::Finalized));
        };

        let reader = hasher.clone().finalize_xof();
        self.sponge = Sponge::Squeezing(reader);

        debug!("{}: finalized over {} bytes", Self::NAME, self.absorbed);

        Ok(())
    }

    fn extract_into(&mut self, out: &mut [u8]) -> Result<(), PrngError> {
        let Sponge::Squeezing(reader) = &mut self.sponge else {
            return Err(PrngError::invalid_state(Operation::Extract, Phase::Accumulating));
        };

        reader.read(out);

        trace!("{}: extracted {} bytes", Self::NAME, out.len());

        Ok(())
    }

    fn phase(&self) -> Phase {
        match self.sponge {
            Sponge::Absorbing(_) => Phase::Accumulating,
            Sponge::Squeezing(_) => Phase::Finalized,
        }
    }
}

impl TryRngCore for Shake256Prng {
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

impl TryCryptoRng for Shake256Prng {}

impl Default for Shake256Prng {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Shake256Prng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shake256Prng")
            .field("phase", &self.phase())
            .field("absorbed", &self.absorbed)
            .finish_non_exhaustive()
    }
}
