//! Hash primitives consumed by the generators.
//!
//! The generators only rely on a fixed-output 256-bit function. It is
//! modelled as the [`Hash256`] trait so the counter-mode engine stays correct
//! for any conforming implementation. SHA3-256 is the default.

pub mod sha3_256;

/// Output size of a [`Hash256`] function, in bytes.
pub const HASH256_OUTPUT: usize = 32;

/// A deterministic, collision-resistant 256-bit hash function.
///
/// Implementations hash the whole message in one call and apply their own
/// padding and framing. Callers never append padding themselves.
pub trait Hash256 {
    /// Hashes `message` into a 32-byte digest.
    fn hash256(message: &[u8]) -> [u8; HASH256_OUTPUT];
}

/// Re-export of the SHA3-256 hasher and its convenience function.
pub use sha3_256::{Sha3_256, sha3_256};
