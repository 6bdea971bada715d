//! SHA3-256 (FIPS 202) as a [`Hash256`] implementation.
//!
//! The Keccak-f\[1600\] permutation and sponge framing come from the `sha3`
//! crate; this module only adapts it to the fixed-output contract used by
//! the generators.

use sha3::Digest;

use super::{HASH256_OUTPUT, Hash256};

/// SHA3-256 marker type, the default hash of `KeccakPrng`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha3_256;

impl Hash256 for Sha3_256 {
    #[inline]
    fn hash256(message: &[u8]) -> [u8; HASH256_OUTPUT] {
        sha3_256(message)
    }
}

/// Computes the SHA3-256 digest of `input`.
///
/// # Notes
/// - The `0x06` SHA3 domain suffix and `pad10*1` padding are applied by the
///   sponge, never by the caller.
/// - No heap allocations are performed.
pub fn sha3_256(input: &[u8]) -> [u8; HASH256_OUTPUT] {
    let digest = sha3::Sha3_256::digest(input);

    let mut out = [0u8; HASH256_OUTPUT];
    out.copy_from_slice(&digest);

    out
}
