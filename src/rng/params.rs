//! Parameter definitions for the counter-mode generator.
//!
//! Two generations of the finalize/extract pair exist. The current one hashes
//! the absorbed input as-is and carries unread output bytes across calls. The
//! earlier one appended a SHAKE-style domain byte before hashing and started
//! every extract call on a fresh block. Outputs of the two are unrelated, so
//! callers that need bit-exact compatibility with the earlier outputs must
//! ask for it explicitly through [`PrngParams::legacy`].

/// Upper bound on the total input absorbed by one context, in bytes.
pub const MAX_BUFFER_SIZE: usize = 4096;

/// Domain-separation byte appended at flip by the earlier revision.
pub const SHAKE_DOMAIN_SEPARATOR: u8 = 0x1F;

/// Size of the OS entropy seed used by `Prng::from_system`.
pub const SYSTEM_SEED_LEN: usize = 48;

/// Compatibility parameters of `KeccakPrng`.
///
/// Parameters are fixed at construction and survive re-initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrngParams {
    /// Byte appended to the absorbed input right before hashing at flip.
    /// The append counts against the buffer capacity.
    pub domain_separator: Option<u8>,
    /// Whether unread bytes of the last output block are served by the next
    /// extract call. When `false` they are discarded.
    pub carry_leftover: bool,
}

impl PrngParams {
    /// Parameters of the earlier revision: `0x1F` domain byte, no carry-over.
    pub const fn legacy() -> Self {
        Self {
            domain_separator: Some(SHAKE_DOMAIN_SEPARATOR),
            carry_leftover: false,
        }
    }
}

impl Default for PrngParams {
    /// Current revision: plain hash at flip, stream-continuous extracts.
    fn default() -> Self {
        Self {
            domain_separator: None,
            carry_leftover: true,
        }
    }
}
