//! Random number generation module
//!
//! This module provides the deterministic, expandable-output generators of
//! the crate. Each generator absorbs arbitrary seed material, is finalized
//! once, and then yields an unbounded byte stream that depends only on the
//! absorbed input.
//!
//! Two backends implement the shared [`Prng`] contract:
//! - [`KeccakPrng`]: counter-mode over a 256-bit hash (SHA3-256 by default)
//! - [`Shake256Prng`]: the SHAKE256 sponge
//!
//! [`DefaultPrng`] names the backend selected at build time: the
//! counter-mode generator, or SHAKE256 when the `shake` feature is enabled.

/// Design goals:
/// - Determinism: identical input always yields an identical stream
/// - Stream continuity across arbitrarily split extract calls
/// - No heap allocation in the counter-mode core
/// - Minimal and explicit API surface
mod backend;
mod counter;
mod error;
pub mod handle;
mod keccak;
mod params;
mod shake;

pub use backend::Prng;
pub use error::{Operation, Phase, PrngError};
pub use keccak::KeccakPrng;
pub use params::{MAX_BUFFER_SIZE, PrngParams, SHAKE_DOMAIN_SEPARATOR, SYSTEM_SEED_LEN};
pub use shake::Shake256Prng;

use crate::hash::Sha3_256;

/// Counter-mode generator over SHA3-256 with the default capacity.
pub type Keccak256Prng = KeccakPrng<Sha3_256, MAX_BUFFER_SIZE>;

/// Backend selected by the `shake` feature.
#[cfg(not(feature = "shake"))]
pub type DefaultPrng = Keccak256Prng;

/// Backend selected by the `shake` feature.
#[cfg(feature = "shake")]
pub type DefaultPrng = Shake256Prng;
