//! Deterministic expandable-output PRNG over a Keccak-based hash
//!
//! This crate turns an arbitrary-length seed into an effectively unbounded,
//! deterministic stream of pseudorandom bytes. It is the randomness backbone
//! for signature code that needs reproducible seeding, nonce derivation and
//! sampling input.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! generator is a small, self-contained state machine with explicit phases
//! and explicit errors.
//!
//! # Module overview
//!
//! - `hash`
//!   The 256-bit hash contract consumed by the generators (`Hash256`) and
//!   its default SHA3-256 implementation.
//!
//! - `primitives`
//!   Fixed-capacity building blocks. At present this is the bounded input
//!   buffer used to accumulate seed material without dynamic growth.
//!
//! - `rng`
//!   The generators themselves:
//!   - `KeccakPrng`, a counter-mode construction: all absorbed input is
//!     hashed once into a 32-byte state, and output block `i` is
//!     `Hash256(state || i)`. A leftover-byte cache keeps the stream
//!     continuous across arbitrarily split extract calls.
//!   - `Shake256Prng`, a sponge-based alternative exposing the same
//!     `init` / `inject` / `flip` / `extract` interface.
//!
//!   Both implement the `Prng` trait, so callers stay backend-agnostic.
//!
//! # Lifecycle
//!
//! ```text
//! init ──► inject* ──► flip ──► extract*
//! ```
//!
//! `flip` is one-way. Injecting after it, extracting before it, or flipping
//! twice are reported as `PrngError::InvalidState`.
//!
//! # Design goals
//!
//! - No heap allocations inside the core state machine
//! - Output independent of how a request is split across calls
//! - Secret material wiped on drop
//! - Minimal and explicit APIs

pub mod hash;
pub mod primitives;
pub mod rng;
