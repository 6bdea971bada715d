use std::fmt;
use thiserror::Error;

use crate::primitives::CapacityError;

/// Errors reported by the generators.
///
/// Every failure is local and recoverable by correcting usage: nothing is
/// retried internally, and a failed call leaves the context as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrngError {
    /// A required handle (context or output buffer) was not provided.
    #[error("Invalid argument: {0} is unbound")]
    InvalidArgument(&'static str),

    /// The operation is not allowed in the context's current phase.
    #[error("Invalid state: cannot {operation} while {phase}")]
    InvalidState { operation: Operation, phase: Phase },

    /// Absorbing the input would overflow the fixed input buffer.
    #[error("Capacity exceeded: {requested} bytes requested, {available} of {capacity} available")]
    CapacityExceeded {
        requested: usize,
        available: usize,
        capacity: usize,
    },

    /// The operating system entropy source failed.
    #[error("Entropy source error: {0}")]
    Entropy(String),
}

/// Operations of the generator interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Init,
    Inject,
    Flip,
    Extract,
}

/// Lifecycle phase of an initialized context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input; output is not available yet.
    Accumulating,
    /// State derived; only output generation is allowed.
    Finalized,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Inject => write!(f, "inject"),
            Self::Flip => write!(f, "flip"),
            Self::Extract => write!(f, "extract"),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accumulating => write!(f, "accumulating input"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}

impl PrngError {
    /// Creates an out-of-sequence error.
    pub fn invalid_state(operation: Operation, phase: Phase) -> Self {
        PrngError::InvalidState { operation, phase }
    }
}

impl From<CapacityError> for PrngError {
    fn from(error: CapacityError) -> Self {
        PrngError::CapacityExceeded {
            requested: error.requested,
            available: error.available,
            capacity: error.capacity,
        }
    }
}
