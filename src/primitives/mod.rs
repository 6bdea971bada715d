//! Primitive types
//!
//! Fixed-capacity building blocks used by the generators. They never grow
//! past their compile-time capacity and report overflow as a value instead
//! of writing out of bounds.
//!
//! Current primitives include:
//! - `BoundedBuffer`: an inline byte buffer with checked, all-or-nothing
//!   appends

mod bounded;

/// Fixed-capacity byte buffer and its overflow report.
pub use bounded::{BoundedBuffer, CapacityError};
