//! Procedural interface over context handles.
//!
//! These functions mirror the `init` / `inject` / `flip` / `extract` calling
//! convention used by callers that hold a context slot which may not be
//! bound yet. An unbound (`None`) context or output buffer is reported as
//! [`PrngError::InvalidArgument`]; everything else is delegated to the
//! [`Prng`] implementation.

use super::backend::Prng;
use super::error::PrngError;

fn bound<'a, T: ?Sized>(slot: Option<&'a mut T>, what: &'static str) -> Result<&'a mut T, PrngError> {
    slot.ok_or(PrngError::InvalidArgument(what))
}

/// Resets the context to a fresh accumulating state.
pub fn init<P: Prng>(ctx: Option<&mut P>) -> Result<(), PrngError> {
    bound(ctx, "context")?.init();
    Ok(())
}

/// Absorbs `data` into the context.
pub fn inject<P: Prng>(ctx: Option<&mut P>, data: &[u8]) -> Result<(), PrngError> {
    bound(ctx, "context")?.inject(data)
}

/// Finalizes the context.
pub fn flip<P: Prng>(ctx: Option<&mut P>) -> Result<(), PrngError> {
    bound(ctx, "context")?.flip()
}

/// Returns the next `len` output bytes.
pub fn extract<P: Prng>(ctx: Option<&mut P>, len: usize) -> Result<Vec<u8>, PrngError> {
    bound(ctx, "context")?.extract(len)
}

/// Fills `out` with the next output bytes.
pub fn extract_into<P: Prng>(ctx: Option<&mut P>, out: Option<&mut [u8]>) -> Result<(), PrngError> {
    let ctx = bound(ctx, "context")?;
    let out = bound(out, "output buffer")?;

    ctx.extract_into(out)
}
