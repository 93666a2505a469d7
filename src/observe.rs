//! Logging hooks for chain state transitions.
//!
//! With the `tracing` feature each hook emits an event; without it they
//! compile away.
//!
//! | Hook | Level | When |
//! |------|-------|------|
//! | [`captured`] | `DEBUG` | an operation failed and the chain became failed |
//! | [`skipped`] | `TRACE` | a combinator short-circuited on a failed chain |
//! | [`swallowed`] | `WARN` | a best-effort fallback failed and was dropped |
//! | [`escalated`] | `ERROR` | a failure became fatal |
use crate::types::{BoxError, ChainError, FatalError};

#[inline]
pub(crate) fn captured(stage: &'static str, error: &ChainError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(stage = stage, error = %error, "operation failed, chain is now failed");
    #[cfg(not(feature = "tracing"))]
    let _ = (stage, error);
}

#[inline]
pub(crate) fn skipped(stage: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(stage = stage, "chain already failed, operation skipped");
    #[cfg(not(feature = "tracing"))]
    let _ = stage;
}

#[inline]
pub(crate) fn swallowed<E>(stage: &'static str, error: E)
where
    E: Into<BoxError>,
{
    #[cfg(feature = "tracing")]
    {
        let error: BoxError = error.into();
        tracing::warn!(stage = stage, error = %error, "fallback failed, returning empty");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (stage, error);
}

#[inline]
pub(crate) fn escalated(fatal: &FatalError) {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %fatal.cause(), "escalating failure to fatal");
    #[cfg(not(feature = "tracing"))]
    let _ = fatal;
}
