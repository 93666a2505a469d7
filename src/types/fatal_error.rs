//! Escalation of a recoverable failure into an unrecoverable one.
//!
//! A chain never surfaces its error by itself. The only ways out are
//! [`lifted`](crate::lifted) and the two final fallbacks
//! ([`or_else_consume`](crate::FallbackStrategy::or_else_consume) and
//! [`or_else_get`](crate::FallbackStrategy::or_else_get)) whose own failure
//! has nowhere left to go. Those paths panic with a [`FatalError`] payload.
//!
//! With the `std` feature the payload is the `FatalError` value itself, so it
//! can be recovered with `catch_unwind` and `downcast`:
//!
//! ```
//! use fntry::{lifted, FatalError};
//!
//! let caught = std::panic::catch_unwind(|| {
//!     lifted(|| "42x".parse::<u32>())
//! })
//! .unwrap_err();
//!
//! let fatal = caught.downcast::<FatalError>().unwrap();
//! assert!(fatal.cause().to_string().contains("invalid digit"));
//! ```
use core::error::Error;
use core::fmt;

use crate::observe;
use crate::types::ChainError;

/// Unchecked aggregate error wrapping the failure that could not be recovered.
#[derive(Debug)]
pub struct FatalError {
    cause: ChainError,
}

impl FatalError {
    /// Wraps a captured failure.
    #[inline]
    pub fn new(cause: ChainError) -> Self {
        Self { cause }
    }

    /// The failure that triggered the escalation.
    #[inline]
    pub fn cause(&self) -> &ChainError {
        &self.cause
    }

    /// Consumes the fatal error, returning its cause.
    #[inline]
    pub fn into_cause(self) -> ChainError {
        self.cause
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecoverable failure: {}", self.cause)
    }
}

impl Error for FatalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// Raises `cause` as a fatal error. Never returns.
#[cold]
#[track_caller]
pub(crate) fn escalate(cause: ChainError) -> ! {
    let fatal = FatalError::new(cause);
    observe::escalated(&fatal);

    #[cfg(feature = "std")]
    {
        std::panic::panic_any(fatal)
    }
    #[cfg(not(feature = "std"))]
    {
        panic!("{}", fatal)
    }
}
