//! The failure captured by a chain.
//!
//! [`ChainError`] keeps the error returned by the first failing operation
//! untouched, plus any context labels attached afterwards through
//! [`Step::context`](crate::Step::context). The original error stays
//! reachable through [`ChainError::source_error`], [`ChainError::downcast_ref`]
//! and `Error::source`.
//!
//! # Examples
//!
//! ```
//! use fntry::ChainError;
//!
//! let err = ChainError::new("connection refused")
//!     .with_context("loading profile")
//!     .with_context("rendering dashboard");
//!
//! assert_eq!(
//!     err.error_chain(),
//!     "rendering dashboard -> loading profile -> connection refused"
//! );
//! ```
use core::error::Error;
use core::fmt;

use crate::traits::IntoContext;
use crate::types::alloc_type::{BoxError, Cow, String};
use crate::types::ErrorVec;

/// Error captured into a failed chain.
#[must_use]
#[derive(Debug)]
pub struct ChainError {
    source: BoxError,
    context: ErrorVec<Cow<'static, str>>,
}

impl ChainError {
    /// Captures any error convertible into a [`BoxError`].
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { source: error.into(), context: ErrorVec::new() }
    }

    /// The error synthesized when an entry point receives no operation.
    #[inline]
    pub fn missing_operation() -> Self {
        Self::new(MissingOperation)
    }

    /// The error synthesized when [`Step::filter`](crate::Step::filter) rejects a value.
    #[inline]
    pub fn predicate_mismatch() -> Self {
        Self::new(PredicateMismatch)
    }

    /// Pushes a context label onto the stack.
    #[inline]
    pub fn with_context<C>(mut self, context: C) -> Self
    where
        C: IntoContext,
    {
        self.context.push(context.into_context());
        self
    }

    /// Returns the error produced by the failing operation.
    #[inline]
    pub fn source_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Consumes the chain error, returning the original boxed error.
    #[inline]
    pub fn into_source(self) -> BoxError {
        self.source
    }

    /// Attempts to view the original error as a concrete type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.source.downcast_ref::<E>()
    }

    /// Returns `true` if the original error is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.source.is::<E>()
    }

    /// Returns `true` if the chain failed because no operation was supplied.
    #[inline]
    pub fn is_missing_operation(&self) -> bool {
        self.is::<MissingOperation>()
    }

    /// Returns `true` if the chain failed on a rejected filter predicate.
    #[inline]
    pub fn is_predicate_mismatch(&self) -> bool {
        self.is::<PredicateMismatch>()
    }

    /// Iterates context labels, most recent first.
    #[inline]
    pub fn context(&self) -> impl Iterator<Item = &str> + '_ {
        self.context.iter().rev().map(|ctx| &**ctx)
    }

    /// Returns `true` if at least one context label was attached.
    #[inline]
    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    /// Formats the context labels and the original error as `ctx -> ... -> error`.
    #[must_use]
    pub fn error_chain(&self) -> String {
        use core::fmt::Write;

        let mut out = String::new();
        for ctx in self.context() {
            let _ = write!(out, "{} -> ", ctx);
        }
        let _ = write!(out, "{}", self.source);
        out
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            for ctx in self.context() {
                write!(f, "{} -> ", ctx)?;
            }
            return write!(f, "{}", self.source);
        }

        write!(f, "Error: {}", self.source)?;
        if self.has_context() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for ctx in self.context() {
                writeln!(f, "  - {}", ctx)?;
            }
        }
        Ok(())
    }
}

impl Error for ChainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// No operation was supplied to an entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MissingOperation;

impl fmt::Display for MissingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no operation was supplied")
    }
}

impl Error for MissingOperation {}

/// A filter predicate rejected the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PredicateMismatch;

impl fmt::Display for PredicateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("predicate did not match the current value")
    }
}

impl Error for PredicateMismatch {}
