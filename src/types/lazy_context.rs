//! Deferred context labels.
//!
//! [`LazyContext`] holds a closure that builds a label only when the chain
//! it is attached to has failed. Healthy chains never run the closure.
//!
//! # Examples
//!
//! ```
//! use fntry::prelude::*;
//! use fntry::LazyContext;
//! use std::cell::Cell;
//!
//! let formatted = Cell::new(false);
//! let step = Step::with(5).context(LazyContext::new(|| {
//!     formatted.set(true);
//!     String::from("never built")
//! }));
//!
//! assert!(!step.is_failed());
//! assert!(!formatted.get());
//! ```
use crate::traits::IntoContext;
use crate::types::alloc_type::{Cow, String};

/// A context label generated on demand.
///
/// # Type Parameters
///
/// * `F` - A closure that implements `FnOnce() -> String`.
#[repr(transparent)]
pub struct LazyContext<F> {
    generator: F,
}

impl<F> LazyContext<F> {
    /// Wraps `generator`; it runs at most once.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoContext for LazyContext<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        Cow::Owned((self.generator)())
    }
}
