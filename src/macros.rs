//! Macros for building context labels.
//!
//! - [`macro@crate::context`] - Defers formatting until the chain it labels
//!   has failed, so healthy chains never allocate for context.
//!
//! # Examples
//!
//! ```
//! use fntry::prelude::*;
//!
//! let path = "settings.toml";
//! let err = fntry::of(|| std::fs::read_to_string(path))
//!     .context(context!("reading {}", path))
//!     .into_result()
//!     .unwrap_err();
//!
//! assert!(err.error_chain().starts_with("reading settings.toml -> "));
//! ```

/// Creates a lazily-evaluated context label using `format!` syntax.
///
/// The label is only formatted when attached to a failed chain.
///
/// # Examples
///
/// ```
/// use fntry::prelude::*;
///
/// let attempt = 3;
/// let step = fntry::with(attempt)
///     .filter(|n| *n < 3)
///     .context(context!("attempt {}", attempt));
///
/// assert_eq!(step.error().unwrap().context().next(), Some("attempt 3"));
/// ```
#[macro_export]
macro_rules! context {
    ($($arg:tt)*) => {
        $crate::types::LazyContext::new(move || format!($($arg)*))
    };
}
