//! Conversion into context labels.
//!
//! Implemented for `&'static str`, `String`, `Cow<'static, str>` and
//! [`LazyContext`](crate::LazyContext).
//!
//! ```
//! use fntry::traits::IntoContext;
//!
//! assert_eq!("reading config".into_context(), "reading config");
//! assert_eq!(String::from("owned").into_context(), "owned");
//! ```
use crate::types::alloc_type::{Cow, String};

/// Converts a type into a context label attached to a failed chain.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a chain context",
    label = "this type does not implement `IntoContext`",
    note = "pass a string, or build a lazy label with `context!`"
)]
pub trait IntoContext {
    /// Converts `self` into a label.
    fn into_context(self) -> Cow<'static, str>;
}

impl IntoContext for &'static str {
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        Cow::Borrowed(self)
    }
}

impl IntoContext for String {
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        Cow::Owned(self)
    }
}

impl IntoContext for Cow<'static, str> {
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        self
    }
}
