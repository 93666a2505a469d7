use crate::traits::TryResult;
use crate::types::alloc_type::BoxError;
use crate::types::{Carrier, ChainError};

/// Read-only, terminal view of a chain.
///
/// Produced by [`Step::get_result`](crate::Step::get_result),
/// [`Step::map`](crate::Step::map) and [`just`](crate::just). An outcome has
/// no continuation combinators: inspect it through [`TryResult`] or resolve
/// it through [`FallbackStrategy`](crate::FallbackStrategy).
///
/// # Examples
///
/// ```
/// use fntry::prelude::*;
///
/// let outcome = fntry::with(2).map(|n| Ok::<_, &str>(n * 21));
///
/// assert!(!outcome.is_failed());
/// assert_eq!(outcome.get(), Some(&42));
/// ```
#[must_use]
#[derive(Debug)]
pub struct Outcome<T> {
    carrier: Carrier<T>,
}

impl<T> Outcome<T> {
    /// A successful outcome holding `value`.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { carrier: Carrier::healthy(value) }
    }

    /// A failed outcome without a value.
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { carrier: Carrier::failed(None, ChainError::new(error)) }
    }
}

impl<T> From<Carrier<T>> for Outcome<T> {
    #[inline]
    fn from(carrier: Carrier<T>) -> Self {
        Self { carrier }
    }
}

impl<T> TryResult<T> for Outcome<T> {
    #[inline]
    fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    #[inline]
    fn into_carrier(self) -> Carrier<T> {
        self.carrier
    }
}
