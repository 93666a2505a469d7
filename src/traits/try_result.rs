//! The read-only contract shared by [`Step`](crate::Step) and
//! [`Outcome`](crate::Outcome).
use crate::types::{Carrier, ChainError};

/// Observes the state of a chain without resolving it.
///
/// Implementors only expose their [`Carrier`]; the observations are
/// provided. Every `TryResult` is also a
/// [`FallbackStrategy`](crate::FallbackStrategy).
///
/// # Examples
///
/// ```
/// use fntry::prelude::*;
///
/// let step = fntry::with(1).apply(|_| Err::<i32, _>("boom"));
///
/// assert!(step.is_failed());
/// assert_eq!(step.get(), Some(&1));
/// assert_eq!(step.error().unwrap().to_string(), "boom");
/// ```
pub trait TryResult<T>: Sized {
    /// Borrows the underlying carrier.
    fn carrier(&self) -> &Carrier<T>;

    /// Consumes `self`, returning the underlying carrier.
    fn into_carrier(self) -> Carrier<T>;

    /// Returns `true` once any operation in the chain has failed.
    #[inline]
    fn is_failed(&self) -> bool {
        self.carrier().is_failed()
    }

    /// The current value.
    ///
    /// On a failed chain this is the value retained from before the failure,
    /// which is `None` after [`map`](crate::Step::map) or a failed entry
    /// point.
    #[inline]
    fn get(&self) -> Option<&T> {
        self.carrier().value()
    }

    /// The captured error, present only on a failed chain.
    #[inline]
    fn error<'a>(&'a self) -> Option<&'a ChainError>
    where
        T: 'a,
    {
        self.carrier().error()
    }
}
