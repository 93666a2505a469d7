//! Ways to end a chain.
//!
//! [`FallbackStrategy`] is implemented for every [`TryResult`], so the same
//! resolution methods are available mid-chain on a [`Step`](crate::Step)
//! and on a finished [`Outcome`](crate::Outcome).
//!
//! | Method | On a failed chain | Fallback failure |
//! |--------|-------------------|------------------|
//! | [`or_else`](FallbackStrategy::or_else) | returns `other` | - |
//! | [`or_else_get`](FallbackStrategy::or_else_get) | returns the supplier's value | fatal |
//! | [`or_else_consume`](FallbackStrategy::or_else_consume) | runs the action with the retained value | fatal |
//! | [`or_simply`](FallbackStrategy::or_simply) | runs the action | - |
//! | [`or_then`](FallbackStrategy::or_then) | returns `op(retained)` | `None` |
//! | [`otherwise`](FallbackStrategy::otherwise) | hands the error to the handler | - |
//! | [`as_optional`](FallbackStrategy::as_optional) | returns the retained value | - |
//! | [`into_result`](FallbackStrategy::into_result) | returns `Err(error)` | - |
use crate::observe;
use crate::traits::TryResult;
use crate::types::alloc_type::BoxError;
use crate::types::fatal_error::escalate;
use crate::types::{Carrier, ChainError};

/// Resolution of a chain into a plain value or a reaction to its failure.
pub trait FallbackStrategy<T>: Sized {
    /// Returns `other` if the chain failed, otherwise the held value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// assert_eq!(fntry::with(1).apply(|n| Ok::<_, &str>(*n)).or_else(10), 1);
    /// assert_eq!(fntry::with(1).consume(|_| Err("boom")).or_else(2), 2);
    /// ```
    fn or_else(self, other: T) -> T;

    /// Runs `action` with the retained value if the chain failed.
    ///
    /// # Panics
    ///
    /// Panics with a [`FatalError`](crate::FatalError) if `action` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(None);
    /// fntry::with(4)
    ///     .consume(|_| Err("boom"))
    ///     .or_else_consume(|retained| {
    ///         seen.set(retained);
    ///         Ok::<_, &str>(())
    ///     });
    ///
    /// assert_eq!(seen.get(), Some(4));
    /// ```
    fn or_else_consume<F, E>(self, action: F)
    where
        F: FnOnce(Option<T>) -> Result<(), E>,
        E: Into<BoxError>;

    /// Runs `action` if the chain failed. The value is not touched.
    fn or_simply<F>(self, action: F)
    where
        F: FnOnce();

    /// Returns the supplier's value if the chain failed, otherwise the held
    /// value. The supplier only runs on a failed chain.
    ///
    /// # Panics
    ///
    /// Panics with a [`FatalError`](crate::FatalError) if `supplier` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let value = fntry::with("abc")
    ///     .map(|s| s.parse::<i32>())
    ///     .or_else_get(|| Ok::<_, &str>(300));
    ///
    /// assert_eq!(value, 300);
    /// ```
    fn or_else_get<F, E>(self, supplier: F) -> T
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>;

    /// Best-effort recovery from the retained value.
    ///
    /// On a failed chain returns `op(retained)`, or `None` if `op` fails.
    /// On a healthy chain returns the held value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let upper = fntry::of(|| Err::<String, _>("no input"))
    ///     .or_then(|s| Ok::<_, &str>(s.map_or_else(|| "NULL".into(), |s| s.to_uppercase())));
    /// assert_eq!(upper.as_deref(), Some("NULL"));
    ///
    /// let gone = fntry::of(|| Err::<String, _>("no input"))
    ///     .or_then(|_| Err("still nothing"));
    /// assert_eq!(gone, None);
    /// ```
    fn or_then<F, E>(self, op: F) -> Option<T>
    where
        F: FnOnce(Option<T>) -> Result<T, E>,
        E: Into<BoxError>;

    /// Hands the captured error to `handler` if the chain failed.
    fn otherwise<F>(self, handler: F)
    where
        F: FnOnce(ChainError);

    /// The current value regardless of failure state.
    ///
    /// A chain that failed after a type-preserving step still surfaces the
    /// value it retained.
    fn as_optional(self) -> Option<T>;

    /// Converts the chain into a standard `Result` for use with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// fn parse(raw: &str) -> Result<u8, ChainError> {
    ///     fntry::with(raw).map(|s| s.trim().parse::<u8>()).into_result()
    /// }
    ///
    /// assert_eq!(parse(" 7 ").unwrap(), 7);
    /// assert!(parse("300").is_err());
    /// ```
    fn into_result(self) -> Result<T, ChainError>;
}

impl<T, R> FallbackStrategy<T> for R
where
    R: TryResult<T>,
{
    #[inline]
    fn or_else(self, other: T) -> T {
        match self.into_carrier() {
            Carrier::Healthy(value) => value,
            Carrier::Failed { .. } => other,
        }
    }

    #[track_caller]
    fn or_else_consume<F, E>(self, action: F)
    where
        F: FnOnce(Option<T>) -> Result<(), E>,
        E: Into<BoxError>,
    {
        if let Carrier::Failed { retained, .. } = self.into_carrier() {
            if let Err(error) = action(retained) {
                escalate(ChainError::new(error));
            }
        }
    }

    #[inline]
    fn or_simply<F>(self, action: F)
    where
        F: FnOnce(),
    {
        if self.is_failed() {
            action();
        }
    }

    #[track_caller]
    fn or_else_get<F, E>(self, supplier: F) -> T
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        match self.into_carrier() {
            Carrier::Healthy(value) => value,
            Carrier::Failed { .. } => match supplier() {
                Ok(value) => value,
                Err(error) => escalate(ChainError::new(error)),
            },
        }
    }

    fn or_then<F, E>(self, op: F) -> Option<T>
    where
        F: FnOnce(Option<T>) -> Result<T, E>,
        E: Into<BoxError>,
    {
        match self.into_carrier() {
            Carrier::Healthy(value) => Some(value),
            Carrier::Failed { retained, .. } => match op(retained) {
                Ok(value) => Some(value),
                Err(error) => {
                    observe::swallowed("or_then", error);
                    None
                },
            },
        }
    }

    #[inline]
    fn otherwise<F>(self, handler: F)
    where
        F: FnOnce(ChainError),
    {
        if let Carrier::Failed { error, .. } = self.into_carrier() {
            handler(error);
        }
    }

    #[inline]
    fn as_optional(self) -> Option<T> {
        self.into_carrier().into_value()
    }

    #[inline]
    fn into_result(self) -> Result<T, ChainError> {
        match self.into_carrier() {
            Carrier::Healthy(value) => Ok(value),
            Carrier::Failed { error, .. } => Err(error),
        }
    }
}
