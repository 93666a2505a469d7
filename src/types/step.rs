//! The chain engine.
//!
//! A [`Step`] owns the current [`Carrier`] and threads it through caller
//! operations. Each combinator consumes the step and returns the next one,
//! so a chain reads top to bottom and failure handling happens once, at the
//! end:
//!
//! ```
//! use fntry::prelude::*;
//!
//! let port = fntry::with("8080")
//!     .map(|raw| raw.parse::<u16>())
//!     .or_else(80);
//!
//! assert_eq!(port, 8080);
//! ```
//!
//! Once an operation fails the chain is failed for good. Later combinators
//! skip their operation, so the first error is the one reported.
use crate::observe;
use crate::traits::{IntoContext, TryResult};
use crate::types::alloc_type::BoxError;
use crate::types::{Carrier, ChainError, Outcome, PredicateMismatch};

/// An in-flight value plus failure state.
///
/// # Type Parameters
///
/// * `T` - The value type carried between type-preserving operations
///
/// # Examples
///
/// ```
/// use fntry::prelude::*;
///
/// let step = Step::with(String::from("hello"))
///     .apply(|s| Ok::<_, &str>(s.to_uppercase()))
///     .consume(|s| if s.is_empty() { Err("empty") } else { Ok(()) });
///
/// assert!(!step.is_failed());
/// assert_eq!(step.get().map(String::as_str), Some("HELLO"));
/// ```
#[must_use]
#[derive(Debug)]
pub struct Step<T> {
    carrier: Carrier<T>,
}

impl<T> Step<T> {
    /// Starts a healthy chain holding `value`.
    #[inline]
    pub fn with(value: T) -> Self {
        Self { carrier: Carrier::healthy(value) }
    }

    /// Starts a chain that has already failed with `error` and holds no value.
    #[inline]
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { carrier: Carrier::failed(None, ChainError::new(error)) }
    }

    /// Runs a type-preserving operation on the current value.
    ///
    /// On success the chain continues with the new value. On failure the
    /// chain keeps the previous value and records the error. A failed chain
    /// is returned untouched without calling `op`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let step = Step::with(10).apply(|_| Err::<i32, _>("nope"));
    ///
    /// assert!(step.is_failed());
    /// assert_eq!(step.get(), Some(&10));
    /// ```
    pub fn apply<F, E>(self, op: F) -> Self
    where
        F: FnOnce(&T) -> Result<T, E>,
        E: Into<BoxError>,
    {
        let next = match &self.carrier {
            Carrier::Healthy(current) => op(current),
            Carrier::Failed { .. } => {
                observe::skipped("apply");
                return self;
            },
        };

        match next {
            Ok(value) => Self::with(value),
            Err(error) => self.fail("apply", error),
        }
    }

    /// Runs an operation for its side effect only.
    ///
    /// The value is left untouched whether the operation succeeds or fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let step = Step::with(3).consume(|n| if *n > 2 { Err("too big") } else { Ok(()) });
    ///
    /// assert!(step.is_failed());
    /// assert_eq!(step.or_else(0), 0);
    /// ```
    pub fn consume<F, E>(self, op: F) -> Self
    where
        F: FnOnce(&T) -> Result<(), E>,
        E: Into<BoxError>,
    {
        let done = match &self.carrier {
            Carrier::Healthy(current) => op(current),
            Carrier::Failed { .. } => {
                observe::skipped("consume");
                return self;
            },
        };

        match done {
            Ok(()) => self,
            Err(error) => self.fail("consume", error),
        }
    }

    /// Transforms the value into another type and ends the chain.
    ///
    /// There is no `U` to keep when the chain fails, so a failed [`Outcome`]
    /// from `map` never holds a value, whether the failure happened here or
    /// earlier.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let outcome = Step::with("x1").map(|s| s.parse::<u8>());
    ///
    /// assert!(outcome.is_failed());
    /// assert!(outcome.get().is_none());
    /// ```
    pub fn map<U, F, E>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        match self.carrier {
            Carrier::Healthy(value) => match op(value) {
                Ok(mapped) => Outcome::from(Carrier::healthy(mapped)),
                Err(error) => {
                    let error = ChainError::new(error);
                    observe::captured("map", &error);
                    Outcome::from(Carrier::failed(None, error))
                },
            },
            Carrier::Failed { error, .. } => {
                observe::skipped("map");
                Outcome::from(Carrier::failed(None, error))
            },
        }
    }

    /// Keeps the chain healthy only if `predicate` accepts the value.
    ///
    /// A rejected value is retained; the chain fails with
    /// [`PredicateMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let step = Step::with(7).filter(|n| n % 2 == 0);
    ///
    /// assert!(step.error().unwrap().is_predicate_mismatch());
    /// assert_eq!(step.get(), Some(&7));
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let matched = match &self.carrier {
            Carrier::Healthy(current) => predicate(current),
            Carrier::Failed { .. } => {
                observe::skipped("filter");
                return self;
            },
        };

        if matched {
            self
        } else {
            self.fail("filter", PredicateMismatch)
        }
    }

    /// Labels the captured error. No-op while the chain is healthy.
    ///
    /// Lazy contexts built with [`context!`](crate::context) are only
    /// formatted when the chain has failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fntry::prelude::*;
    ///
    /// let user_id = 7;
    /// let step = Step::with(user_id)
    ///     .consume(|_| Err("not found"))
    ///     .context(context!("loading user {}", user_id));
    ///
    /// assert_eq!(step.error().unwrap().error_chain(), "loading user 7 -> not found");
    /// ```
    pub fn context<C>(self, context: C) -> Self
    where
        C: IntoContext,
    {
        if !self.carrier.is_failed() {
            return self;
        }
        Self { carrier: self.carrier.map_error(|error| error.with_context(context)) }
    }

    /// Ends the chain, exposing its state as a read-only [`Outcome`].
    #[inline]
    pub fn get_result(self) -> Outcome<T> {
        Outcome::from(self.carrier)
    }

    fn fail<E>(self, stage: &'static str, error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let error = ChainError::new(error);
        observe::captured(stage, &error);
        Self { carrier: self.carrier.fail_with(error) }
    }
}

impl<T> From<Carrier<T>> for Step<T> {
    #[inline]
    fn from(carrier: Carrier<T>) -> Self {
        Self { carrier }
    }
}

impl<T> From<Step<T>> for Outcome<T> {
    #[inline]
    fn from(step: Step<T>) -> Self {
        step.get_result()
    }
}

impl<T> TryResult<T> for Step<T> {
    #[inline]
    fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    #[inline]
    fn into_carrier(self) -> Carrier<T> {
        self.carrier
    }
}
