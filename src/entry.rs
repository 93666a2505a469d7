//! Entry points that start a chain.
//!
//! | Function | Input | Returns |
//! |----------|-------|---------|
//! | [`with`] | a value | healthy [`Step`] |
//! | [`with_supplier`] / [`of`] | a fallible producer | [`Step`] |
//! | [`just`] | a fallible action | [`Outcome<()>`] |
//! | [`get`] | a fallible producer | `Option<T>` |
//! | [`lifted`] | a fallible producer | `T`, or a fatal panic |
//!
//! The `*_optional` variants take `Option<F>`; `None` fails the chain with
//! [`MissingOperation`](crate::MissingOperation).
//!
//! # Examples
//!
//! ```
//! use fntry::prelude::*;
//!
//! let total = fntry::of(|| "20".parse::<u32>())
//!     .apply(|n| n.checked_mul(2).ok_or("overflow"))
//!     .or_else(0);
//!
//! assert_eq!(total, 40);
//! ```
use crate::observe;
use crate::types::alloc_type::BoxError;
use crate::types::fatal_error::escalate;
use crate::types::{Carrier, ChainError, Outcome, Step};

/// Starts a healthy chain holding `value`.
#[inline]
pub fn with<T>(value: T) -> Step<T> {
    Step::with(value)
}

/// Starts a chain from the value produced by `supplier`.
///
/// The supplier runs immediately. If it fails, the chain starts failed
/// with no value.
pub fn with_supplier<T, F, E>(supplier: F) -> Step<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match supplier() {
        Ok(value) => Step::with(value),
        Err(error) => {
            let error = ChainError::new(error);
            observe::captured("with_supplier", &error);
            Step::from(Carrier::failed(None, error))
        },
    }
}

/// Starts a chain from a fallible operation, for when no initial value
/// exists yet.
///
/// # Examples
///
/// ```
/// use fntry::prelude::*;
///
/// let step = fntry::of(|| std::fs::read_to_string("/definitely/not/here"));
///
/// assert!(step.is_failed());
/// assert!(step.get().is_none());
/// ```
#[inline]
pub fn of<T, F, E>(op: F) -> Step<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    with_supplier(op)
}

/// Like [`of`], with an operation that may be absent.
pub fn of_optional<T, F, E>(op: Option<F>) -> Step<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match op {
        Some(op) => with_supplier(op),
        None => Step::from(missing("of")),
    }
}

/// Runs a fallible action for its side effect.
///
/// A successful outcome holds `()`, so `get()` and `as_optional()` return
/// `Some(())` on success. Check [`is_failed`](crate::TryResult::is_failed)
/// rather than `as_optional().is_none()` to tell success from failure.
///
/// # Examples
///
/// ```
/// use fntry::prelude::*;
///
/// let outcome = fntry::just(|| std::fs::remove_file("/definitely/not/here"));
///
/// assert!(outcome.is_failed());
/// ```
#[inline]
pub fn just<F, E>(action: F) -> Outcome<()>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    just_optional(Some(action))
}

/// Like [`just`], with an action that may be absent.
pub fn just_optional<F, E>(action: Option<F>) -> Outcome<()>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    let Some(action) = action else {
        return Outcome::from(missing("just"));
    };

    match action() {
        Ok(()) => Outcome::success(()),
        Err(error) => {
            let error = ChainError::new(error);
            observe::captured("just", &error);
            Outcome::from(Carrier::failed(None, error))
        },
    }
}

/// Runs a fallible producer, keeping only its value.
///
/// Any failure becomes `None`; the error is dropped.
///
/// # Examples
///
/// ```
/// assert_eq!(fntry::get(|| "a".parse::<char>()), Some('a'));
/// assert_eq!(fntry::get(|| "ab".parse::<char>()), None);
/// ```
#[inline]
pub fn get<T, F, E>(op: F) -> Option<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    get_optional(Some(op))
}

/// Like [`get`], with an operation that may be absent.
pub fn get_optional<T, F, E>(op: Option<F>) -> Option<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match op?() {
        Ok(value) => Some(value),
        Err(error) => {
            observe::swallowed("get", error);
            None
        },
    }
}

/// Runs a fallible producer, treating failure as unrecoverable.
///
/// # Panics
///
/// Panics with a [`FatalError`](crate::FatalError) wrapping the producer's
/// error.
///
/// # Examples
///
/// ```
/// let n: u32 = fntry::lifted(|| "17".parse());
/// assert_eq!(n, 17);
/// ```
#[track_caller]
pub fn lifted<T, F, E>(op: F) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match op() {
        Ok(value) => value,
        Err(error) => escalate(ChainError::new(error)),
    }
}

fn missing<T>(stage: &'static str) -> Carrier<T> {
    let error = ChainError::missing_operation();
    observe::captured(stage, &error);
    Carrier::failed(None, error)
}
