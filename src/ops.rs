//! Reusable operations for chains that only need to pass values through.
//!
//! ```
//! use fntry::ops::{identity, noop};
//! use fntry::prelude::*;
//!
//! let value = fntry::with(5).apply(identity).consume(noop).or_else(10);
//! assert_eq!(value, 5);
//! ```
use core::convert::Infallible;

/// Returns a copy of its input. Never fails.
#[inline]
pub fn identity<T: Clone>(value: &T) -> Result<T, Infallible> {
    Ok(value.clone())
}

/// Does nothing with its input. Never fails.
#[inline]
pub fn noop<T>(_value: &T) -> Result<(), Infallible> {
    Ok(())
}
