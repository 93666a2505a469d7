//! Chainable fallible operations with deferred failure handling.
//!
//! Instead of handling each failure where it happens, start a chain, run the
//! operations, and decide what to do about failure once, at the end. The
//! first failure is captured and every later operation is skipped.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `fntry::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Type-preserving steps keep the last good value
//!
//! ```
//! use fntry::prelude::*;
//!
//! let step = fntry::with(1)
//!     .apply(|n| Ok::<_, &str>(n + 1))
//!     .apply(|_| Err("lost connection"));
//!
//! assert!(step.is_failed());
//! assert_eq!(step.get(), Some(&2));
//! assert_eq!(step.or_else(0), 0);
//! ```
//!
//! ## Mapping ends the chain
//!
//! ```
//! use fntry::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Celsius(f64);
//!
//! let reading = fntry::of(|| "21.5".parse::<f64>())
//!     .filter(|t| t.is_finite())
//!     .map(|t| Ok::<_, &str>(Celsius(t)))
//!     .or_else(Celsius(0.0));
//!
//! assert_eq!(reading, Celsius(21.5));
//! ```
//!
//! ## Fire-and-forget actions
//!
//! ```
//! use fntry::prelude::*;
//!
//! let mut log = Vec::new();
//! fntry::just(|| Err("printer offline"))
//!     .otherwise(|err| log.push(err.to_string()));
//!
//! assert_eq!(log, ["printer offline"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Entry points that start a chain
pub mod entry;
/// Context label macros
pub mod macros;
/// Identity and no-op operations
pub mod ops;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits shared by steps and outcomes
pub mod traits;
/// Chain types, carriers and errors
pub mod types;

mod observe;

pub use entry::*;
pub use traits::*;
pub use types::{
    BoxError, Carrier, ChainError, ErrorVec, FatalError, LazyContext, MissingOperation, Outcome,
    PredicateMismatch, Step,
};
#[cfg(feature = "serde")]
pub use types::Report;
