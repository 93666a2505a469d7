//! Chain types and the errors they carry.
//!
//! # Examples
//!
//! ```
//! use fntry::{ChainError, Step};
//! use fntry::traits::TryResult;
//!
//! let step: Step<u8> = Step::failed("disk full");
//!
//! assert!(step.is_failed());
//! assert!(step.get().is_none());
//! assert_eq!(step.error().map(ChainError::to_string).as_deref(), Some("disk full"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod carrier;
pub mod chain_error;
pub mod fatal_error;
pub mod lazy_context;
pub mod outcome;
#[cfg(feature = "serde")]
pub mod report;
pub mod step;

pub use alloc_type::BoxError;
pub use carrier::Carrier;
pub use chain_error::{ChainError, MissingOperation, PredicateMismatch};
pub use fatal_error::FatalError;
pub use lazy_context::LazyContext;
pub use outcome::Outcome;
#[cfg(feature = "serde")]
pub use report::Report;
pub use step::Step;

/// SmallVec-backed collection used for context labels.
///
/// Uses inline storage for one element, the common case of a single label
/// on a failed chain.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
