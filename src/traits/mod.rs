//! Traits shared by the chain types.
//!
//! - [`TryResult`]: read-only observation of a chain (`is_failed`, `get`, `error`)
//! - [`FallbackStrategy`]: resolution of a chain, blanket-implemented for every `TryResult`
//! - [`IntoContext`]: conversion into the labels attached to a failed chain
//!
//! # Examples
//!
//! ```
//! use fntry::traits::{FallbackStrategy, TryResult};
//!
//! fn describe<R: TryResult<u32>>(result: &R) -> &'static str {
//!     if result.is_failed() { "failed" } else { "ok" }
//! }
//!
//! let step = fntry::with(3u32);
//! assert_eq!(describe(&step), "ok");
//! assert_eq!(step.or_else(0), 3);
//! ```

pub mod fallback;
pub mod into_context;
pub mod try_result;

pub use fallback::FallbackStrategy;
pub use into_context::IntoContext;
pub use try_result::TryResult;
