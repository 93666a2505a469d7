//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use fntry::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`]
//! - **Types**: [`Step`], [`Outcome`], [`ChainError`]
//! - **Traits**: [`TryResult`], [`FallbackStrategy`], [`IntoContext`]
//!
//! Entry points are used through the crate path (`fntry::with`, `fntry::of`)
//! so their short names do not collide with local items.
//!
//! # Examples
//!
//! ```
//! use fntry::prelude::*;
//!
//! fn load_port(raw: &str) -> u16 {
//!     fntry::with(raw)
//!         .map(|s| s.parse::<u16>())
//!         .or_else(8080)
//! }
//!
//! assert_eq!(load_port("9000"), 9000);
//! assert_eq!(load_port("http"), 8080);
//! ```

// Macros
pub use crate::context;

// Core types
pub use crate::types::{ChainError, Outcome, Step};

// Traits
pub use crate::traits::{FallbackStrategy, IntoContext, TryResult};
