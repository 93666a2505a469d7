//! Serializable snapshot of a chain (requires the `serde` feature).
//!
//! A captured error is type-erased, so the report keeps its message and
//! context labels as strings.
//!
//! # Examples
//!
//! ```
//! use fntry::prelude::*;
//! use fntry::Report;
//!
//! let step = fntry::with(3).consume(|_| Err("quota exceeded")).context("billing");
//! let report = Report::capture(&step);
//!
//! assert_eq!(report.value, Some(3));
//! assert!(report.failed);
//! assert_eq!(report.error.as_deref(), Some("quota exceeded"));
//! assert_eq!(report.context, vec!["billing".to_string()]);
//! ```
use core::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::traits::TryResult;
use crate::types::alloc_type::{String, Vec};

/// Point-in-time view of a chain's value and failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report<T> {
    /// Current (or retained) value.
    pub value: Option<T>,
    /// Whether any operation failed.
    pub failed: bool,
    /// Message of the captured error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Context labels, most recent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
}

impl<T: Clone> Report<T> {
    /// Snapshots any step or outcome without consuming it.
    pub fn capture<R>(result: &R) -> Self
    where
        R: TryResult<T>,
    {
        let error = result.error().map(|err| {
            let mut message = String::new();
            let _ = write!(message, "{}", err.source_error());
            message
        });
        let context = result
            .error()
            .map(|err| err.context().map(String::from).collect())
            .unwrap_or_default();

        Self { value: result.get().cloned(), failed: result.is_failed(), error, context }
    }
}
