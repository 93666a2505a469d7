use crate::types::ChainError;

/// The value/error state underlying a [`Step`](crate::Step) or
/// [`Outcome`](crate::Outcome).
///
/// A carrier is either healthy, holding the current value, or failed,
/// holding the captured error and whatever value was last known good.
/// A failed carrier always has an error and a healthy one never does.
///
/// # Examples
///
/// ```
/// use fntry::{Carrier, ChainError};
///
/// let healthy = Carrier::healthy(3);
/// assert_eq!(healthy.value(), Some(&3));
/// assert!(healthy.error().is_none());
///
/// let failed = Carrier::failed(Some(3), ChainError::new("boom"));
/// assert!(failed.is_failed());
/// assert_eq!(failed.value(), Some(&3));
/// ```
#[must_use]
#[derive(Debug)]
pub enum Carrier<T> {
    /// No operation has failed yet.
    Healthy(T),
    /// An operation failed.
    Failed {
        /// Last successful value, if it survived the failure.
        retained: Option<T>,
        /// The first error captured by the chain.
        error: ChainError,
    },
}

impl<T> Carrier<T> {
    #[inline]
    pub fn healthy(value: T) -> Self {
        Self::Healthy(value)
    }

    #[inline]
    pub fn failed(retained: Option<T>, error: ChainError) -> Self {
        Self::Failed { retained, error }
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Current value: the healthy value, or the retained one after a failure.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Healthy(value) => Some(value),
            Self::Failed { retained, .. } => retained.as_ref(),
        }
    }

    #[inline]
    pub fn error(&self) -> Option<&ChainError> {
        match self {
            Self::Healthy(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.into_parts().0
    }

    /// Splits the carrier into its `(value, error)` pair.
    #[inline]
    pub fn into_parts(self) -> (Option<T>, Option<ChainError>) {
        match self {
            Self::Healthy(value) => (Some(value), None),
            Self::Failed { retained, error } => (retained, Some(error)),
        }
    }

    /// Fails a healthy carrier, keeping its value. A failed carrier keeps
    /// its first error.
    #[inline]
    pub(crate) fn fail_with(self, error: ChainError) -> Self {
        match self {
            Self::Healthy(value) => Self::failed(Some(value), error),
            failed @ Self::Failed { .. } => failed,
        }
    }

    /// Rewrites the captured error; no-op on a healthy carrier.
    #[inline]
    pub(crate) fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(ChainError) -> ChainError,
    {
        match self {
            Self::Failed { retained, error } => Self::failed(retained, f(error)),
            healthy @ Self::Healthy(_) => healthy,
        }
    }
}
