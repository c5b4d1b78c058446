//! Search result type.

use crate::error::CollectionError;

/// Outcome of a search: the found value, or nothing.
///
/// Searches return this instead of overloading a sentinel (`-1`, `None`
/// from a nullable element) as "not found", so a legitimately found
/// default value is never confused with a miss.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FindResult<T> {
    /// The search matched and produced a value.
    Success(T),
    /// No element matched.
    Failure,
}

/// Alias used by request-style lookups.
pub type ItemRequestResult<T> = FindResult<T>;

impl<T> FindResult<T> {
    /// `true` for [`FindResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for [`FindResult::Failure`].
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the found value.
    ///
    /// Returns [`CollectionError::InvalidState`] on a failed result.
    pub fn value(&self) -> Result<&T, CollectionError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure => Err(CollectionError::invalid_state(
                "value requested from a failed search result",
            )),
        }
    }

    /// Take the found value.
    ///
    /// Returns [`CollectionError::InvalidState`] on a failed result.
    pub fn into_value(self) -> Result<T, CollectionError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure => Err(CollectionError::invalid_state(
                "value requested from a failed search result",
            )),
        }
    }

    /// Convert into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure => None,
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> FindResult<&T> {
        match self {
            Self::Success(value) => FindResult::Success(value),
            Self::Failure => FindResult::Failure,
        }
    }

    /// Map the found value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FindResult<U> {
        match self {
            Self::Success(value) => FindResult::Success(f(value)),
            Self::Failure => FindResult::Failure,
        }
    }

    /// The found value, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }
}

impl<T> From<Option<T>> for FindResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure,
        }
    }
}

impl<T> From<FindResult<T>> for Option<T> {
    fn from(value: FindResult<T>) -> Self {
        value.into_option()
    }
}
