//! Error type shared by every Tabula collection.
//!
//! Validation failures are reported through [`CollectionError`]; internal
//! preconditions on unchecked helpers are `debug_assert!`s and never
//! surface here.

use std::error::Error;
use std::fmt;

use crate::bounds::Bounds2D;

/// Errors returned by collection operations.
///
/// Every public operation validates its arguments before mutating, so an
/// `Err` always means the collection is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// An argument has an illegal value: a negative dimension, an absent
    /// callback, a destination too small for the data, or an invalid
    /// configuration.
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// An index or sector lies outside the valid bounds of the source or
    /// destination.
    OutOfRange {
        /// Name of the offending argument.
        argument: &'static str,
        /// Human-readable description of the valid range.
        reason: String,
    },
    /// The operation is not valid in the current state: reading the value
    /// of a failed search, or advancing a cursor after the list changed.
    InvalidState {
        /// Description of the state conflict.
        reason: String,
    },
    /// A buffer of the requested shape could not be allocated, or its cell
    /// count does not fit in `usize`.
    OutOfMemory {
        /// The capacity that was requested.
        requested: Bounds2D,
    },
    /// The target collection does not support the required operation.
    Unsupported {
        /// Description of the missing capability.
        reason: String,
    },
}

impl CollectionError {
    /// Shorthand for [`CollectionError::InvalidArgument`].
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CollectionError::OutOfRange`].
    pub fn out_of_range(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            argument,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CollectionError::InvalidState`].
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, reason } => {
                write!(f, "invalid argument '{argument}': {reason}")
            }
            Self::OutOfRange { argument, reason } => {
                write!(f, "argument '{argument}' out of range: {reason}")
            }
            Self::InvalidState { reason } => write!(f, "invalid state: {reason}"),
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: cannot allocate capacity {requested}")
            }
            Self::Unsupported { reason } => write!(f, "unsupported operation: {reason}"),
        }
    }
}

impl Error for CollectionError {}
