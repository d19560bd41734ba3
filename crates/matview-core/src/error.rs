//! Error types for view construction and traversal.
//!
//! Every constructor in this crate validates its shape and selector
//! parameters up front and reports failures through [`ViewError`]. Nothing
//! is deferred to the first call of [`next`](crate::view::Traverse::next).

use thiserror::Error;

/// Errors that can occur while building or driving a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A position lies outside the parent's current extent.
    ///
    /// Raised for diagonal indices, row/column bounds of contiguous views
    /// and every entry of an index selector.
    #[error("{what} {index} out of bounds for extent {extent}")]
    OutOfBounds {
        /// Which quantity was out of range (e.g. "row end", "diagonal")
        what: String,
        /// The offending value
        index: i64,
        /// The extent it was checked against
        extent: usize,
    },

    /// The requested view is incompatible with the parent's shape.
    ///
    /// Raised for instance when a diagonal is requested on a vector or a
    /// sub-vector on a matrix.
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// Description of the incompatibility
        reason: String,
    },

    /// An index selector could not be represented as exact positions.
    ///
    /// Raised by the validated conversions on
    /// [`IndexSelector`](crate::types::IndexSelector) for negative,
    /// fractional or non-finite input values.
    #[error("Invalid index selector at entry {entry}: {reason}")]
    InvalidSelector {
        /// Position of the rejected value within the input sequence
        entry: usize,
        /// Why it was rejected
        reason: String,
    },

    /// A buffer handed to an access helper has the wrong length.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length or shape
        expected: String,
        /// Actual length or shape
        actual: String,
    },

    /// `next()` was called more than `n_elem` times since the last `reset()`.
    #[error("Traversal exhausted: view has {n_elem} elements and no reset occurred")]
    ProtocolMisuse {
        /// Number of elements in the view
        n_elem: usize,
    },
}

impl ViewError {
    /// Create an OutOfBounds error.
    pub fn out_of_bounds<S, I>(what: S, index: I, extent: usize) -> Self
    where
        S: Into<String>,
        I: TryInto<i64>,
    {
        Self::OutOfBounds {
            what: what.into(),
            index: index.try_into().unwrap_or(i64::MAX),
            extent,
        }
    }

    /// Create an InvalidShape error with a custom reason.
    pub fn invalid_shape<S: Into<String>>(reason: S) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }

    /// Create an InvalidSelector error for the given input entry.
    pub fn invalid_selector<S: Into<String>>(entry: usize, reason: S) -> Self {
        Self::InvalidSelector {
            entry,
            reason: reason.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a ProtocolMisuse error for a view of `n_elem` elements.
    pub fn protocol_misuse(n_elem: usize) -> Self {
        Self::ProtocolMisuse { n_elem }
    }
}

/// Result type alias for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
