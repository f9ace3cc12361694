//! Error Types - Tensoric Core Error Handling
//!
//! Provides the error taxonomy for all operations within the Tensoric
//! engine: allocation failures, shape and broadcast violations, rank and
//! dimension mismatches, and empty-input contract breaches.
//!
//! Every error is detected synchronously at the call that violates the
//! contract; no operation partially mutates shared state before failing.
//! IEEE floating-point special values (NaN, infinity) propagate through
//! arithmetic and are never reported as errors.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for Tensoric operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Storage request cannot be satisfied.
    #[error("Allocation failed: requested {size} bytes")]
    AllocationFailed {
        /// The requested size in bytes.
        size: usize,
    },

    /// Reshape or view element-count mismatch.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The actual shape.
        actual: Vec<usize>,
    },

    /// Out-of-bounds logical index.
    #[error("Index out of bounds: index {index} for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// The size of the dimension.
        size: usize,
    },

    /// Broadcasting failed between two shapes.
    #[error("Cannot broadcast shapes {shape1:?} and {shape2:?}")]
    BroadcastError {
        /// The first shape.
        shape1: Vec<usize>,
        /// The second shape.
        shape2: Vec<usize>,
    },

    /// Wrong dimensionality for an operation requiring a specific rank.
    #[error("Rank mismatch: expected rank {expected}, got rank {actual}")]
    RankMismatch {
        /// The required rank.
        expected: usize,
        /// The rank that was supplied.
        actual: usize,
    },

    /// Contraction dimension mismatch (matmul, dot).
    #[error("Dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch {
        /// Contracted extent of the left operand.
        lhs: usize,
        /// Contracted extent of the right operand.
        rhs: usize,
    },

    /// Reduction over zero elements where no identity applies.
    #[error("Cannot reduce an empty array with {op}")]
    EmptyReduction {
        /// The reduction that was attempted.
        op: &'static str,
    },

    /// Zero-length transform input.
    #[error("Transform input is empty")]
    EmptyInput,

    /// Invalid axis index.
    #[error("Invalid axis: {axis} for array with {ndim} dimensions")]
    InvalidAxis {
        /// The invalid axis (possibly negative).
        axis: i64,
        /// Number of dimensions in the array.
        ndim: usize,
    },

    /// Invalid operation for the given arguments.
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation is invalid.
        message: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for Tensoric operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Creates a new broadcast error.
    #[must_use]
    pub fn broadcast(shape1: &[usize], shape2: &[usize]) -> Self {
        Self::BroadcastError {
            shape1: shape1.to_vec(),
            shape2: shape2.to_vec(),
        }
    }

    /// Creates a new rank mismatch error.
    #[must_use]
    pub const fn rank_mismatch(expected: usize, actual: usize) -> Self {
        Self::RankMismatch { expected, actual }
    }

    /// Creates a new invalid operation error.
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::shape_mismatch(&[2, 3], &[2, 4]);
        assert!(err.to_string().contains("Shape mismatch"));

        let err = Error::DimensionMismatch { lhs: 3, rhs: 4 };
        assert!(err.to_string().contains("3 vs 4"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::EmptyInput;
        let err2 = Error::EmptyInput;
        assert_eq!(err1, err2);

        assert_ne!(
            Error::EmptyReduction { op: "max" },
            Error::EmptyReduction { op: "min" }
        );
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            Error::rank_mismatch(2, 3),
            Error::RankMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert_eq!(
            Error::broadcast(&[2], &[3]),
            Error::BroadcastError {
                shape1: vec![2],
                shape2: vec![3]
            }
        );
    }
}
