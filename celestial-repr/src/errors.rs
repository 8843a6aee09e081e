//! Error types for representation algebra.
//!
//! A single error type, [`ReprError`], covers the ways a representation
//! operation can be refused:
//!
//! | Variant | Raised when | Recoverable? |
//! |---------|-------------|--------------|
//! | [`TypeConstraint`](ReprError::TypeConstraint) | An operand or requested return type is not a representation | No |
//! | [`DimensionMismatch`](ReprError::DimensionMismatch) | A coordinate tuple has the wrong number of components | No |
//! | [`MathError`](ReprError::MathError) | A guarded numeric operation hits a degenerate input | No |
//! | [`UnknownSystem`](ReprError::UnknownSystem) | A coordinate-system tag cannot be parsed | No |
//!
//! Statically typed code rarely sees `TypeConstraint`: the [`Representation`](crate::Representation)
//! bound rejects bad types at compile time. It exists for the run-time
//! [`DynRepresentation`](crate::DynRepresentation) layer.
//!
//! ```
//! use celestial_repr::{MathErrorKind, ReprError};
//!
//! fn safe_scale(value: f64, norm: f64) -> Result<f64, ReprError> {
//!     if norm == 0.0 {
//!         return Err(ReprError::math_error(
//!             "safe_scale",
//!             MathErrorKind::DivisionByZero,
//!             "norm is zero",
//!         ));
//!     }
//!     Ok(value / norm)
//! }
//! ```

use crate::kind::CoordinateSystem;
use thiserror::Error;

/// Classification of numerical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Attempted division by zero (e.g. normalizing the zero vector).
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
}

/// Unified error type for representation construction and algebra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReprError {
    /// An operand or return type does not satisfy the representation capability.
    #[error("Type constraint violated in {operation}: expected {expected}, found {found}")]
    TypeConstraint {
        operation: String,
        expected: String,
        found: String,
    },

    /// A coordinate tuple does not match the dimension of its system.
    #[error("Dimension mismatch for {system}: expected {expected} components, found {found}")]
    DimensionMismatch {
        system: CoordinateSystem,
        expected: usize,
        found: usize,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A coordinate-system name that no representation answers to.
    #[error("Unknown coordinate system: {name}")]
    UnknownSystem { name: String },
}

/// Convenience alias for `Result<T, ReprError>`.
pub type ReprResult<T> = Result<T, ReprError>;

impl ReprError {
    /// Creates a [`TypeConstraint`](Self::TypeConstraint) error.
    pub fn type_constraint(operation: &str, expected: &str, found: impl Into<String>) -> Self {
        Self::TypeConstraint {
            operation: operation.to_string(),
            expected: expected.to_string(),
            found: found.into(),
        }
    }

    /// Creates a [`DimensionMismatch`](Self::DimensionMismatch) error.
    pub fn dimension_mismatch(system: CoordinateSystem, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            system,
            expected,
            found,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`UnknownSystem`](Self::UnknownSystem) error.
    pub fn unknown_system(name: impl Into<String>) -> Self {
        Self::UnknownSystem { name: name.into() }
    }

    /// Returns `true` for type-capability failures, as opposed to numeric ones.
    pub fn is_type_constraint(&self) -> bool {
        matches!(
            self,
            Self::TypeConstraint { .. } | Self::DimensionMismatch { .. } | Self::UnknownSystem { .. }
        )
    }
}
