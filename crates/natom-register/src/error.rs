//! Error types for the register crate.

use thiserror::Error;

/// Errors that can occur while building a register.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RegisterError {
    /// Two qubits were given the same label.
    #[error("Duplicate qubit label: '{0}'")]
    DuplicateLabel(String),

    /// A qubit label is the empty string.
    #[error("Qubit labels must not be empty")]
    EmptyLabel,

    /// Coordinates are neither 2D nor 3D.
    #[error("Qubit '{label}' has a {dim}D position; only 2D and 3D positions are supported")]
    UnsupportedDimension {
        /// Label of the offending qubit.
        label: String,
        /// Length of its coordinate vector.
        dim: usize,
    },

    /// Positions in the same register have different lengths.
    #[error("Qubit '{label}' has a {found}D position but the register is {expected}D")]
    DimensionMismatch {
        /// Label of the offending qubit.
        label: String,
        /// Dimensionality set by the first qubit.
        expected: usize,
        /// Dimensionality of the offending qubit.
        found: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("Qubit '{0}' has a non-finite coordinate")]
    NonFiniteCoordinate(String),

    /// Lattice spacing is not a positive finite number.
    #[error("Invalid lattice spacing: {0}")]
    InvalidSpacing(f64),

    /// Layout generator called with a zero-sized shape.
    #[error("Invalid layout shape: {0}")]
    InvalidShape(String),

    /// Operation requires a register of a different dimensionality.
    #[error("{operation} requires a {expected}D register, got {found}D")]
    UnsupportedOperation {
        /// Name of the operation.
        operation: &'static str,
        /// Dimensionality the operation works on.
        expected: usize,
        /// Dimensionality of the register.
        found: usize,
    },
}

/// Result type for register operations.
pub type RegisterResult<T> = Result<T, RegisterError>;
