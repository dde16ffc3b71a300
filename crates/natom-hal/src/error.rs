//! Error types for the HAL crate.

use natom_register::RegisterError;
use thiserror::Error;

/// A trap-array rule broken by a register.
///
/// Only the first violation in check order is ever reported: capacity,
/// dimensionality, minimum spacing, radial distance.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConstraintViolation {
    /// More atoms than the device can trap.
    #[error("Too many atoms in the array: got {found}, accepts at most {max} atoms")]
    TooManyAtoms {
        /// Device capacity.
        max: usize,
        /// Number of atoms in the register.
        found: usize,
    },

    /// Positions are not of the device's dimensionality.
    #[error("All qubit positions must be {expected}D vectors, found a {found}D position")]
    WrongDimensionality {
        /// Dimensionality required by the device.
        expected: usize,
        /// Length of the first offending position.
        found: usize,
    },

    /// Two atoms sit closer than the device allows.
    #[error(
        "Qubit positions don't respect the minimal distance of {min_distance} µm between atoms \
         (closest pair is {found} µm apart)"
    )]
    AtomsTooClose {
        /// Device minimum spacing in µm.
        min_distance: f64,
        /// Smallest pairwise distance in the register.
        found: f64,
    },

    /// An atom lies beyond the device's radial limit.
    #[error(
        "All qubits must be at most {max_radial_distance} µm away from the center of the array \
         (farthest is {found} µm)"
    )]
    OutsideRadius {
        /// Device radial limit in µm.
        max_radial_distance: f64,
        /// Largest distance from the center in the register.
        found: f64,
    },
}

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Qubit data is neither a label → coordinates mapping nor a register.
    #[error("Unsupported qubit data: expected a mapping of labels to coordinates or a register, found {0}")]
    UnsupportedQubitData(String),

    /// Qubit data could not be turned into a register.
    #[error("Invalid register: {0}")]
    Register(#[from] RegisterError),

    /// The register breaks one of the device's array rules.
    #[error("{0}")]
    Constraint(#[from] ConstraintViolation),

    /// No device registered under this name.
    #[error("Unknown device: '{0}'")]
    UnknownDevice(String),

    /// A device specification has inconsistent limits.
    #[error("Invalid device specification: {0}")]
    InvalidDeviceSpec(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl HalError {
    /// Whether this error is a broken array rule.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }

    /// Whether the qubit data had an unsupported shape.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::UnsupportedQubitData(_))
    }

    /// The broken array rule, if any.
    pub fn violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Constraint(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
