//! Trap-array validation.
//!
//! [`check_array`] is the single validation routine shared by every device
//! model. It checks, in order:
//!
//! 1. atom count against `max_atom_num`
//! 2. position length against `max_dimensionality`
//! 3. smallest pairwise distance against `min_atom_distance` (two atoms or more)
//! 4. largest distance from the center against `max_radial_distance`
//!
//! Both distance bounds are inclusive. The first broken rule is returned.

use natom_register::Position;
use serde::{Deserialize, Serialize};

use crate::error::{ConstraintViolation, HalError, HalResult};

/// Geometric and capacity limits of a trap array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceLimits {
    /// Dimensionality of atom positions (2 or 3).
    pub max_dimensionality: usize,
    /// Maximum number of atoms that can be trapped simultaneously.
    pub max_atom_num: usize,
    /// Maximum distance of an atom from the array center, in µm.
    pub max_radial_distance: f64,
    /// Minimum distance between two atoms, in µm.
    pub min_atom_distance: f64,
}

impl DeviceLimits {
    /// Check that the limits themselves are usable.
    pub fn check(&self) -> HalResult<()> {
        if !matches!(self.max_dimensionality, 2 | 3) {
            return Err(HalError::InvalidDeviceSpec(format!(
                "max_dimensionality must be 2 or 3, got {}",
                self.max_dimensionality
            )));
        }
        if self.max_atom_num == 0 {
            return Err(HalError::InvalidDeviceSpec(
                "max_atom_num must be at least 1".into(),
            ));
        }
        if !self.max_radial_distance.is_finite() || self.max_radial_distance <= 0.0 {
            return Err(HalError::InvalidDeviceSpec(format!(
                "max_radial_distance must be a positive number, got {}",
                self.max_radial_distance
            )));
        }
        if !self.min_atom_distance.is_finite() || self.min_atom_distance < 0.0 {
            return Err(HalError::InvalidDeviceSpec(format!(
                "min_atom_distance must be a non-negative number, got {}",
                self.min_atom_distance
            )));
        }
        Ok(())
    }
}

/// Validate atom positions against device limits.
pub fn check_array(atoms: &[Position], limits: &DeviceLimits) -> Result<(), ConstraintViolation> {
    if atoms.len() > limits.max_atom_num {
        return Err(ConstraintViolation::TooManyAtoms {
            max: limits.max_atom_num,
            found: atoms.len(),
        });
    }

    if let Some(pos) = atoms.iter().find(|p| p.dim() != limits.max_dimensionality) {
        return Err(ConstraintViolation::WrongDimensionality {
            expected: limits.max_dimensionality,
            found: pos.dim(),
        });
    }

    if let Some(closest) = min_pairwise_distance(atoms) {
        if closest < limits.min_atom_distance {
            return Err(ConstraintViolation::AtomsTooClose {
                min_distance: limits.min_atom_distance,
                found: closest,
            });
        }
    }

    if let Some(farthest) = max_radial_distance(atoms) {
        if farthest > limits.max_radial_distance {
            return Err(ConstraintViolation::OutsideRadius {
                max_radial_distance: limits.max_radial_distance,
                found: farthest,
            });
        }
    }

    Ok(())
}

/// Smallest distance between any two atoms, `None` with fewer than two atoms.
pub fn min_pairwise_distance(atoms: &[Position]) -> Option<f64> {
    atoms
        .iter()
        .enumerate()
        .flat_map(|(i, a)| atoms[i + 1..].iter().map(move |b| a.distance(b)))
        .reduce(f64::min)
}

/// Largest distance of an atom from the array center, `None` when empty.
pub fn max_radial_distance(atoms: &[Position]) -> Option<f64> {
    atoms.iter().map(Position::norm).reduce(f64::max)
}
