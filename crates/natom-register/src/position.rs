//! Atom positions in the trap plane or volume.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coordinates of a single trapped atom, in µm, relative to the array center.
///
/// A `Position` is a plain coordinate vector; the register it belongs to is
/// responsible for checking that every position has the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(Vec<f64>);

impl Position {
    /// Create a position from raw coordinates.
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Self(coords.into())
    }

    /// Number of coordinates (2 for a planar array, 3 for a volume).
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Raw coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Euclidean distance from the array center.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Euclidean distance to another position.
    ///
    /// Extra coordinates of the longer vector are compared against zero, so
    /// the result is well defined even for mismatched dimensions.
    pub fn distance(&self, other: &Position) -> f64 {
        let n = self.dim().max(other.dim());
        (0..n)
            .map(|i| {
                let a = self.0.get(i).copied().unwrap_or(0.0);
                let b = other.0.get(i).copied().unwrap_or(0.0);
                (a - b) * (a - b)
            })
            .sum::<f64>()
            .sqrt()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    pub(crate) fn translated(&self, offset: &[f64]) -> Self {
        Self(
            self.0
                .iter()
                .zip(offset.iter().chain(std::iter::repeat(&0.0)))
                .map(|(c, o)| c - o)
                .collect(),
        )
    }
}

impl From<Vec<f64>> for Position {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Position {
    fn from(coords: [f64; N]) -> Self {
        Self(coords.to_vec())
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self(vec![x, y])
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self(vec![x, y, z])
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
