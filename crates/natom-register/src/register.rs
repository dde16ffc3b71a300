//! Labelled qubit positions.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{RegisterError, RegisterResult};
use crate::position::Position;

/// A validated set of labelled atom positions.
///
/// Every label is unique and non-empty, every position is finite, and all
/// positions share the same dimensionality (2 or 3). Insertion order is kept;
/// it is the order in which devices see the atoms.
///
/// A register is immutable once built. Transformations such as
/// [`Register::centered`] or [`Register::rotate`] return a new register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegisterRepr", into = "RegisterRepr")]
pub struct Register {
    qubits: Vec<(String, Position)>,
    dim: Option<usize>,
}

/// Serialized form: `{"qubits": {"q0": [0.0, 0.0], ...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegisterRepr {
    qubits: BTreeMap<String, Position>,
}

impl TryFrom<RegisterRepr> for Register {
    type Error = RegisterError;

    fn try_from(repr: RegisterRepr) -> RegisterResult<Self> {
        Register::new(repr.qubits)
    }
}

impl From<Register> for RegisterRepr {
    fn from(register: Register) -> Self {
        Self {
            qubits: register.qubits.into_iter().collect(),
        }
    }
}

impl Register {
    /// Build a register from `(label, position)` pairs.
    pub fn new<I, K, P>(qubits: I) -> RegisterResult<Self>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<Position>,
    {
        let mut seen = FxHashSet::default();
        let mut entries = Vec::new();
        let mut dim = None;

        for (label, position) in qubits {
            let label = label.into();
            let position = position.into();

            if label.is_empty() {
                return Err(RegisterError::EmptyLabel);
            }
            if !seen.insert(label.clone()) {
                return Err(RegisterError::DuplicateLabel(label));
            }
            if !matches!(position.dim(), 2 | 3) {
                return Err(RegisterError::UnsupportedDimension {
                    label,
                    dim: position.dim(),
                });
            }
            if !position.is_finite() {
                return Err(RegisterError::NonFiniteCoordinate(label));
            }
            match dim {
                None => dim = Some(position.dim()),
                Some(expected) if expected != position.dim() => {
                    return Err(RegisterError::DimensionMismatch {
                        label,
                        expected,
                        found: position.dim(),
                    });
                }
                Some(_) => {}
            }

            entries.push((label, position));
        }

        Ok(Self {
            qubits: entries,
            dim,
        })
    }

    /// Build a register from bare coordinates, labelling qubit `i` as
    /// `{prefix}{i}`.
    ///
    /// When `center` is set the centroid of the coordinates is moved to the
    /// origin.
    pub fn from_coordinates<I, P>(coords: I, center: bool, prefix: Option<&str>) -> RegisterResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let prefix = prefix.unwrap_or("");
        let register = Self::new(
            coords
                .into_iter()
                .enumerate()
                .map(|(i, p)| (format!("{prefix}{i}"), p)),
        )?;
        Ok(if center { register.centered() } else { register })
    }

    /// Number of qubits.
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Whether the register holds no qubits.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Shared dimensionality of the positions, `None` for an empty register.
    pub fn dimensionality(&self) -> Option<usize> {
        self.dim
    }

    /// Position of the qubit with the given label.
    pub fn get(&self, label: &str) -> Option<&Position> {
        self.qubits
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| p)
    }

    /// Whether a qubit with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.qubits.iter().map(|(l, _)| l.as_str())
    }

    /// Positions in insertion order.
    pub fn positions(&self) -> Vec<Position> {
        self.qubits.iter().map(|(_, p)| p.clone()).collect()
    }

    /// Iterate over `(label, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Position)> + '_ {
        self.qubits.iter().map(|(l, p)| (l.as_str(), p))
    }

    /// Copy of the qubits as a label-sorted map.
    pub fn to_map(&self) -> BTreeMap<String, Position> {
        self.qubits.iter().cloned().collect()
    }

    /// Centroid of the positions, `None` for an empty register.
    pub fn centroid(&self) -> Option<Vec<f64>> {
        let dim = self.dim?;
        let n = self.qubits.len() as f64;
        let mut sum = vec![0.0; dim];
        for (_, p) in &self.qubits {
            for (acc, c) in sum.iter_mut().zip(p.coords()) {
                *acc += c;
            }
        }
        Some(sum.into_iter().map(|s| s / n).collect())
    }

    /// Copy of this register with its centroid moved to the origin.
    pub fn centered(&self) -> Self {
        let Some(centroid) = self.centroid() else {
            return self.clone();
        };
        Self {
            qubits: self
                .qubits
                .iter()
                .map(|(l, p)| (l.clone(), p.translated(&centroid)))
                .collect(),
            dim: self.dim,
        }
    }

    /// Rotate a planar register counter-clockwise about the origin.
    pub fn rotate(&self, degrees: f64) -> RegisterResult<Self> {
        match self.dim {
            None => return Ok(self.clone()),
            Some(2) => {}
            Some(found) => {
                return Err(RegisterError::UnsupportedOperation {
                    operation: "rotate",
                    expected: 2,
                    found,
                });
            }
        }

        let (sin, cos) = degrees.to_radians().sin_cos();
        let qubits = self
            .qubits
            .iter()
            .map(|(l, p)| {
                let [x, y] = [p.coords()[0], p.coords()[1]];
                (l.clone(), Position::new(vec![cos * x - sin * y, sin * x + cos * y]))
            })
            .collect();

        Ok(Self {
            qubits,
            dim: self.dim,
        })
    }
}

impl<'a> IntoIterator for &'a Register {
    type Item = &'a (String, Position);
    type IntoIter = std::slice::Iter<'a, (String, Position)>;

    fn into_iter(self) -> Self::IntoIter {
        self.qubits.iter()
    }
}
