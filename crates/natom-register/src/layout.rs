//! Regular layout generators.
//!
//! All generated registers are centered on the origin, with qubits numbered
//! row by row starting from the bottom-left atom.

use crate::error::{RegisterError, RegisterResult};
use crate::position::Position;
use crate::register::Register;

impl Register {
    /// A `side` × `side` square array.
    pub fn square(side: usize, spacing: f64, prefix: Option<&str>) -> RegisterResult<Self> {
        if side == 0 {
            return Err(RegisterError::InvalidShape(
                "a square array needs at least one atom per side".into(),
            ));
        }
        Self::rectangle(side, side, spacing, prefix)
    }

    /// A `rows` × `columns` rectangular array.
    pub fn rectangle(
        rows: usize,
        columns: usize,
        spacing: f64,
        prefix: Option<&str>,
    ) -> RegisterResult<Self> {
        check_shape(rows, columns)?;
        check_spacing(spacing)?;

        let coords = (0..rows).flat_map(|y| {
            (0..columns).map(move |x| Position::new(vec![x as f64 * spacing, y as f64 * spacing]))
        });
        Self::from_coordinates(coords, true, prefix)
    }

    /// A triangular lattice with `rows` rows of `atoms_per_row` atoms.
    ///
    /// Odd rows are shifted by half a spacing so every atom sits exactly
    /// `spacing` away from its nearest neighbours.
    pub fn triangular_lattice(
        rows: usize,
        atoms_per_row: usize,
        spacing: f64,
        prefix: Option<&str>,
    ) -> RegisterResult<Self> {
        check_shape(rows, atoms_per_row)?;
        check_spacing(spacing)?;

        let row_height = 3f64.sqrt() / 2.0;
        let coords = (0..rows).flat_map(|y| {
            let shift = if y % 2 == 1 { 0.5 } else { 0.0 };
            (0..atoms_per_row).map(move |x| {
                Position::new(vec![
                    (x as f64 + shift) * spacing,
                    y as f64 * row_height * spacing,
                ])
            })
        });
        Self::from_coordinates(coords, true, prefix)
    }
}

fn check_shape(rows: usize, columns: usize) -> RegisterResult<()> {
    if rows == 0 || columns == 0 {
        return Err(RegisterError::InvalidShape(format!(
            "{rows} rows x {columns} columns"
        )));
    }
    Ok(())
}

fn check_spacing(spacing: f64) -> RegisterResult<()> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(RegisterError::InvalidSpacing(spacing));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_pairwise(reg: &Register) -> f64 {
        let pos = reg.positions();
        let mut min = f64::INFINITY;
        for i in 0..pos.len() {
            for j in (i + 1)..pos.len() {
                min = min.min(pos[i].distance(&pos[j]));
            }
        }
        min
    }

    #[test]
    fn test_square() {
        let reg = Register::square(3, 4.0, Some("q")).unwrap();
        assert_eq!(reg.len(), 9);
        // Middle atom of a centered 3x3 array sits on the origin.
        assert_eq!(reg.get("q4").unwrap().norm(), 0.0);
        assert!((min_pairwise(&reg) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_is_centered() {
        let reg = Register::rectangle(2, 3, 5.0, None).unwrap();
        assert_eq!(reg.len(), 6);
        let c = reg.centroid().unwrap();
        assert!(c.iter().all(|v| v.abs() < 1e-9));
        assert_eq!(reg.get("0"), Some(&Position::from([-5.0, -2.5])));
    }

    #[test]
    fn test_triangular_lattice_spacing() {
        let reg = Register::triangular_lattice(3, 4, 6.0, None).unwrap();
        assert_eq!(reg.len(), 12);
        assert!((min_pairwise(&reg) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_shape() {
        assert!(matches!(
            Register::square(0, 4.0, None),
            Err(RegisterError::InvalidShape(_))
        ));
        assert!(matches!(
            Register::rectangle(2, 0, 4.0, None),
            Err(RegisterError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_invalid_spacing() {
        assert!(matches!(
            Register::square(2, 0.0, None),
            Err(RegisterError::InvalidSpacing(_))
        ));
        assert!(matches!(
            Register::triangular_lattice(2, 2, f64::NAN, None),
            Err(RegisterError::InvalidSpacing(_))
        ));
    }
}
