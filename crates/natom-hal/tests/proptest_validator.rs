//! Property-based tests for the trap-array validator.

use natom_hal::{ConstraintViolation, DeviceLimits, Position, check_array};
use proptest::prelude::*;

fn limits() -> DeviceLimits {
    DeviceLimits {
        max_dimensionality: 2,
        max_atom_num: 20,
        max_radial_distance: 50.0,
        min_atom_distance: 4.0,
    }
}

fn arb_position() -> impl Strategy<Value = Position> {
    (-80.0f64..80.0, -80.0f64..80.0).prop_map(Position::from)
}

proptest! {
    /// One atom over capacity is always a capacity violation.
    #[test]
    fn over_capacity_always_reported(
        atoms in prop::collection::vec(arb_position(), 21..=21)
    ) {
        prop_assert_eq!(
            check_array(&atoms, &limits()),
            Err(ConstraintViolation::TooManyAtoms { max: 20, found: 21 })
        );
    }

    /// A single atom passes exactly when it lies within the radius.
    #[test]
    fn single_atom_radius(p in arb_position()) {
        let result = check_array(std::slice::from_ref(&p), &limits());
        prop_assert_eq!(result.is_ok(), p.norm() <= 50.0);
    }

    /// Validation agrees with a direct evaluation of the four rules.
    #[test]
    fn agrees_with_direct_evaluation(
        atoms in prop::collection::vec(arb_position(), 0..8)
    ) {
        let mut closest = f64::INFINITY;
        for (i, a) in atoms.iter().enumerate() {
            for b in &atoms[i + 1..] {
                closest = closest.min(a.distance(b));
            }
        }
        let spaced = closest >= 4.0;
        let inside = atoms.iter().all(|p| p.norm() <= 50.0);

        let result = check_array(&atoms, &limits());
        prop_assert_eq!(result.is_ok(), spaced && inside);
        if !spaced {
            let is_spacing = matches!(result, Err(ConstraintViolation::AtomsTooClose { .. }));
            prop_assert!(is_spacing);
        }
    }

    /// Validation is deterministic and leaves its input untouched.
    #[test]
    fn deterministic(atoms in prop::collection::vec(arb_position(), 0..8)) {
        let before = atoms.clone();
        let first = check_array(&atoms, &limits());
        let second = check_array(&atoms, &limits());
        prop_assert_eq!(first, second);
        prop_assert_eq!(atoms, before);
    }
}
