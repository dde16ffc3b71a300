//! Tests for device construction against the built-in models.

use std::sync::Arc;

use natom_hal::{
    Basis, Chadoq2, ConstraintViolation, Device, DeviceModel, DeviceRegistry, HalError,
    MockDevice, Register, Rydberg,
};

fn violation(err: HalError) -> ConstraintViolation {
    match err {
        HalError::Constraint(v) => v,
        other => panic!("expected a constraint violation, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Chadoq2 scenario
// ---------------------------------------------------------------------------

#[test]
fn chadoq2_accepts_pair_at_min_distance() {
    let device = Device::new(Chadoq2, [("q0", [0.0, 0.0]), ("q1", [4.0, 0.0])]).unwrap();

    assert_eq!(device.name(), "Chadoq2");
    assert_eq!(device.max_dimensionality(), 2);
    assert_eq!(device.max_atom_num(), 100);
    assert_eq!(device.max_radial_distance(), 50.0);
    assert_eq!(device.min_atom_distance(), 4.0);
    assert_eq!(device.qubits().len(), 2);
}

#[test]
fn chadoq2_rejects_pair_below_min_distance() {
    let err = Device::new(Chadoq2, [("q0", [0.0, 0.0]), ("q1", [3.9, 0.0])]).unwrap_err();
    assert!(err.to_string().contains("4 µm"), "{err}");
    assert!(matches!(
        violation(err),
        ConstraintViolation::AtomsTooClose { min_distance, .. } if min_distance == 4.0
    ));
}

#[test]
fn chadoq2_rejects_atom_outside_radius() {
    let err = Device::new(Chadoq2, [("q0", [51.0, 0.0])]).unwrap_err();
    assert!(err.to_string().contains("50 µm"), "{err}");
    assert_eq!(
        violation(err),
        ConstraintViolation::OutsideRadius {
            max_radial_distance: 50.0,
            found: 51.0,
        }
    );
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn radial_bound_is_inclusive() {
    assert!(Device::new(Chadoq2, [("q0", [50.0, 0.0])]).is_ok());
    assert!(Device::new(Chadoq2, [("q0", [0.0, -50.0])]).is_ok());
    assert!(Device::new(Chadoq2, [("q0", [50.0 + 1e-9, 0.0])]).is_err());
}

#[test]
fn spacing_bound_is_inclusive() {
    assert!(Device::new(Chadoq2, [("a", [0.0, 10.0]), ("b", [0.0, 14.0])]).is_ok());
    let err = Device::new(Chadoq2, [("a", [0.0, 0.0]), ("b", [4.0 - 1e-9, 0.0])]).unwrap_err();
    assert!(matches!(violation(err), ConstraintViolation::AtomsTooClose { .. }));
}

#[test]
fn capacity_exceeded_by_one() {
    // Well spaced, but some atoms lie beyond the radius: capacity is still
    // what gets reported.
    let coords: Vec<_> = (0..101)
        .map(|i| [(i % 11) as f64 * 10.0, (i / 11) as f64 * 10.0])
        .collect();
    let reg = Register::from_coordinates(coords, false, Some("q")).unwrap();

    let err = Device::new(Chadoq2, reg).unwrap_err();
    assert_eq!(
        violation(err),
        ConstraintViolation::TooManyAtoms { max: 100, found: 101 }
    );
}

#[test]
fn capacity_at_limit_is_accepted() {
    let reg = Register::square(10, 4.5, Some("q")).unwrap();
    assert_eq!(reg.len(), 100);
    assert!(Device::new(Chadoq2, reg).is_ok());
}

#[test]
fn three_dimensional_positions_on_planar_device() {
    let err = Device::new(Chadoq2, [("q0", [0.0, 0.0, 0.0]), ("q1", [10.0, 0.0, 0.0])])
        .unwrap_err();
    assert_eq!(
        violation(err),
        ConstraintViolation::WrongDimensionality {
            expected: 2,
            found: 3,
        }
    );
}

#[test]
fn planar_positions_on_volume_device() {
    let err = Device::new(MockDevice, [("q0", [0.0, 0.0])]).unwrap_err();
    assert!(matches!(
        violation(err),
        ConstraintViolation::WrongDimensionality { expected: 3, found: 2 }
    ));
    assert!(Device::new(MockDevice, [("q0", [0.0, 0.0, 1000.0])]).is_ok());
}

#[test]
fn empty_register_is_accepted() {
    let reg = Register::new(Vec::<(String, Vec<f64>)>::new()).unwrap();
    let device = Device::new(Chadoq2, reg).unwrap();
    assert!(device.qubits().is_empty());
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

#[test]
fn chadoq2_channels() {
    let channels = Chadoq2.channels();
    assert_eq!(
        channels.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["raman_local", "rydberg_global", "rydberg_local", "rydberg_local2"]
    );
    assert_eq!(channels["rydberg_global"], Rydberg::global(50.0, 2.5));
    assert_eq!(channels["rydberg_local"], Rydberg::local(50.0, 10.0, 100));
    assert_eq!(channels["raman_local"].basis, Basis::Digital);
}

#[test]
fn supported_bases_ignore_duplicate_channels() {
    // Three ground-rydberg channels and one digital channel.
    let bases = Chadoq2.supported_bases();
    assert_eq!(
        bases.into_iter().collect::<Vec<_>>(),
        vec![Basis::GroundRydberg, Basis::Digital]
    );
}

#[test]
fn channels_are_stable_across_calls() {
    let device = Device::new(MockDevice, [("q0", [0.0, 0.0, 0.0])]).unwrap();
    assert!(std::ptr::eq(device.channels(), device.channels()));
    assert_eq!(device.channels(), MockDevice.channels());
    assert_eq!(device.supported_bases(), device.supported_bases());
}

#[test]
fn device_shares_model_across_threads() {
    let registry = DeviceRegistry::with_builtins();
    let device = Arc::new(registry.build("chadoq2", [("q0", [0.0, 0.0])]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let device = Arc::clone(&device);
            std::thread::spawn(move || device.supported_bases().len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 2);
    }
}

// ---------------------------------------------------------------------------
// Untyped input
// ---------------------------------------------------------------------------

#[test]
fn untyped_layout_validated_like_typed() {
    let model: Arc<dyn DeviceModel> = Arc::new(Chadoq2);
    let ok = serde_json::json!({"q0": [0, 0], "q1": [4, 0]});
    assert!(Device::from_value(Arc::clone(&model), ok).is_ok());

    let too_close = serde_json::json!({"qubits": {"q0": [0, 0], "q1": [3.9, 0]}});
    let err = Device::from_value(Arc::clone(&model), too_close).unwrap_err();
    assert!(err.is_constraint_violation());

    let err = Device::from_value(model, serde_json::json!([[0, 0]])).unwrap_err();
    assert!(err.is_type_error());
}
