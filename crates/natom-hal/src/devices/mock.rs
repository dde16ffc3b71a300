//! Permissive virtual device for prototyping layouts.

use std::sync::LazyLock;

use crate::channel::{ChannelMap, Raman, Rydberg};
use crate::device::DeviceModel;

static CHANNELS: LazyLock<ChannelMap> = LazyLock::new(|| {
    ChannelMap::from([
        ("rydberg_global".into(), Rydberg::global(1000.0, 200.0)),
        (
            "rydberg_local".into(),
            Rydberg::local(1000.0, 200.0, 0).with_max_targets(2000),
        ),
        ("raman_global".into(), Raman::global(1000.0, 200.0)),
        (
            "raman_local".into(),
            Raman::local(1000.0, 200.0, 0).with_max_targets(2000),
        ),
    ])
});

/// A 3D virtual device with loose limits and every channel kind.
///
/// Not backed by hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDevice;

impl DeviceModel for MockDevice {
    fn name(&self) -> &str {
        "MockDevice"
    }

    fn max_dimensionality(&self) -> usize {
        3
    }

    fn max_atom_num(&self) -> usize {
        2000
    }

    fn max_radial_distance(&self) -> f64 {
        1000.0
    }

    fn min_atom_distance(&self) -> f64 {
        1.0
    }

    fn channels(&self) -> &ChannelMap {
        &CHANNELS
    }
}
