//! Chadoq2 device specifications.

use std::sync::LazyLock;

use crate::channel::{ChannelMap, Raman, Rydberg};
use crate::device::DeviceModel;

static CHANNELS: LazyLock<ChannelMap> = LazyLock::new(|| {
    ChannelMap::from([
        ("rydberg_global".into(), Rydberg::global(50.0, 2.5)),
        ("rydberg_local".into(), Rydberg::local(50.0, 10.0, 100)),
        ("rydberg_local2".into(), Rydberg::local(50.0, 10.0, 100)),
        ("raman_local".into(), Raman::local(50.0, 10.0, 100)),
    ])
});

/// Chadoq2: 2D array of up to 100 atoms within 50 µm of the center, spaced
/// at least 4 µm apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chadoq2;

impl DeviceModel for Chadoq2 {
    fn name(&self) -> &str {
        "Chadoq2"
    }

    fn max_dimensionality(&self) -> usize {
        2
    }

    fn max_atom_num(&self) -> usize {
        100
    }

    fn max_radial_distance(&self) -> f64 {
        50.0
    }

    fn min_atom_distance(&self) -> f64 {
        4.0
    }

    fn channels(&self) -> &ChannelMap {
        &CHANNELS
    }
}
