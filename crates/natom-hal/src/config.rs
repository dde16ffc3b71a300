//! Device models defined in configuration files.
//!
//! A [`DeviceSpec`] carries the same constants a built-in model hard-codes.
//! It can be written in YAML or JSON:
//!
//! ```yaml
//! name: Fresnel
//! max_dimensionality: 2
//! max_atom_num: 25
//! max_radial_distance: 35.0
//! min_atom_distance: 5.0
//! channels:
//!   rydberg_global:
//!     kind: rydberg
//!     addressing: global
//!     max_abs_detuning: 50.0
//!     max_amp: 12.5
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::channel::{Addressing, Channel, ChannelMap, Raman, Rydberg};
use crate::device::DeviceModel;
use crate::error::{HalError, HalResult};
use crate::validate::DeviceLimits;

/// Channel family in a device file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Ground-Rydberg transition.
    Rydberg,
    /// Digital (hyperfine) transition.
    Raman,
}

/// One channel entry in a device file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Channel family.
    pub kind: ChannelKind,
    /// Global or local addressing.
    pub addressing: Addressing,
    /// Maximum absolute detuning in rad/µs.
    pub max_abs_detuning: f64,
    /// Maximum amplitude in rad/µs.
    pub max_amp: f64,
    /// Retarget time of a local channel in ns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retarget_time: Option<u32>,
    /// Atoms a local channel can target at once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_targets: Option<u32>,
}

impl ChannelSpec {
    fn build(&self) -> Channel {
        let (det, amp) = (self.max_abs_detuning, self.max_amp);
        let retarget = self.retarget_time.unwrap_or(Channel::DEFAULT_RETARGET_TIME);

        let channel = match (self.kind, self.addressing) {
            (ChannelKind::Rydberg, Addressing::Global) => Rydberg::global(det, amp),
            (ChannelKind::Rydberg, Addressing::Local) => Rydberg::local(det, amp, retarget),
            (ChannelKind::Raman, Addressing::Global) => Raman::global(det, amp),
            (ChannelKind::Raman, Addressing::Local) => Raman::local(det, amp, retarget),
        };

        match self.max_targets {
            Some(n) => channel.with_max_targets(n),
            None => channel,
        }
    }
}

/// Constants describing a device model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Device name.
    pub name: String,
    /// Dimensionality of atom positions (2 or 3).
    pub max_dimensionality: usize,
    /// Maximum number of atoms.
    pub max_atom_num: usize,
    /// Maximum distance from the array center in µm.
    pub max_radial_distance: f64,
    /// Minimum distance between atoms in µm.
    pub min_atom_distance: f64,
    /// Channels keyed by channel id.
    #[serde(default)]
    pub channels: BTreeMap<String, ChannelSpec>,
}

impl DeviceSpec {
    /// Parse a spec from YAML.
    pub fn from_yaml(source: &str) -> HalResult<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a spec from JSON.
    pub fn from_json(source: &str) -> HalResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a spec, choosing the format from the file extension.
    ///
    /// `.json` is read as JSON, anything else as YAML.
    pub fn parse(path: &Path, source: &str) -> HalResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(source),
            _ => Self::from_yaml(source),
        }
    }

    /// The array limits of this spec.
    pub fn limits(&self) -> DeviceLimits {
        DeviceLimits {
            max_dimensionality: self.max_dimensionality,
            max_atom_num: self.max_atom_num,
            max_radial_distance: self.max_radial_distance,
            min_atom_distance: self.min_atom_distance,
        }
    }

    /// Check the spec for unusable values.
    pub fn validate(&self) -> HalResult<()> {
        if self.name.trim().is_empty() {
            return Err(HalError::InvalidDeviceSpec("device name must not be empty".into()));
        }
        self.limits().check()?;
        for (id, ch) in &self.channels {
            if !ch.max_abs_detuning.is_finite() || ch.max_abs_detuning < 0.0 {
                return Err(HalError::InvalidDeviceSpec(format!(
                    "channel '{id}': max_abs_detuning must be a non-negative number"
                )));
            }
            if !ch.max_amp.is_finite() || ch.max_amp < 0.0 {
                return Err(HalError::InvalidDeviceSpec(format!(
                    "channel '{id}': max_amp must be a non-negative number"
                )));
            }
            if ch.max_targets == Some(0) {
                return Err(HalError::InvalidDeviceSpec(format!(
                    "channel '{id}': max_targets must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

/// A device model built from a validated [`DeviceSpec`].
#[derive(Debug, Clone)]
pub struct ConfiguredDevice {
    spec: DeviceSpec,
    channels: ChannelMap,
}

impl ConfiguredDevice {
    /// Validate `spec` and build the model.
    pub fn new(spec: DeviceSpec) -> HalResult<Self> {
        spec.validate()?;
        let channels = spec
            .channels
            .iter()
            .map(|(id, ch)| (id.clone(), ch.build()))
            .collect();

        debug!(
            "Loaded device '{}' with {} channels",
            spec.name,
            spec.channels.len()
        );

        Ok(Self { spec, channels })
    }

    /// The spec this model was built from.
    pub fn spec(&self) -> &DeviceSpec {
        &self.spec
    }
}

impl DeviceModel for ConfiguredDevice {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn max_dimensionality(&self) -> usize {
        self.spec.max_dimensionality
    }

    fn max_atom_num(&self) -> usize {
        self.spec.max_atom_num
    }

    fn max_radial_distance(&self) -> f64 {
        self.spec.max_radial_distance
    }

    fn min_atom_distance(&self) -> f64 {
        self.spec.min_atom_distance
    }

    fn channels(&self) -> &ChannelMap {
        &self.channels
    }
}
