//! Control channels of a neutral-atom device.
//!
//! A [`Channel`] drives one electronic transition ([`Basis`]) either on the
//! whole array at once ([`Addressing::Global`]) or on a limited number of
//! atoms at a time ([`Addressing::Local`]). Devices expose their channels as
//! a [`ChannelMap`] keyed by channel id (e.g. `"rydberg_global"`).
//!
//! Channels are descriptors only. Pulse scheduling is out of scope here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Channels available on a device, keyed by channel id.
pub type ChannelMap = BTreeMap<String, Channel>;

/// Electronic transition addressed by a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Ground to Rydberg state transition (analog control).
    #[serde(rename = "ground-rydberg")]
    GroundRydberg,
    /// Hyperfine ground states transition (digital control).
    #[serde(rename = "digital")]
    Digital,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::GroundRydberg => write!(f, "ground-rydberg"),
            Basis::Digital => write!(f, "digital"),
        }
    }
}

/// How a channel reaches the atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Addressing {
    /// Acts on every atom simultaneously.
    Global,
    /// Targets a subset of atoms, retargeting between pulses.
    Local,
}

impl fmt::Display for Addressing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Addressing::Global => write!(f, "Global"),
            Addressing::Local => write!(f, "Local"),
        }
    }
}

/// A control channel descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel type (`"Rydberg"`, `"Raman"`).
    pub name: String,
    /// Transition driven by this channel.
    pub basis: Basis,
    /// Global or local addressing.
    pub addressing: Addressing,
    /// Maximum absolute detuning in rad/µs.
    pub max_abs_detuning: f64,
    /// Maximum Rabi frequency amplitude in rad/µs.
    pub max_amp: f64,
    /// Time to retarget a local channel, in ns. `None` for global channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retarget_time: Option<u32>,
    /// Atoms a local channel can address at once. `None` for global channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_targets: Option<u32>,
}

impl Channel {
    /// Default retarget time of local channels, in ns.
    pub const DEFAULT_RETARGET_TIME: u32 = 220;

    fn global(name: &str, basis: Basis, max_abs_detuning: f64, max_amp: f64) -> Self {
        Self {
            name: name.into(),
            basis,
            addressing: Addressing::Global,
            max_abs_detuning,
            max_amp,
            retarget_time: None,
            max_targets: None,
        }
    }

    fn local(
        name: &str,
        basis: Basis,
        max_abs_detuning: f64,
        max_amp: f64,
        retarget_time: u32,
    ) -> Self {
        Self {
            name: name.into(),
            basis,
            addressing: Addressing::Local,
            max_abs_detuning,
            max_amp,
            retarget_time: Some(retarget_time),
            max_targets: Some(1),
        }
    }

    /// Set how many atoms a local channel can target at once.
    ///
    /// Has no effect on global channels.
    pub fn with_max_targets(mut self, max_targets: u32) -> Self {
        if self.addressing == Addressing::Local {
            self.max_targets = Some(max_targets);
        }
        self
    }

    /// Whether this channel addresses the whole array.
    pub fn is_global(&self) -> bool {
        self.addressing == Addressing::Global
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}(Max Absolute Detuning: {} rad/µs, Max Amplitude: {} rad/µs",
            self.name, self.addressing, self.max_abs_detuning, self.max_amp
        )?;
        if let Some(t) = self.retarget_time {
            write!(f, ", Target time: {t} ns")?;
        }
        if let Some(n) = self.max_targets.filter(|&n| n > 1) {
            write!(f, ", Max targets: {n}")?;
        }
        write!(f, ")")
    }
}

/// Rydberg channels (`ground-rydberg` basis).
pub struct Rydberg;

impl Rydberg {
    /// Global Rydberg channel.
    pub fn global(max_abs_detuning: f64, max_amp: f64) -> Channel {
        Channel::global("Rydberg", Basis::GroundRydberg, max_abs_detuning, max_amp)
    }

    /// Local Rydberg channel addressing one atom at a time.
    pub fn local(max_abs_detuning: f64, max_amp: f64, retarget_time: u32) -> Channel {
        Channel::local(
            "Rydberg",
            Basis::GroundRydberg,
            max_abs_detuning,
            max_amp,
            retarget_time,
        )
    }
}

/// Raman channels (`digital` basis).
pub struct Raman;

impl Raman {
    /// Global Raman channel.
    pub fn global(max_abs_detuning: f64, max_amp: f64) -> Channel {
        Channel::global("Raman", Basis::Digital, max_abs_detuning, max_amp)
    }

    /// Local Raman channel addressing one atom at a time.
    pub fn local(max_abs_detuning: f64, max_amp: f64, retarget_time: u32) -> Channel {
        Channel::local("Raman", Basis::Digital, max_abs_detuning, max_amp, retarget_time)
    }
}
