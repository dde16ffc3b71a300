//! Device models and validated device instances.
//!
//! A [`DeviceModel`] is the static description of a device: a name, four
//! [`DeviceLimits`] and a channel map. Adding a device means implementing the
//! six required methods with constants; the validation algorithm lives in the
//! provided [`DeviceModel::check_array`] and is never overridden.
//!
//! A [`Device`] pairs a model with a register that has been checked against
//! it. There is no way to obtain a `Device` whose register breaks the model's
//! rules:
//!
//! ```text
//!   QubitData ──→ Register ──→ check_array(limits) ──→ Device
//!   (mapping or     (labels,      (capacity, dim,        (immutable)
//!    register)       coords)       spacing, radius)
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use natom_register::{Position, Register};
use tracing::debug;

use crate::channel::{Basis, ChannelMap};
use crate::error::{ConstraintViolation, HalError, HalResult};
use crate::validate::{self, DeviceLimits};

/// Static description of a neutral-atom device.
///
/// # Contract
///
/// - Every method MUST return the same value on every call.
/// - `channels()` MUST be deterministic; built-in models keep it in a
///   `LazyLock` static.
pub trait DeviceModel: Send + Sync {
    /// Device name.
    fn name(&self) -> &str;

    /// Whether the device works with 2D or 3D arrays.
    fn max_dimensionality(&self) -> usize;

    /// Maximum number of atoms that can be trapped simultaneously.
    fn max_atom_num(&self) -> usize;

    /// Maximum allowed distance from the center of the array, in µm.
    fn max_radial_distance(&self) -> f64;

    /// Minimal allowed distance between atoms, in µm.
    fn min_atom_distance(&self) -> f64;

    /// Channels available on the device.
    fn channels(&self) -> &ChannelMap;

    /// Electronic transitions available for control and measurement.
    fn supported_bases(&self) -> BTreeSet<Basis> {
        self.channels().values().map(|ch| ch.basis).collect()
    }

    /// The four array limits as one value.
    fn limits(&self) -> DeviceLimits {
        DeviceLimits {
            max_dimensionality: self.max_dimensionality(),
            max_atom_num: self.max_atom_num(),
            max_radial_distance: self.max_radial_distance(),
            min_atom_distance: self.min_atom_distance(),
        }
    }

    /// Check atom positions against this device's limits.
    fn check_array(&self, atoms: &[Position]) -> Result<(), ConstraintViolation> {
        validate::check_array(atoms, &self.limits())
    }
}

impl fmt::Debug for dyn DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceModel")
            .field("name", &self.name())
            .field("limits", &self.limits())
            .field("channels", &self.channels().keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Qubit data accepted when building a [`Device`].
#[derive(Debug, Clone)]
pub enum QubitData {
    /// Label → coordinates pairs, not yet validated.
    Mapping(Vec<(String, Vec<f64>)>),
    /// An already-built register.
    Register(Register),
}

impl QubitData {
    /// Turn the data into a register.
    pub fn into_register(self) -> HalResult<Register> {
        match self {
            QubitData::Mapping(qubits) => Ok(Register::new(qubits)?),
            QubitData::Register(register) => Ok(register),
        }
    }
}

impl From<Register> for QubitData {
    fn from(register: Register) -> Self {
        QubitData::Register(register)
    }
}

impl From<Vec<(String, Vec<f64>)>> for QubitData {
    fn from(qubits: Vec<(String, Vec<f64>)>) -> Self {
        QubitData::Mapping(qubits)
    }
}

impl<K: Into<String>, V: Into<Vec<f64>>> From<BTreeMap<K, V>> for QubitData {
    fn from(qubits: BTreeMap<K, V>) -> Self {
        QubitData::Mapping(qubits.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Vec<f64>>, S> From<HashMap<K, V, S>> for QubitData {
    fn from(qubits: HashMap<K, V, S>) -> Self {
        QubitData::Mapping(qubits.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, const D: usize, const N: usize> From<[(K, [f64; D]); N]> for QubitData {
    fn from(qubits: [(K, [f64; D]); N]) -> Self {
        QubitData::Mapping(
            qubits
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_vec()))
                .collect(),
        )
    }
}

impl TryFrom<serde_json::Value> for QubitData {
    type Error = HalError;

    /// Interpret untyped data, e.g. a parsed layout file.
    ///
    /// Accepts `{label: [x, y, ...]}` or a serialized register
    /// `{"qubits": {label: [x, y, ...]}}`.
    fn try_from(value: serde_json::Value) -> HalResult<Self> {
        use serde_json::Value;

        let Value::Object(map) = value else {
            return Err(HalError::UnsupportedQubitData(json_kind(&value).into()));
        };

        if map.values().all(Value::is_array) {
            let mut qubits = Vec::with_capacity(map.len());
            for (label, coords) in map {
                let coords: Vec<f64> = serde_json::from_value(coords).map_err(|_| {
                    HalError::UnsupportedQubitData(format!(
                        "non-numeric coordinates for qubit '{label}'"
                    ))
                })?;
                qubits.push((label, coords));
            }
            return Ok(QubitData::Mapping(qubits));
        }

        if let Some(Value::Object(inner)) = map.get("qubits").filter(|_| map.len() == 1) {
            let qubits: BTreeMap<String, Vec<f64>> =
                serde_json::from_value(Value::Object(inner.clone())).map_err(|_| {
                    HalError::UnsupportedQubitData("a register with malformed qubits".into())
                })?;
            return Ok(QubitData::Register(Register::new(qubits)?));
        }

        Err(HalError::UnsupportedQubitData(
            "an object whose values are not coordinate arrays".into(),
        ))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// A device model together with a register it accepts.
///
/// Immutable after construction and cheap to clone; the model is shared.
#[derive(Clone)]
pub struct Device {
    model: Arc<dyn DeviceModel>,
    register: Register,
}

impl Device {
    /// Validate `qubits` against `model` and build the device.
    pub fn new<M>(model: M, qubits: impl Into<QubitData>) -> HalResult<Self>
    where
        M: DeviceModel + 'static,
    {
        Self::with_model(Arc::new(model), qubits)
    }

    /// Same as [`Device::new`] for a shared model.
    pub fn with_model(model: Arc<dyn DeviceModel>, qubits: impl Into<QubitData>) -> HalResult<Self> {
        let register = qubits.into().into_register()?;
        model.check_array(&register.positions())?;

        debug!(
            "Validated {} atoms against device '{}'",
            register.len(),
            model.name()
        );

        Ok(Self { model, register })
    }

    /// Build a device from untyped qubit data (see [`QubitData::try_from`]).
    pub fn from_value(model: Arc<dyn DeviceModel>, value: serde_json::Value) -> HalResult<Self> {
        Self::with_model(model, QubitData::try_from(value)?)
    }

    /// The device model.
    pub fn model(&self) -> &Arc<dyn DeviceModel> {
        &self.model
    }

    /// Device name.
    pub fn name(&self) -> &str {
        self.model.name()
    }

    /// Whether the device works with 2D or 3D arrays.
    pub fn max_dimensionality(&self) -> usize {
        self.model.max_dimensionality()
    }

    /// Maximum number of atoms that can be trapped simultaneously.
    pub fn max_atom_num(&self) -> usize {
        self.model.max_atom_num()
    }

    /// Maximum allowed distance from the center of the array, in µm.
    pub fn max_radial_distance(&self) -> f64 {
        self.model.max_radial_distance()
    }

    /// Minimal allowed distance between atoms, in µm.
    pub fn min_atom_distance(&self) -> f64 {
        self.model.min_atom_distance()
    }

    /// The four array limits.
    pub fn limits(&self) -> DeviceLimits {
        self.model.limits()
    }

    /// Channels available on the device.
    pub fn channels(&self) -> &ChannelMap {
        self.model.channels()
    }

    /// Electronic transitions available for control and measurement.
    pub fn supported_bases(&self) -> BTreeSet<Basis> {
        self.model.supported_bases()
    }

    /// The validated qubit register.
    pub fn qubits(&self) -> &Register {
        &self.register
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("name", &self.name())
            .field("qubits", &self.register.len())
            .finish()
    }
}
