//! Device registry for looking up device models by name.
//!
//! The [`DeviceRegistry`] is the central point for discovering the built-in
//! models and any models loaded from device files.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::device::{Device, DeviceModel, QubitData};
use crate::devices;
use crate::error::{HalError, HalResult};

/// Registry of device models keyed by case-insensitive name.
pub struct DeviceRegistry {
    models: FxHashMap<String, Arc<dyn DeviceModel>>,
}

impl DeviceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            models: FxHashMap::default(),
        }
    }

    /// Create a registry holding every built-in model.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for model in devices::builtin() {
            registry.register_shared(model);
        }
        registry
    }

    /// Register a device model, replacing any model with the same name.
    pub fn register(&mut self, model: impl DeviceModel + 'static) {
        self.register_shared(Arc::new(model));
    }

    /// Register an already shared device model.
    pub fn register_shared(&mut self, model: Arc<dyn DeviceModel>) {
        debug!("Registering device: {}", model.name());
        self.models.insert(model.name().to_lowercase(), model);
    }

    /// Look up a device model by name.
    pub fn get(&self, name: &str) -> HalResult<Arc<dyn DeviceModel>> {
        self.models
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| HalError::UnknownDevice(name.to_string()))
    }

    /// Validate `qubits` against the named device.
    pub fn build(&self, name: &str, qubits: impl Into<QubitData>) -> HalResult<Device> {
        Device::with_model(self.get(name)?, qubits)
    }

    /// List all registered device names, sorted.
    pub fn available_devices(&self) -> Vec<String> {
        let mut names: Vec<_> = self.models.values().map(|m| m.name().to_string()).collect();
        names.sort();
        names
    }

    /// Check if a device is registered under this name.
    pub fn has_device(&self, name: &str) -> bool {
        self.models.contains_key(&name.to_lowercase())
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
