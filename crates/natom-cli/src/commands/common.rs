//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use natom_hal::{ConfiguredDevice, DeviceModel, DeviceRegistry, DeviceSpec};

/// Load a qubit layout from a JSON or YAML file as untyped data.
///
/// The shape of the data is checked later, when a device is built from it.
pub fn load_layout(path: &str) -> Result<serde_json::Value> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse JSON layout: {path}")),
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Failed to parse YAML layout: {path}")),
        other => anyhow::bail!("Unsupported layout format '.{other}' (expected .json, .yaml or .yml)"),
    }
}

/// Load a device model from a YAML or JSON device file.
pub fn load_device_file(path: &str) -> Result<ConfiguredDevice> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read device file: {path}"))?;
    let spec = DeviceSpec::parse(Path::new(path), &source)
        .with_context(|| format!("Failed to parse device file: {path}"))?;
    let device = ConfiguredDevice::new(spec)?;
    info!("Loaded device '{}' from {}", device.name(), path);
    Ok(device)
}

/// Resolve the device model to validate against.
///
/// A device file takes precedence over a device name.
pub fn resolve_device(name: &str, device_file: Option<&str>) -> Result<Arc<dyn DeviceModel>> {
    if let Some(path) = device_file {
        return Ok(Arc::new(load_device_file(path)?));
    }

    let registry = DeviceRegistry::with_builtins();
    registry.get(name).map_err(|e| {
        anyhow::anyhow!(
            "{e}. Available: {}",
            registry.available_devices().join(", ")
        )
    })
}

/// Print a device's limits and bases.
pub fn print_limits(model: &dyn DeviceModel) {
    let limits = model.limits();
    println!("    Dimensionality: {}D", limits.max_dimensionality);
    println!("    Max atoms: {}", limits.max_atom_num);
    println!("    Max radial distance: {} µm", limits.max_radial_distance);
    println!("    Min atom distance: {} µm", limits.min_atom_distance);
    println!(
        "    Bases: {}",
        model
            .supported_bases()
            .iter()
            .map(|b| style(b).cyan().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use natom_hal::Device;

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_layout() {
        let file = write_temp(".json", r#"{"q0": [0, 0], "q1": [4, 0]}"#);
        let value = load_layout(file.path().to_str().unwrap()).unwrap();
        let device = Device::from_value(resolve_device("chadoq2", None).unwrap(), value).unwrap();
        assert_eq!(device.qubits().len(), 2);
    }

    #[test]
    fn test_load_yaml_register_layout() {
        let file = write_temp(".yaml", "qubits:\n  q0: [0.0, 0.0]\n  q1: [0.0, 3.9]\n");
        let value = load_layout(file.path().to_str().unwrap()).unwrap();
        let err = Device::from_value(resolve_device("Chadoq2", None).unwrap(), value).unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_missing_layout() {
        let err = load_layout("/nonexistent/layout.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".txt", "q0 0 0");
        assert!(load_layout(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_unknown_device_lists_available() {
        let err = resolve_device("nonexistent", None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Chadoq2"), "{msg}");
        assert!(msg.contains("MockDevice"), "{msg}");
    }

    #[test]
    fn test_device_file_takes_precedence() {
        let file = write_temp(
            ".yml",
            "name: Tiny\nmax_dimensionality: 2\nmax_atom_num: 1\n\
             max_radial_distance: 5.0\nmin_atom_distance: 1.0\n",
        );
        let model = resolve_device("chadoq2", Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(model.name(), "Tiny");
        assert_eq!(model.max_atom_num(), 1);
    }

    #[test]
    fn test_invalid_device_file() {
        let file = write_temp(
            ".json",
            r#"{"name": "Bad", "max_dimensionality": 5, "max_atom_num": 1,
                "max_radial_distance": 5.0, "min_atom_distance": 1.0}"#,
        );
        assert!(load_device_file(file.path().to_str().unwrap()).is_err());
    }
}
