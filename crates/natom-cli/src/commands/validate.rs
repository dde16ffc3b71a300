//! Validate command implementation.
//!
//! Check a qubit layout file against a device's trap-array rules.

use anyhow::Result;
use console::style;
use serde::Serialize;
use tracing::debug;

use natom_hal::validate::{max_radial_distance, min_pairwise_distance};
use natom_hal::Device;

use super::common::{load_layout, resolve_device};

#[derive(Serialize)]
struct ValidationReport {
    device: String,
    valid: bool,
    atoms: Option<usize>,
    max_radial_distance: Option<f64>,
    min_atom_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the validate command.
pub fn execute(input: &str, device: &str, device_file: Option<&str>, format: &str) -> Result<()> {
    let model = resolve_device(device, device_file)?;
    let layout = load_layout(input)?;
    debug!("Validating {} against {}", input, model.name());

    let outcome = Device::from_value(model.clone(), layout);

    let report = match &outcome {
        Ok(device) => {
            let positions = device.qubits().positions();
            ValidationReport {
                device: device.name().to_string(),
                valid: true,
                atoms: Some(positions.len()),
                max_radial_distance: max_radial_distance(&positions),
                min_atom_distance: min_pairwise_distance(&positions),
                error: None,
            }
        }
        Err(e) => ValidationReport {
            device: model.name().to_string(),
            valid: false,
            atoms: None,
            max_radial_distance: None,
            min_atom_distance: None,
            error: Some(e.to_string()),
        },
    };

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        _ => print_report(input, &report),
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => Err(anyhow::anyhow!("{} rejected by {}: {}", input, model.name(), e)),
    }
}

fn print_report(input: &str, report: &ValidationReport) {
    if !report.valid {
        println!(
            "{} {} does not fit {}",
            style("✗").red().bold(),
            style(input).dim(),
            style(&report.device).bold()
        );
        return;
    }

    println!(
        "{} {} fits {}",
        style("✓").green().bold(),
        style(input).dim(),
        style(&report.device).bold()
    );
    if let Some(n) = report.atoms {
        println!("  Atoms: {}", style(n).yellow());
    }
    if let Some(r) = report.max_radial_distance {
        println!("  Farthest from center: {r:.3} µm");
    }
    if let Some(d) = report.min_atom_distance {
        println!("  Closest pair: {d:.3} µm");
    }
}
