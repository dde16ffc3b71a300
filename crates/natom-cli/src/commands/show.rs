//! Show command implementation.
//!
//! Print the limits and channel table of a single device.

use anyhow::Result;
use console::style;
use serde::Serialize;

use natom_hal::{Basis, ChannelMap, DeviceLimits};

use super::common::{print_limits, resolve_device};

#[derive(Serialize)]
struct DeviceReport<'a> {
    name: &'a str,
    limits: DeviceLimits,
    supported_bases: Vec<Basis>,
    channels: &'a ChannelMap,
}

/// Execute the show command.
pub fn execute(device: &str, device_file: Option<&str>, format: &str) -> Result<()> {
    let model = resolve_device(device, device_file)?;

    match format {
        "json" => {
            let report = DeviceReport {
                name: model.name(),
                limits: model.limits(),
                supported_bases: model.supported_bases().into_iter().collect(),
                channels: model.channels(),
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        _ => {
            println!("{} {}\n", style("Device").cyan().bold(), style(model.name()).bold());
            print_limits(model.as_ref());
            println!("\n  Channels:");
            for (id, channel) in model.channels() {
                println!("    {:<16} {}", style(id).yellow(), channel);
            }
        }
    }

    Ok(())
}
