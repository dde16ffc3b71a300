//! Devices command implementation.

use anyhow::Result;
use console::style;

use natom_hal::DeviceRegistry;

use super::common::print_limits;

/// Execute the devices command.
pub fn execute(device_file: Option<&str>) -> Result<()> {
    let mut registry = DeviceRegistry::with_builtins();
    if let Some(path) = device_file {
        registry.register(super::common::load_device_file(path)?);
    }

    println!("{} Available devices:\n", style("natom").cyan().bold());

    for name in registry.available_devices() {
        let model = registry.get(&name)?;
        println!(
            "  {} {} ({} channels)",
            style("●").green(),
            style(&name).bold(),
            model.channels().len()
        );
        print_limits(model.as_ref());
        println!();
    }

    Ok(())
}
