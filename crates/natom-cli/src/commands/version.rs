//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - neutral-atom device layout validation",
        style("natom").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  natom-register  Labelled atom positions and layout generators");
    println!("  natom-hal       Device models, channels and array validation");
    println!("  natom-cli       Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
