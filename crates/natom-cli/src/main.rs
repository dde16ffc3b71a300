//! natom Command-Line Interface
//!
//! Inspect neutral-atom device models and check qubit layouts against them.
//!
//! ```text
//! natom devices
//! natom show chadoq2 --format json
//! natom validate --input layout.yaml --device chadoq2
//! natom validate --input layout.json --device-file fresnel.yaml
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{devices, show, validate, version};

/// natom - neutral-atom device layout validation
#[derive(Parser)]
#[command(name = "natom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available devices
    Devices {
        /// Also list a device defined in a YAML or JSON file
        #[arg(long)]
        device_file: Option<String>,
    },

    /// Show the limits and channels of a device
    Show {
        /// Device name
        #[arg(env = "NATOM_DEVICE", default_value = "Chadoq2")]
        device: String,

        /// Device definition file (overrides the device name)
        #[arg(long)]
        device_file: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check a qubit layout against a device
    Validate {
        /// Layout file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Device name
        #[arg(short, long, env = "NATOM_DEVICE", default_value = "Chadoq2")]
        device: String,

        /// Device definition file (overrides the device name)
        #[arg(long)]
        device_file: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Devices { device_file } => devices::execute(device_file.as_deref()),

        Commands::Show {
            device,
            device_file,
            format,
        } => show::execute(&device, device_file.as_deref(), &format),

        Commands::Validate {
            input,
            device,
            device_file,
            format,
        } => validate::execute(&input, &device, device_file.as_deref(), &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "natom",
            "validate",
            "--input",
            "layout.yaml",
            "--device",
            "mockdevice",
            "-f",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate {
                input,
                device,
                device_file,
                format,
            } => {
                assert_eq!(input, "layout.yaml");
                assert_eq!(device, "mockdevice");
                assert!(device_file.is_none());
                assert_eq!(format, "json");
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_validate_requires_input() {
        assert!(Cli::try_parse_from(["natom", "validate"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["natom", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_show_device_file() {
        let cli =
            Cli::try_parse_from(["natom", "show", "--device-file", "fresnel.yaml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show { device_file: Some(ref f), .. } if f == "fresnel.yaml"
        ));
    }
}
