//! # Pinout HAL Binary
//!
//! Prints the pin header report and pushes the configured pinout to a GPIO
//! driver.
//!
//! # Usage
//!
//! ```bash
//! # Print the report for a config file
//! pinout_hal --config /etc/pinout/pinout.toml
//!
//! # Override modes and protocols from the command line
//! pinout_hal -m 0=Output -e UART render
//!
//! # Snapshot as JSON for UI builders
//! pinout_hal render --format json
//!
//! # Read one pin through the driver
//! pinout_hal --driver simulation read 17
//! ```
//!
//! `read` and `ports` release every pin before exiting; `apply` and `write`
//! leave the pins configured on the driver.

use clap::{Parser, Subcommand, ValueEnum};
use pinout_common::config::{ConfigLoader, ModeEntry, PinoutConfig, PinoutSection};
use pinout_common::consts::DEFAULT_CONFIG_PATH;
use pinout_common::controller::PinoutController;
use pinout_common::hal::driver::{HalError, PinLevel};
use pinout_common::pin::PinMode;
use pinout_common::protocol::Protocol;
use pinout_hal::{DriverRegistry, PinoutHal};
use std::path::{Path, PathBuf};
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Pinout HAL - pin header report and GPIO driver shell
#[derive(Parser, Debug)]
#[command(name = "pinout_hal")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Pin header report and GPIO driver shell")]
#[command(long_about = None)]
struct Args {
    /// Path to configuration file (pinout.toml).
    /// Falls back to the default path when it exists, else built-in defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Driver to use (overrides `[pinout] driver`)
    #[arg(short, long)]
    driver: Option<String>,

    /// Set a pin mode, e.g. `17=Output` (can be specified multiple times)
    #[arg(short = 'm', long = "mode", value_name = "PIN=MODE", value_parser = parse_mode_entry, action = clap::ArgAction::Append)]
    modes: Vec<ModeEntry>,

    /// Enable a protocol, e.g. `UART` (can be specified multiple times)
    #[arg(short = 'e', long = "enable", value_name = "PROTOCOL", action = clap::ArgAction::Append)]
    enable: Vec<Protocol>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Print the pinout report (default)
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    #[command(flatten)]
    Driver(DriverCommand),
}

/// Subcommands that go through a GPIO driver.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum DriverCommand {
    /// Open a pin in its configured mode and print its level
    Read {
        /// Logical pin number
        pin: u8,
    },
    /// Drive a pin configured as output
    Write {
        /// Logical pin number
        pin: u8,
        /// Level to drive
        #[arg(value_enum)]
        level: LevelArg,
    },
    /// Open every unclaimed pin on the driver in its configured mode
    Apply,
    /// List serial ports reported by the driver
    Ports,
}

impl DriverCommand {
    /// Whether the pins opened by this command stay configured on exit.
    fn keeps_pins(&self) -> bool {
        matches!(self, Self::Apply | Self::Write { .. })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LevelArg {
    Low,
    High,
}

impl From<LevelArg> for PinLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Low => PinLevel::Low,
            LevelArg::High => PinLevel::High,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("pinout_hal failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config is read before tracing so its log level can apply;
    // errors are reported once the subscriber is up.
    let config = load_config(args.config.as_deref());
    let level = match (&config, args.verbose) {
        (_, true) => Level::DEBUG,
        (Ok(Some(cfg)), false) => cfg.shared.log_level.into(),
        _ => Level::INFO,
    };
    setup_tracing(level, args.json);

    info!("Pinout HAL v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut section = match config? {
        Some(cfg) => {
            cfg.validate()?;
            info!("Service: {}", cfg.shared.service_name);
            cfg.pinout
        }
        None => {
            info!("No config file, using built-in defaults");
            PinoutSection::default()
        }
    };
    merge_cli_overrides(&mut section, &args);
    section.validate()?;

    let controller = PinoutController::from_config(&section)?;

    match args.command.clone().unwrap_or(Command::Render {
        format: Format::Text,
    }) {
        Command::Render { format } => match format {
            Format::Text => println!("{}", controller.render()),
            Format::Json => println!("{}", serde_json::to_string_pretty(&controller.snapshot())?),
        },
        Command::Driver(command) => {
            let registry = DriverRegistry::with_builtin();
            let driver = registry.create_driver(&section.driver)?;
            let mut hal = PinoutHal::new(controller, driver);
            let keep_pins = command.keeps_pins();
            let result = run_driver_command(&mut hal, command);
            let released = if keep_pins {
                Ok(())
            } else {
                hal.shutdown()
            };
            finish_driver_command(result, released)?;
        }
    }

    Ok(())
}

fn run_driver_command(
    hal: &mut PinoutHal,
    command: DriverCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        DriverCommand::Read { pin } => println!("{}", hal.read(pin)?),
        DriverCommand::Write { pin, level } => hal.write(pin, level.into())?,
        DriverCommand::Apply => {
            let summary = hal.apply()?;
            println!(
                "{} pins opened, {} claimed by protocols",
                summary.opened, summary.claimed
            );
        }
        DriverCommand::Ports => {
            for port in hal.serial_ports() {
                println!("{port}");
            }
        }
    }
    Ok(())
}

/// Combine a command's result with the pin release that followed it.
///
/// The command's error is returned first; a release failure behind it is
/// only logged.
fn finish_driver_command(
    result: Result<(), Box<dyn std::error::Error>>,
    released: Result<(), HalError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match (result, released) {
        (Err(e), Err(release)) => {
            warn!("Releasing pins failed: {}", release);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), released) => Ok(released?),
    }
}

/// Load the config file, if any.
///
/// An explicit path must exist; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<Option<PinoutConfig>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(Some(PinoutConfig::load(p)?)),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Ok(Some(PinoutConfig::load(default)?))
            } else {
                Ok(None)
            }
        }
    }
}

/// Apply `--driver`, `--mode` and `--enable` on top of the file config.
fn merge_cli_overrides(section: &mut PinoutSection, args: &Args) {
    if let Some(driver) = &args.driver {
        section.driver = driver.clone();
    }
    for entry in &args.modes {
        // CLI wins over the file for the same pin.
        section.mode.retain(|m| m.pin != entry.pin);
        section.mode.push(*entry);
    }
    for protocol in &args.enable {
        if !section.enabled.contains(protocol) {
            section.enabled.push(*protocol);
        }
    }
}

/// Parse `PIN=MODE`.
fn parse_mode_entry(s: &str) -> Result<ModeEntry, String> {
    let (pin, mode) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PIN=MODE, got {s:?}"))?;
    let pin = pin
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid pin {pin:?}: {e}"))?;
    let mode = mode.trim().parse::<PinMode>()?;
    Ok(ModeEntry { pin, mode })
}

/// Setup tracing subscriber.
fn setup_tracing(level: Level, json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_entry_ok() {
        assert_eq!(
            parse_mode_entry("17=Output").unwrap(),
            ModeEntry {
                pin: 17,
                mode: PinMode::Output
            }
        );
        assert_eq!(
            parse_mode_entry(" 3 = inputpullup ").unwrap(),
            ModeEntry {
                pin: 3,
                mode: PinMode::InputPullUp
            }
        );
    }

    #[test]
    fn parse_mode_entry_errors() {
        assert!(parse_mode_entry("17").is_err());
        assert!(parse_mode_entry("x=Output").is_err());
        assert!(parse_mode_entry("3=Sideways").is_err());
    }

    #[test]
    fn args_default_to_render() {
        let args = Args::try_parse_from(["pinout_hal"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.modes.is_empty());
    }

    #[test]
    fn args_parse_overrides_and_subcommand() {
        let args = Args::try_parse_from([
            "pinout_hal", "-m", "0=Output", "-e", "UART", "-e", "spi1", "read", "4",
        ])
        .unwrap();
        assert_eq!(args.enable, vec![Protocol::Uart, Protocol::Spi1]);
        assert_eq!(
            args.command,
            Some(Command::Driver(DriverCommand::Read { pin: 4 }))
        );
    }

    #[test]
    fn args_parse_write_and_render() {
        let args = Args::try_parse_from(["pinout_hal", "write", "17", "high"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Driver(DriverCommand::Write {
                pin: 17,
                level: LevelArg::High
            }))
        );

        let args = Args::try_parse_from(["pinout_hal", "render", "--format", "json"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Render {
                format: Format::Json
            })
        );
    }

    #[test]
    fn apply_and_write_keep_pins_configured() {
        assert!(DriverCommand::Apply.keeps_pins());
        assert!(
            DriverCommand::Write {
                pin: 17,
                level: LevelArg::Low
            }
            .keeps_pins()
        );
        assert!(!DriverCommand::Read { pin: 17 }.keeps_pins());
        assert!(!DriverCommand::Ports.keeps_pins());
    }

    #[test]
    fn command_error_wins_over_release_error() {
        let result = finish_driver_command(
            Err(HalError::PinClaimed {
                pin: 14,
                protocol: Protocol::Uart,
            }
            .into()),
            Err(HalError::CommunicationError("bus gone".to_string())),
        );
        assert_eq!(result.unwrap_err().to_string(), "Pin 14 is claimed by UART");

        let result = finish_driver_command(Ok(()), Err(HalError::PinNotOpen(3)));
        assert_eq!(result.unwrap_err().to_string(), "Pin 3 is not open");

        assert!(finish_driver_command(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn args_reject_unknown_protocol() {
        assert!(Args::try_parse_from(["pinout_hal", "-e", "CAN"]).is_err());
    }

    #[test]
    fn cli_overrides_replace_file_entries() {
        let args = Args::try_parse_from([
            "pinout_hal", "-d", "other", "-m", "5=Input", "-e", "PWM",
        ])
        .unwrap();
        let mut section = PinoutSection {
            mode: vec![ModeEntry {
                pin: 5,
                mode: PinMode::Output,
            }],
            enabled: vec![Protocol::Pwm],
            ..Default::default()
        };
        merge_cli_overrides(&mut section, &args);
        assert_eq!(section.driver, "other");
        assert_eq!(
            section.mode,
            vec![ModeEntry {
                pin: 5,
                mode: PinMode::Input
            }]
        );
        assert_eq!(section.enabled, vec![Protocol::Pwm]);
    }
}
