//! # PinoutHal Integration Tests
//!
//! Drives the full stack the binary uses: config file → controller →
//! driver from the registry → `PinoutHal` operations.

use pinout_common::config::{ConfigLoader, PinoutConfig};
use pinout_common::controller::PinoutController;
use pinout_common::hal::driver::{HalError, PinLevel};
use pinout_common::pin::PinMode;
use pinout_common::protocol::Protocol;
use pinout_hal::{ApplySummary, DriverRegistry, PinoutHal};
use std::fs;
use tempfile::TempDir;

// ─── Helpers ────────────────────────────────────────────────────────

fn hal_from_toml(content: &str) -> PinoutHal {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pinout.toml");
    fs::write(&path, content).unwrap();

    let config = PinoutConfig::load(&path).expect("load config");
    config.validate().expect("valid config");

    let controller = PinoutController::from_config(&config.pinout).expect("controller");
    let driver = DriverRegistry::with_builtin()
        .create_driver(&config.pinout.driver)
        .expect("driver");
    PinoutHal::new(controller, driver)
}

// ─── Tests ──────────────────────────────────────────────────────────

#[test]
fn unknown_driver_in_config() {
    let registry = DriverRegistry::with_builtin();
    assert!(matches!(
        registry.create_driver("ethercat"),
        Err(HalError::DriverNotFound(name)) if name == "ethercat"
    ));
}

#[test]
fn apply_respects_config() {
    let mut hal = hal_from_toml(
        r#"
[shared]
service_name = "hal-test"

[pinout]
enabled = ["UART", "I2C1"]

[[pinout.mode]]
pin = 17
mode = "Output"
"#,
    );

    let summary = hal.apply().unwrap();
    assert_eq!(
        summary,
        ApplySummary {
            opened: 24,
            claimed: 4
        }
    );
    assert_eq!(hal.driver().name(), "simulation");
}

#[test]
fn read_and_write_through_driver() {
    let mut hal = hal_from_toml(
        r#"
[shared]
service_name = "hal-test"

[[pinout.mode]]
pin = 17
mode = "Output"
"#,
    );

    assert_eq!(hal.read(17).unwrap(), PinLevel::Low);
    hal.write(17, PinLevel::High).unwrap();
    assert_eq!(hal.read(17).unwrap(), PinLevel::High);

    // Pin 4 boots as pull-up input.
    assert_eq!(hal.read(4).unwrap(), PinLevel::High);
    assert!(hal.write(4, PinLevel::Low).is_err());
}

#[test]
fn protocol_pins_refused_as_gpio() {
    let mut hal = hal_from_toml(
        r#"
[shared]
service_name = "hal-test"

[pinout]
enabled = ["UART"]

[[pinout.mode]]
pin = 15
mode = "Output"
"#,
    );

    let summary = hal.apply().unwrap();
    assert_eq!(
        summary,
        ApplySummary {
            opened: 26,
            claimed: 2
        }
    );
    assert!(matches!(
        hal.read(14),
        Err(HalError::PinClaimed {
            pin: 14,
            protocol: Protocol::Uart
        })
    ));
    assert!(matches!(
        hal.write(15, PinLevel::High),
        Err(HalError::PinClaimed { pin: 15, .. })
    ));
    // Unclaimed neighbours still work.
    assert_eq!(hal.read(18).unwrap(), PinLevel::Low);
}

#[test]
fn controller_changes_reach_driver_on_apply() {
    let mut hal = hal_from_toml(
        r#"
[shared]
service_name = "hal-test"
"#,
    );
    hal.controller_mut().set_enabled(Protocol::Spi1, true);
    hal.controller_mut().set_mode(26, PinMode::Output).unwrap();
    let summary = hal.apply().unwrap();
    assert_eq!(summary.claimed, 3);

    let report = hal.controller().render();
    assert!(report.contains("SPI1-MOSI - 35 | 36"));
    assert!(report.contains("Output - 37 | 38"));
}

#[test]
fn serial_ports_listed() {
    let hal = hal_from_toml(
        r#"
[shared]
service_name = "hal-test"
"#,
    );
    assert_eq!(hal.serial_ports(), vec!["/dev/ttyAMA0", "/dev/ttyS0"]);
}
