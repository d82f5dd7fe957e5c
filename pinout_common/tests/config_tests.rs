//! Config file tests.
//!
//! Tests for `ConfigLoader::load()` on `PinoutConfig`: missing file, TOML
//! syntax errors, unknown fields, semantic validation, and applying a loaded
//! config to a controller.

use pinout_common::config::{ConfigError, ConfigLoader, PinoutConfig};
use pinout_common::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `content` to `pinout.toml` in `dir` and return its path.
fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("pinout.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_missing_file() {
    let result = PinoutConfig::load(Path::new("/nonexistent/path/pinout.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn load_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "invalid toml {{{{");
    let result = PinoutConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_rejects_unknown_pinout_field() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shared]
service_name = "pinout-test"

[pinout]
protocols = ["UART"]
"#,
    );
    let result = PinoutConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shared]
service_name = "pinout-test"

[[pinout.mode]]
pin = 3
mode = "OpenDrain"
"#,
    );
    let result = PinoutConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_minimal_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shared]
service_name = "pinout-test"
"#,
    );
    let config = PinoutConfig::load(&path).unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Info);
    assert_eq!(config.pinout.driver, "simulation");
    assert!(config.validate().is_ok());

    let c = PinoutController::from_config(&config.pinout).unwrap();
    assert_eq!(c.render(), PinoutController::new().unwrap().render());
}

#[test]
fn validate_rejects_out_of_range_pin() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shared]
service_name = "pinout-test"

[[pinout.mode]]
pin = 30
mode = "Output"
"#,
    );
    let config = PinoutConfig::load(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn load_and_apply_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[shared]
log_level = "debug"
service_name = "pinout-test"

[pinout]
driver = "simulation"
enabled = ["UART", "I2C1"]

[[pinout.mode]]
pin = 0
mode = "Output"

[[pinout.mode]]
pin = 17
mode = "Input"
"#,
    );
    let config = PinoutConfig::load(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Debug);

    let c = PinoutController::from_config(&config.pinout).unwrap();
    assert_eq!(c.get_mode(0).unwrap(), PinMode::Output);
    assert_eq!(c.get_mode(17).unwrap(), PinMode::Input);
    assert!(c.is_enabled(Protocol::Uart));
    assert!(c.is_enabled(Protocol::I2c1));

    let report = c.render();
    assert!(report.contains("I2C1-SDA - 03 | 04"));
    assert!(report.contains("I2C1-SCL - 05 | 06"));
    assert!(report.contains("07 | 08 - TxD-UART"));
    assert!(report.contains("Output - 27 | 28"));
    assert!(report.contains("Input - 11 | 12"));
}
