//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load the TOML configuration
//! file of pinout applications.
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "pinout-01"
//!
//! [pinout]
//! driver = "simulation"
//! enabled = ["UART", "I2C1"]
//!
//! [[pinout.mode]]
//! pin = 17
//! mode = "Output"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pinout_common::config::{ConfigLoader, ConfigError, PinoutConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = PinoutConfig::load(Path::new("pinout.toml"))?;
//!     config.validate()?;
//!     println!("Service: {}", config.shared.service_name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::consts::{DEFAULT_DRIVER, GPIO_PINS};
use crate::pin::PinMode;
use crate::protocol::Protocol;

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// configuration files.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Represents the verbosity level of logging output.
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Common configuration fields shared across pinout applications.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "pinout-01"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `service_name` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ─── Pinout Section ─────────────────────────────────────────────────

/// Initial mode for one logical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeEntry {
    /// Logical pin number.
    pub pin: u8,
    /// Mode applied at startup.
    pub mode: PinMode,
}

/// `[pinout]` table: startup state and hardware driver selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinoutSection {
    /// Hardware driver name.
    #[serde(default = "default_driver")]
    pub driver: String,

    /// Pin modes applied over the boot defaults.
    #[serde(default)]
    pub mode: Vec<ModeEntry>,

    /// Protocols enabled at startup.
    #[serde(default)]
    pub enabled: Vec<Protocol>,
}

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

impl Default for PinoutSection {
    fn default() -> Self {
        Self {
            driver: default_driver(),
            mode: Vec::new(),
            enabled: Vec::new(),
        }
    }
}

impl PinoutSection {
    /// Validate the section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - a mode entry names a pin outside `0..GPIO_PINS`
    /// - a pin has more than one mode entry
    /// - `driver` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.driver.is_empty() {
            return Err(ConfigError::ValidationError(
                "driver cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.mode {
            if entry.pin as usize >= GPIO_PINS {
                return Err(ConfigError::ValidationError(format!(
                    "pin {} out of range (expected 0..{GPIO_PINS})",
                    entry.pin
                )));
            }
            if !seen.insert(entry.pin) {
                return Err(ConfigError::ValidationError(format!(
                    "pin {} has more than one mode entry",
                    entry.pin
                )));
            }
        }
        Ok(())
    }
}

/// Full pinout application configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinoutConfig {
    /// Common settings.
    pub shared: SharedConfig,

    /// Startup pinout state.
    #[serde(default)]
    pub pinout: PinoutSection,
}

impl PinoutConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.pinout.validate()
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
