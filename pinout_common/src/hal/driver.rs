//! GPIO driver trait and error types.
//!
//! This module defines:
//! - `PinDriver` trait - Interface for pluggable hardware backends
//! - `HalError` enum - Error types for driver operations
//! - `PinLevel` enum - Electrical level read from or written to a pin
//! - `DriverFactory` type alias - Factory function type

use core::fmt;
use serde::Serialize;
use thiserror::Error;

use crate::pin::PinMode;
use crate::protocol::Protocol;

/// Error types for driver operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HalError {
    /// Driver initialization failed
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// Hardware communication error
    #[error("Hardware communication error: {0}")]
    CommunicationError(String),

    /// Driver not found
    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    /// Pin number not supported by the platform
    #[error("Invalid pin: {0}")]
    InvalidPin(u8),

    /// Pin accessed before `open_pin()`
    #[error("Pin {0} is not open")]
    PinNotOpen(u8),

    /// Operation not allowed in the pin's current mode
    #[error("Pin {pin} is open as {mode}")]
    UnsupportedMode {
        /// Pin number
        pin: u8,
        /// Mode the pin was opened with
        mode: PinMode,
    },

    /// Pin is routed to an enabled protocol and cannot be used as plain GPIO
    #[error("Pin {pin} is claimed by {protocol}")]
    PinClaimed {
        /// Pin number
        pin: u8,
        /// Protocol owning the pin's position
        protocol: Protocol,
    },
}

/// Electrical level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PinLevel {
    /// Logic 0.
    Low,
    /// Logic 1.
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

impl fmt::Display for PinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Factory function type for creating driver instances.
pub type DriverFactory = fn() -> Box<dyn PinDriver>;

/// Trait defining the interface for GPIO drivers.
///
/// Drivers may block or fail independently of the pinout core; callers
/// decide whether a failure is fatal.
///
/// # Lifecycle
///
/// 1. `open_pin()` - Configure a pin before first access
/// 2. `read()` / `write()` - Access the pin
/// 3. `close_pin()` - Release the pin
pub trait PinDriver: Send + Sync {
    /// Returns the driver's unique identifier (e.g., "simulation", "sysfs").
    fn name(&self) -> &'static str;

    /// Returns the driver's semantic version.
    fn version(&self) -> &'static str;

    /// Open `pin` (platform GPIO number) in the given mode.
    ///
    /// Reopening an already open pin changes its mode.
    fn open_pin(&mut self, pin: u8, mode: PinMode) -> Result<(), HalError>;

    /// Release `pin`. Closing a pin that is not open is a no-op.
    fn close_pin(&mut self, pin: u8) -> Result<(), HalError>;

    /// Read the current level of an open pin.
    fn read(&mut self, pin: u8) -> Result<PinLevel, HalError>;

    /// Drive an open output pin.
    fn write(&mut self, pin: u8, level: PinLevel) -> Result<(), HalError>;

    /// Names of the serial ports available on the platform.
    fn serial_ports(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_bool() {
        assert_eq!(PinLevel::from(true), PinLevel::High);
        assert_eq!(PinLevel::from(false), PinLevel::Low);
    }

    #[test]
    fn error_messages() {
        assert_eq!(HalError::PinNotOpen(4).to_string(), "Pin 4 is not open");
        assert_eq!(
            HalError::UnsupportedMode {
                pin: 4,
                mode: PinMode::InputPullUp
            }
            .to_string(),
            "Pin 4 is open as InputPullUp"
        );
    }
}
