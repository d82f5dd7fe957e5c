//! Error taxonomy for the pinout core.

use thiserror::Error;

use crate::consts::{GPIO_PINS, HEADER_POSITIONS};

/// Errors raised by topology lookups, pin state access and startup validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinoutError {
    /// Physical position outside `1..=HEADER_POSITIONS`.
    #[error("Position {0} out of range (expected 1..={max})", max = HEADER_POSITIONS)]
    OutOfRange(u8),

    /// Logical pin outside `0..GPIO_PINS`.
    #[error("Unknown pin {0} (expected 0..{max})", max = GPIO_PINS)]
    UnknownPin(u8),

    /// Topology or protocol tables are internally inconsistent.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
