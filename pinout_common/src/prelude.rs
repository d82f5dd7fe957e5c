//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use pinout_common::prelude::*;` and get
//! the most important types without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use pinout_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, PinoutConfig, SharedConfig};

// ─── Header Constants ───────────────────────────────────────────────
pub use crate::consts::{GPIO_PINS, HEADER_POSITIONS, LABEL_WIDTH};

// ─── Core ───────────────────────────────────────────────────────────
pub use crate::controller::PinoutController;
pub use crate::error::PinoutError;
pub use crate::header::{HeaderTopology, PositionKind};
pub use crate::pin::{PinMode, PinStateStore};
pub use crate::protocol::{Binding, Protocol, ProtocolRegistry, SignalRole};
pub use crate::render::{Overlay, PositionState};

// ─── Hardware I/O ───────────────────────────────────────────────────
pub use crate::hal::driver::{HalError, PinDriver, PinLevel};
