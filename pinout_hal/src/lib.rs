//! # Pinout HAL Library
//!
//! Outer shell around `pinout_common`: a pluggable GPIO driver architecture
//! and the `pinout_hal` command-line binary.
//!
//! Drivers implement the `PinDriver` trait defined in
//! `pinout_common::hal::driver`. The pinout core never touches hardware;
//! [`PinoutHal`] is the only place where the configured pinout meets a driver.
//!
//! # Module Structure
//!
//! - [`core`] - `PinoutHal`, applies controller state to a driver
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - Driver implementations
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     pinout_hal (single crate)                │
//! │  ┌──────────────────┐    ┌──────────────┐    ┌────────────┐  │
//! │  │ PinoutController │◄──►│  PinoutHal   │◄──►│  Driver    │  │
//! │  │ (pinout_common)  │    │              │    │  Registry  │  │
//! │  └──────────────────┘    └──────┬───────┘    └────────────┘  │
//! │                                 │                            │
//! │                                 ▼                            │
//! │                        ┌────────────────┐                    │
//! │                        │  PinDriver     │ (trait object)     │
//! │                        └────────────────┘                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]

pub mod core;
pub mod driver_registry;
pub mod drivers;

// Re-export key types for convenience
pub use crate::core::{ApplySummary, PinoutHal};
pub use crate::driver_registry::DriverRegistry;
