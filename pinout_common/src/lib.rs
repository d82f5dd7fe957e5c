//! Pinout Common Library
//!
//! This crate models the physical pin header of a single-board computer and
//! renders its configuration state as a fixed-width text report.
//!
//! # Module Structure
//!
//! - [`header`] - Static header topology and the position ↔ pin bijection
//! - [`pin`] - Pin modes and the per-pin state store
//! - [`protocol`] - Shared-bus protocols, signal roles and the overlay registry
//! - [`render`] - Composite label resolution and report formatting
//! - [`controller`] - `PinoutController`, the single owner of mutable state
//! - [`config`] - Configuration loading traits and types
//! - [`hal`] - Hardware I/O capability consumed by outer layers
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use pinout_common::prelude::*;
//!
//! let mut controller = PinoutController::new().unwrap();
//! controller.set_mode(0, PinMode::Output).unwrap();
//! controller.set_enabled(Protocol::Uart, true);
//! println!("{}", controller.render());
//! ```

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod hal;
pub mod header;
pub mod pin;
pub mod prelude;
pub mod protocol;
pub mod render;
