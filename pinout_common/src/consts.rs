//! Header-wide constants.
//!
//! Single source of truth for the reference 40-pin header dimensions and
//! report layout. Imported by all crates — no duplication permitted.

use static_assertions::const_assert;

/// Number of physical positions on the header (1-based, `1..=HEADER_POSITIONS`).
pub const HEADER_POSITIONS: usize = 40;

/// Number of logical GPIO pins (0-based, `0..GPIO_PINS`).
pub const GPIO_PINS: usize = 28;

/// Pins `0..DEFAULT_PULL_UP_PINS` boot with pull-ups, the rest with pull-downs.
pub const DEFAULT_PULL_UP_PINS: usize = 9;

/// Width of each label column in the rendered report.
pub const LABEL_WIDTH: usize = 25;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/pinout/pinout.toml";

/// Default hardware driver name.
pub const DEFAULT_DRIVER: &str = "simulation";

// Report rows pair odd/even positions.
const_assert!(HEADER_POSITIONS % 2 == 0);
const_assert!(GPIO_PINS <= HEADER_POSITIONS);
const_assert!(DEFAULT_PULL_UP_PINS <= GPIO_PINS);
// Position and pin numbers are stored as u8.
const_assert!(HEADER_POSITIONS <= u8::MAX as usize);
