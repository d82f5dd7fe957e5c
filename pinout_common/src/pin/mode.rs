//! Pin mode types.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PULL_UP_PINS;

/// Electrical configuration of a logical pin.
///
/// Serialized and displayed by variant name (`"InputPullUp"`, `"Output"`, ...),
/// which is also the label shown in the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PinMode {
    /// Input with internal pull-up.
    InputPullUp = 0,
    /// Input with internal pull-down.
    InputPullDown = 1,
    /// Floating input.
    Input = 2,
    /// Push-pull output.
    Output = 3,
}

impl PinMode {
    /// All modes in declaration order.
    pub const ALL: [Self; 4] = [
        Self::InputPullUp,
        Self::InputPullDown,
        Self::Input,
        Self::Output,
    ];

    /// Boot-time pull configuration of the reference board.
    pub const fn default_for(pin: u8) -> Self {
        if (pin as usize) < DEFAULT_PULL_UP_PINS {
            Self::InputPullUp
        } else {
            Self::InputPullDown
        }
    }

    /// Report label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::InputPullUp => "InputPullUp",
            Self::InputPullDown => "InputPullDown",
            Self::Input => "Input",
            Self::Output => "Output",
        }
    }

    /// `true` for any of the input variants.
    pub const fn is_input(self) -> bool {
        !matches!(self, Self::Output)
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PinMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown PinMode: {s:?}, expected one of InputPullUp, InputPullDown, Input, Output"
                )
            })
    }
}
