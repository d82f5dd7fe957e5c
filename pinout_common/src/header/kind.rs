//! Position kind discriminator.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Electrical classification of a physical header position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PositionKind {
    /// 3.3 V supply rail.
    Power3V3 = 0,
    /// 5 V supply rail.
    Power5V = 1,
    /// Ground.
    Ground = 2,
    /// General purpose I/O, bound to exactly one logical pin.
    Gpio = 3,
}

impl PositionKind {
    /// Fixed report label for this kind.
    ///
    /// Gpio positions are normally labelled by pin mode or protocol; the
    /// `GPIO` label only shows up in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Power3V3 => "vout_3_3V",
            Self::Power5V => "vout_5v",
            Self::Ground => "GND",
            Self::Gpio => "GPIO",
        }
    }

    /// `true` for power and ground positions.
    pub const fn is_supply(self) -> bool {
        !matches!(self, Self::Gpio)
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PositionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vout_3_3V" => Ok(Self::Power3V3),
            "vout_5v" => Ok(Self::Power5V),
            "GND" => Ok(Self::Ground),
            "GPIO" => Ok(Self::Gpio),
            _ => Err(format!("unknown PositionKind: {s:?}")),
        }
    }
}
