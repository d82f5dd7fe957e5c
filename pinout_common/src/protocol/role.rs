//! Protocol and signal role types.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─── SignalRole ─────────────────────────────────────────────────────

/// Named function of one line within a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalRole {
    // ── I2C ─────────────────────────
    #[serde(rename = "SDA")]
    Sda,
    #[serde(rename = "SCL")]
    Scl,
    /// HAT EEPROM data line.
    #[serde(rename = "ID_SD")]
    IdSd,
    /// HAT EEPROM clock line.
    #[serde(rename = "ID_SC")]
    IdSc,

    // ── SPI ─────────────────────────
    #[serde(rename = "MOSI")]
    Mosi,
    #[serde(rename = "MISO")]
    Miso,
    #[serde(rename = "SCLK")]
    Sclk,
    #[serde(rename = "CE0")]
    Ce0,
    #[serde(rename = "CE1")]
    Ce1,

    // ── UART ────────────────────────
    TxD,
    RxD,

    // ── PWM channels ────────────────
    #[serde(rename = "PWM0")]
    Pwm0,
    #[serde(rename = "PWM1")]
    Pwm1,

    // ── General purpose clocks ──────
    #[serde(rename = "GPCLK0")]
    Gpclk0,
    #[serde(rename = "GPCLK1")]
    Gpclk1,
    #[serde(rename = "GPCLK2")]
    Gpclk2,
}

impl SignalRole {
    /// Report label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sda => "SDA",
            Self::Scl => "SCL",
            Self::IdSd => "ID_SD",
            Self::IdSc => "ID_SC",
            Self::Mosi => "MOSI",
            Self::Miso => "MISO",
            Self::Sclk => "SCLK",
            Self::Ce0 => "CE0",
            Self::Ce1 => "CE1",
            Self::TxD => "TxD",
            Self::RxD => "RxD",
            Self::Pwm0 => "PWM0",
            Self::Pwm1 => "PWM1",
            Self::Gpclk0 => "GPCLK0",
            Self::Gpclk1 => "GPCLK1",
            Self::Gpclk2 => "GPCLK2",
        }
    }
}

impl fmt::Display for SignalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Binding ────────────────────────────────────────────────────────

/// A signal role claiming one physical header position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Binding {
    /// Function of the line.
    pub role: SignalRole,
    /// Physical position (1-based).
    pub position: u8,
}

const fn bind(role: SignalRole, position: u8) -> Binding {
    Binding { role, position }
}

use SignalRole::*;

const I2C0_BINDINGS: &[Binding] = &[bind(IdSd, 27), bind(IdSc, 28)];
const I2C1_BINDINGS: &[Binding] = &[bind(Sda, 3), bind(Scl, 5)];
const SPI0_BINDINGS: &[Binding] = &[
    bind(Mosi, 19),
    bind(Miso, 21),
    bind(Sclk, 23),
    bind(Ce0, 24),
    bind(Ce1, 26),
];
const SPI1_BINDINGS: &[Binding] = &[bind(Mosi, 35), bind(Miso, 38), bind(Sclk, 40)];
const UART_BINDINGS: &[Binding] = &[bind(TxD, 8), bind(RxD, 10)];
// GPIO 18/12 carry channel 0, GPIO 13/19 carry channel 1.
const PWM_BINDINGS: &[Binding] = &[
    bind(Pwm0, 12),
    bind(Pwm0, 32),
    bind(Pwm1, 33),
    bind(Pwm1, 35),
];
const GPCLK_BINDINGS: &[Binding] = &[bind(Gpclk0, 7), bind(Gpclk1, 29), bind(Gpclk2, 31)];

// ─── Protocol ───────────────────────────────────────────────────────

/// Shared-bus protocol available on the header.
///
/// Declaration order is significant: when several enabled protocols bind
/// the same position, the one declared later wins the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Protocol {
    #[serde(rename = "I2C0")]
    I2c0 = 0,
    #[serde(rename = "I2C1")]
    I2c1 = 1,
    #[serde(rename = "SPI0")]
    Spi0 = 2,
    #[serde(rename = "SPI1")]
    Spi1 = 3,
    #[serde(rename = "UART")]
    Uart = 4,
    #[serde(rename = "PWM")]
    Pwm = 5,
    #[serde(rename = "GPCLK")]
    Gpclk = 6,
}

impl Protocol {
    /// Number of protocols.
    pub const COUNT: usize = 7;

    /// All protocols in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::I2c0,
        Self::I2c1,
        Self::Spi0,
        Self::Spi1,
        Self::Uart,
        Self::Pwm,
        Self::Gpclk,
    ];

    /// Report label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::I2c0 => "I2C0",
            Self::I2c1 => "I2C1",
            Self::Spi0 => "SPI0",
            Self::Spi1 => "SPI1",
            Self::Uart => "UART",
            Self::Pwm => "PWM",
            Self::Gpclk => "GPCLK",
        }
    }

    /// Fixed role → position bindings, in declaration order.
    pub const fn bindings(self) -> &'static [Binding] {
        match self {
            Self::I2c0 => I2C0_BINDINGS,
            Self::I2c1 => I2C1_BINDINGS,
            Self::Spi0 => SPI0_BINDINGS,
            Self::Spi1 => SPI1_BINDINGS,
            Self::Uart => UART_BINDINGS,
            Self::Pwm => PWM_BINDINGS,
            Self::Gpclk => GPCLK_BINDINGS,
        }
    }

    /// Index into per-protocol tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Protocol {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown Protocol: {s:?}"))
    }
}
