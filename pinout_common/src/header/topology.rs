//! Header topology tables and the position ↔ pin bijection.
//!
//! ```text
//!                   3.3V - 01 | 02 - 5V
//!                GPIO 02 - 03 | 04 - 5V
//!                GPIO 03 - 05 | 06 - GND
//!                GPIO 04 - 07 | 08 - GPIO 14
//!                    GND - 09 | 10 - GPIO 15
//!                GPIO 17 - 11 | 12 - GPIO 18
//!                GPIO 27 - 13 | 14 - GND
//!                GPIO 22 - 15 | 16 - GPIO 23
//!                   3.3V - 17 | 18 - GPIO 24
//!                GPIO 10 - 19 | 20 - GND
//!                GPIO 09 - 21 | 22 - GPIO 25
//!                GPIO 11 - 23 | 24 - GPIO 08
//!                    GND - 25 | 26 - GPIO 07
//!                GPIO 00 - 27 | 28 - GPIO 01
//!                GPIO 05 - 29 | 30 - GND
//!                GPIO 06 - 31 | 32 - GPIO 12
//!                GPIO 13 - 33 | 34 - GND
//!                GPIO 19 - 35 | 36 - GPIO 16
//!                GPIO 26 - 37 | 38 - GPIO 20
//!                    GND - 39 | 40 - GPIO 21
//! ```

use tracing::debug;

use super::kind::PositionKind;
use crate::consts::{GPIO_PINS, HEADER_POSITIONS};
use crate::error::PinoutError;

use super::kind::PositionKind::{Gpio, Ground as Gnd, Power3V3 as V33, Power5V as V5};

// ─── Reference Tables ───────────────────────────────────────────────

/// Kind of each physical position, index 0 = position 1.
pub const REFERENCE_KINDS: [PositionKind; HEADER_POSITIONS] = [
    V33, V5, //   01 | 02
    Gpio, V5, //  03 | 04
    Gpio, Gnd, // 05 | 06
    Gpio, Gpio, // 07 | 08
    Gnd, Gpio, // 09 | 10
    Gpio, Gpio, // 11 | 12
    Gpio, Gnd, // 13 | 14
    Gpio, Gpio, // 15 | 16
    V33, Gpio, // 17 | 18
    Gpio, Gnd, // 19 | 20
    Gpio, Gpio, // 21 | 22
    Gpio, Gpio, // 23 | 24
    Gnd, Gpio, // 25 | 26
    Gpio, Gpio, // 27 | 28
    Gpio, Gnd, // 29 | 30
    Gpio, Gpio, // 31 | 32
    Gpio, Gnd, // 33 | 34
    Gpio, Gpio, // 35 | 36
    Gpio, Gpio, // 37 | 38
    Gnd, Gpio, // 39 | 40
];

/// Physical position of each logical pin, index = pin number.
pub const REFERENCE_PIN_POSITIONS: [u8; GPIO_PINS] = [
    27, 28, 3, 5, 7, 29, 31, 26, 24, 21, // 0..=9
    19, 23, 32, 33, 8, 10, 36, 11, 12, 35, // 10..=19
    38, 40, 15, 16, 18, 22, 37, 13, // 20..=27
];

// ─── HeaderTopology ─────────────────────────────────────────────────

/// Static header layout with precomputed lookups in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTopology {
    kinds: [PositionKind; HEADER_POSITIONS],
    pin_to_position: [u8; GPIO_PINS],
    position_to_pin: [Option<u8>; HEADER_POSITIONS],
}

impl HeaderTopology {
    /// Build the reference 40-pin header.
    ///
    /// # Errors
    /// Returns `PinoutError::ConfigurationError` if the reference tables are
    /// inconsistent (never for a correct build).
    pub fn new() -> Result<Self, PinoutError> {
        Self::from_tables(&REFERENCE_KINDS, &REFERENCE_PIN_POSITIONS)
    }

    /// Build a topology from a kind table and a pin → position table.
    ///
    /// Validates that the pin table is a bijection onto the Gpio positions:
    /// - every pin maps to an in-range position of kind `Gpio`;
    /// - no position is claimed by two pins;
    /// - every `Gpio` position is claimed by some pin.
    pub fn from_tables(
        kinds: &[PositionKind; HEADER_POSITIONS],
        pin_positions: &[u8; GPIO_PINS],
    ) -> Result<Self, PinoutError> {
        let mut position_to_pin = [None; HEADER_POSITIONS];

        for (pin, &position) in pin_positions.iter().enumerate() {
            let idx = position_index(position).map_err(|_| {
                PinoutError::ConfigurationError(format!(
                    "pin {pin} bound to position {position} outside the header"
                ))
            })?;

            if kinds[idx] != PositionKind::Gpio {
                return Err(PinoutError::ConfigurationError(format!(
                    "pin {pin} bound to position {position} of kind {}",
                    kinds[idx]
                )));
            }

            if let Some(prev) = position_to_pin[idx] {
                return Err(PinoutError::ConfigurationError(format!(
                    "position {position} bound to both pin {prev} and pin {pin}"
                )));
            }
            position_to_pin[idx] = Some(pin as u8);
        }

        for (idx, kind) in kinds.iter().enumerate() {
            if *kind == PositionKind::Gpio && position_to_pin[idx].is_none() {
                return Err(PinoutError::ConfigurationError(format!(
                    "GPIO position {} has no bound pin",
                    idx + 1
                )));
            }
        }

        debug!(
            "Header topology built: {} positions, {} GPIO pins",
            HEADER_POSITIONS, GPIO_PINS
        );

        Ok(Self {
            kinds: *kinds,
            pin_to_position: *pin_positions,
            position_to_pin,
        })
    }

    /// Kind of a physical position.
    pub fn kind_of(&self, position: u8) -> Result<PositionKind, PinoutError> {
        Ok(self.kinds[position_index(position)?])
    }

    /// Logical pin bound to a physical position, `None` for power/ground.
    pub fn pin_of(&self, position: u8) -> Result<Option<u8>, PinoutError> {
        Ok(self.position_to_pin[position_index(position)?])
    }

    /// Physical position of a logical pin.
    pub fn position_of(&self, pin: u8) -> Result<u8, PinoutError> {
        self.pin_to_position
            .get(pin as usize)
            .copied()
            .ok_or(PinoutError::UnknownPin(pin))
    }

    /// `(position, kind, pin)` for every position in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, PositionKind, Option<u8>)> + '_ {
        self.kinds
            .iter()
            .zip(self.position_to_pin.iter())
            .enumerate()
            .map(|(idx, (&kind, &pin))| (idx as u8 + 1, kind, pin))
    }

    /// All physical positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = u8> + '_ {
        1..=HEADER_POSITIONS as u8
    }

    /// All `Gpio` positions in ascending order.
    pub fn gpio_positions(&self) -> impl Iterator<Item = u8> + '_ {
        self.positions()
            .filter(|&p| self.kinds[p as usize - 1] == PositionKind::Gpio)
    }

    /// `(pin, position)` pairs in pin order.
    pub fn pins(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.pin_to_position
            .iter()
            .enumerate()
            .map(|(pin, &pos)| (pin as u8, pos))
    }
}

/// Validate a 1-based position and convert it to an array index.
#[inline]
fn position_index(position: u8) -> Result<usize, PinoutError> {
    if position == 0 || position as usize > HEADER_POSITIONS {
        return Err(PinoutError::OutOfRange(position));
    }
    Ok(position as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology() -> HeaderTopology {
        HeaderTopology::new().expect("reference topology is consistent")
    }

    #[test]
    fn pin_position_roundtrip() {
        let t = topology();
        for pin in 0..GPIO_PINS as u8 {
            let pos = t.position_of(pin).unwrap();
            assert_eq!(t.pin_of(pos).unwrap(), Some(pin), "pin {pin}");
        }
    }

    #[test]
    fn position_pin_roundtrip() {
        let t = topology();
        for pos in t.gpio_positions() {
            let pin = t.pin_of(pos).unwrap().expect("gpio position has a pin");
            assert_eq!(t.position_of(pin).unwrap(), pos, "position {pos}");
        }
    }

    #[test]
    fn gpio_positions_have_gpio_kind() {
        let t = topology();
        for (_, pos) in t.pins() {
            assert_eq!(t.kind_of(pos).unwrap(), PositionKind::Gpio);
        }
        assert_eq!(t.gpio_positions().count(), GPIO_PINS);
    }

    #[test]
    fn supply_positions_have_no_pin() {
        let t = topology();
        for pos in [1, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39] {
            assert!(t.kind_of(pos).unwrap().is_supply(), "position {pos}");
            assert_eq!(t.pin_of(pos).unwrap(), None);
        }
    }

    #[test]
    fn reference_spot_checks() {
        let t = topology();
        assert_eq!(t.kind_of(1).unwrap(), PositionKind::Power3V3);
        assert_eq!(t.kind_of(2).unwrap(), PositionKind::Power5V);
        assert_eq!(t.kind_of(6).unwrap(), PositionKind::Ground);
        assert_eq!(t.position_of(0).unwrap(), 27);
        assert_eq!(t.position_of(14).unwrap(), 8);
        assert_eq!(t.position_of(27).unwrap(), 13);
        assert_eq!(t.pin_of(40).unwrap(), Some(21));
    }

    #[test]
    fn entries_agree_with_lookups() {
        let t = topology();
        let entries: Vec<_> = t.entries().collect();
        assert_eq!(entries.len(), HEADER_POSITIONS);
        for (position, kind, pin) in entries {
            assert_eq!(t.kind_of(position).unwrap(), kind);
            assert_eq!(t.pin_of(position).unwrap(), pin);
        }
    }

    #[test]
    fn out_of_range_positions() {
        let t = topology();
        assert_eq!(t.kind_of(0), Err(PinoutError::OutOfRange(0)));
        assert_eq!(t.kind_of(41), Err(PinoutError::OutOfRange(41)));
        assert_eq!(t.pin_of(255), Err(PinoutError::OutOfRange(255)));
    }

    #[test]
    fn unknown_pins() {
        let t = topology();
        assert_eq!(t.position_of(28), Err(PinoutError::UnknownPin(28)));
        assert_eq!(t.position_of(200), Err(PinoutError::UnknownPin(200)));
    }

    #[test]
    fn rejects_pin_on_supply_position() {
        let mut pins = REFERENCE_PIN_POSITIONS;
        pins[0] = 1; // 3.3V
        let result = HeaderTopology::from_tables(&REFERENCE_KINDS, &pins);
        assert!(matches!(result, Err(PinoutError::ConfigurationError(_))));
    }

    #[test]
    fn rejects_position_bound_twice() {
        let mut pins = REFERENCE_PIN_POSITIONS;
        pins[1] = pins[0];
        let result = HeaderTopology::from_tables(&REFERENCE_KINDS, &pins);
        assert!(matches!(result, Err(PinoutError::ConfigurationError(_))));
    }

    #[test]
    fn rejects_unbound_gpio_position() {
        let mut kinds = REFERENCE_KINDS;
        kinds[0] = PositionKind::Gpio; // position 1 has no pin
        let result = HeaderTopology::from_tables(&kinds, &REFERENCE_PIN_POSITIONS);
        assert!(matches!(result, Err(PinoutError::ConfigurationError(_))));
    }

    #[test]
    fn rejects_position_outside_header() {
        let mut pins = REFERENCE_PIN_POSITIONS;
        pins[5] = 41;
        let result = HeaderTopology::from_tables(&REFERENCE_KINDS, &pins);
        assert!(matches!(result, Err(PinoutError::ConfigurationError(_))));
    }
}
