//! Pin state store — current mode of every logical pin.
//!
//! Pure state: writing a mode here never touches hardware.

use tracing::debug;

use super::mode::PinMode;
use crate::consts::GPIO_PINS;
use crate::error::PinoutError;

/// Current `PinMode` per logical pin, initialized to boot defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinStateStore {
    modes: [PinMode; GPIO_PINS],
}

impl PinStateStore {
    /// Create a store holding the boot-time defaults.
    pub fn new() -> Self {
        Self {
            modes: core::array::from_fn(|pin| PinMode::default_for(pin as u8)),
        }
    }

    /// Overwrite the mode of `pin`.
    ///
    /// # Errors
    /// Returns `PinoutError::UnknownPin` if `pin` is outside `0..GPIO_PINS`.
    pub fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), PinoutError> {
        let slot = self
            .modes
            .get_mut(pin as usize)
            .ok_or(PinoutError::UnknownPin(pin))?;
        if *slot != mode {
            debug!("pin {pin}: {} -> {}", slot, mode);
        }
        *slot = mode;
        Ok(())
    }

    /// Current mode of `pin`.
    pub fn get_mode(&self, pin: u8) -> Result<PinMode, PinoutError> {
        self.modes
            .get(pin as usize)
            .copied()
            .ok_or(PinoutError::UnknownPin(pin))
    }

    /// Mode table indexed by pin number.
    pub fn modes(&self) -> &[PinMode; GPIO_PINS] {
        &self.modes
    }

    /// Restore boot-time defaults for every pin.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `(pin, mode)` pairs in pin order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, PinMode)> + '_ {
        self.modes
            .iter()
            .enumerate()
            .map(|(pin, &mode)| (pin as u8, mode))
    }
}

impl Default for PinStateStore {
    fn default() -> Self {
        Self::new()
    }
}
