//! `PinoutHal` — applies the configured pinout to a GPIO driver.
//!
//! The controller describes the *intended* configuration; this struct is
//! the only place that pushes it to hardware. Pins claimed by an enabled
//! protocol are left to the protocol's own peripheral and never opened as
//! plain GPIO.

use pinout_common::controller::PinoutController;
use pinout_common::error::PinoutError;
use pinout_common::hal::driver::{HalError, PinDriver, PinLevel};
use pinout_common::pin::PinMode;
use tracing::{debug, info, warn};

/// Outcome of [`PinoutHal::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Pins opened on the driver in their configured mode.
    pub opened: usize,
    /// Pins skipped because an enabled protocol claims their position.
    pub claimed: usize,
}

/// Controller plus driver.
pub struct PinoutHal {
    /// Pinout state
    controller: PinoutController,
    /// Active driver instance
    driver: Box<dyn PinDriver>,
}

impl PinoutHal {
    /// Pair a controller with a driver.
    pub fn new(controller: PinoutController, driver: Box<dyn PinDriver>) -> Self {
        info!(
            "PinoutHal created with driver: {} v{}",
            driver.name(),
            driver.version()
        );
        Self { controller, driver }
    }

    /// Pinout state.
    pub fn controller(&self) -> &PinoutController {
        &self.controller
    }

    /// Mutable pinout state. Changes reach the driver on the next `apply()`.
    pub fn controller_mut(&mut self) -> &mut PinoutController {
        &mut self.controller
    }

    /// Active driver.
    pub fn driver(&self) -> &dyn PinDriver {
        self.driver.as_ref()
    }

    /// Open every unclaimed pin on the driver in its configured mode.
    ///
    /// # Errors
    /// Stops at the first driver error.
    pub fn apply(&mut self) -> Result<ApplySummary, HalError> {
        let mut summary = ApplySummary::default();

        for state in self.controller.snapshot() {
            let (Some(pin), Some(mode)) = (state.pin, state.mode) else {
                continue;
            };
            if let Some(overlay) = state.overlay {
                debug!(
                    "pin {pin} (position {}) claimed by {}-{}",
                    state.position, overlay.protocol, overlay.role
                );
                self.driver.close_pin(pin)?;
                summary.claimed += 1;
                continue;
            }
            self.driver.open_pin(pin, mode)?;
            summary.opened += 1;
        }

        info!(
            "Applied pinout: {} pins opened, {} claimed by protocols",
            summary.opened, summary.claimed
        );
        Ok(summary)
    }

    /// Open `pin` in its configured mode and read its level.
    ///
    /// # Errors
    /// `PinClaimed` if an enabled protocol owns the pin's position.
    pub fn read(&mut self, pin: u8) -> Result<PinLevel, HalError> {
        let mode = self.gpio_mode(pin)?;
        self.driver.open_pin(pin, mode)?;
        self.driver.read(pin)
    }

    /// Drive `pin`, which must be configured as an output.
    ///
    /// # Errors
    /// `PinClaimed` if an enabled protocol owns the pin's position,
    /// `UnsupportedMode` if the pin is not configured as `Output`.
    pub fn write(&mut self, pin: u8, level: PinLevel) -> Result<(), HalError> {
        let mode = self.gpio_mode(pin)?;
        if mode != PinMode::Output {
            warn!("refusing write to pin {pin} configured as {mode}");
            return Err(HalError::UnsupportedMode { pin, mode });
        }
        self.driver.open_pin(pin, mode)?;
        self.driver.write(pin, level)
    }

    /// Serial ports reported by the driver.
    pub fn serial_ports(&self) -> Vec<String> {
        self.driver.serial_ports()
    }

    /// Release every pin on the driver.
    pub fn shutdown(&mut self) -> Result<(), HalError> {
        for (pin, _) in self.controller.pins().iter() {
            self.driver.close_pin(pin)?;
        }
        info!("PinoutHal shutdown complete");
        Ok(())
    }

    /// Configured mode of a pin that is free for plain GPIO use.
    fn gpio_mode(&self, pin: u8) -> Result<PinMode, HalError> {
        if let Some(overlay) = self.controller.claimed_by(pin).map_err(to_hal_error)? {
            warn!(
                "pin {pin} is routed to {}-{}, not usable as GPIO",
                overlay.protocol, overlay.role
            );
            return Err(HalError::PinClaimed {
                pin,
                protocol: overlay.protocol,
            });
        }
        self.controller.get_mode(pin).map_err(to_hal_error)
    }
}

fn to_hal_error(e: PinoutError) -> HalError {
    match e {
        PinoutError::UnknownPin(p) => HalError::InvalidPin(p),
        other => HalError::CommunicationError(other.to_string()),
    }
}
