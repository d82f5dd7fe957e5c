//! Simulation driver.
//!
//! Keeps pin modes and levels in memory so the pinout shell can run without
//! GPIO hardware. Inputs idle at their pull level (pull-up reads `High`,
//! pull-down and floating read `Low`); outputs read back the last written
//! level. Tests can inject input levels with [`SimulationDriver::set_input_level`].

use pinout_common::consts::GPIO_PINS;
use pinout_common::hal::driver::{HalError, PinDriver, PinLevel};
use pinout_common::pin::PinMode;
use tracing::{debug, trace};

/// Registered driver name.
pub const DRIVER_NAME: &str = "simulation";

/// Serial ports reported by the simulated board.
const SIMULATED_SERIAL_PORTS: [&str; 2] = ["/dev/ttyAMA0", "/dev/ttyS0"];

/// State of one opened pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SimPin {
    mode: PinMode,
    level: PinLevel,
}

/// In-memory driver implementing the `PinDriver` trait.
#[derive(Debug, Clone)]
pub struct SimulationDriver {
    /// Opened pins, indexed by pin number
    pins: [Option<SimPin>; GPIO_PINS],
}

impl SimulationDriver {
    /// Create a driver with every pin closed.
    pub fn new() -> Self {
        Self {
            pins: [None; GPIO_PINS],
        }
    }

    /// Drive an external signal onto an input pin.
    ///
    /// # Errors
    /// `PinNotOpen` if the pin is closed, `UnsupportedMode` if it is an output.
    pub fn set_input_level(&mut self, pin: u8, level: PinLevel) -> Result<(), HalError> {
        let sim = self.slot(pin)?.as_mut().ok_or(HalError::PinNotOpen(pin))?;
        if !sim.mode.is_input() {
            return Err(HalError::UnsupportedMode {
                pin,
                mode: sim.mode,
            });
        }
        sim.level = level;
        Ok(())
    }

    /// Mode an open pin was opened with.
    pub fn mode_of(&self, pin: u8) -> Option<PinMode> {
        self.pins.get(pin as usize).copied().flatten().map(|p| p.mode)
    }

    /// Number of currently open pins.
    pub fn open_count(&self) -> usize {
        self.pins.iter().filter(|p| p.is_some()).count()
    }

    fn slot(&mut self, pin: u8) -> Result<&mut Option<SimPin>, HalError> {
        self.pins
            .get_mut(pin as usize)
            .ok_or(HalError::InvalidPin(pin))
    }
}

impl Default for SimulationDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Level an input settles to with no external signal.
fn idle_level(mode: PinMode) -> PinLevel {
    match mode {
        PinMode::InputPullUp => PinLevel::High,
        PinMode::InputPullDown | PinMode::Input | PinMode::Output => PinLevel::Low,
    }
}

impl PinDriver for SimulationDriver {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn open_pin(&mut self, pin: u8, mode: PinMode) -> Result<(), HalError> {
        let slot = self.slot(pin)?;
        let level = match slot {
            // An output keeps its latch when reopened as output.
            Some(prev) if prev.mode == PinMode::Output && mode == PinMode::Output => prev.level,
            _ => idle_level(mode),
        };
        *slot = Some(SimPin { mode, level });
        debug!("sim: opened pin {pin} as {mode} ({level})");
        Ok(())
    }

    fn close_pin(&mut self, pin: u8) -> Result<(), HalError> {
        if self.slot(pin)?.take().is_some() {
            debug!("sim: closed pin {pin}");
        }
        Ok(())
    }

    fn read(&mut self, pin: u8) -> Result<PinLevel, HalError> {
        let sim = self.slot(pin)?.ok_or(HalError::PinNotOpen(pin))?;
        trace!("sim: read pin {pin} = {}", sim.level);
        Ok(sim.level)
    }

    fn write(&mut self, pin: u8, level: PinLevel) -> Result<(), HalError> {
        let sim = self.slot(pin)?.as_mut().ok_or(HalError::PinNotOpen(pin))?;
        if sim.mode != PinMode::Output {
            return Err(HalError::UnsupportedMode {
                pin,
                mode: sim.mode,
            });
        }
        sim.level = level;
        trace!("sim: write pin {pin} = {level}");
        Ok(())
    }

    fn serial_ports(&self) -> Vec<String> {
        SIMULATED_SERIAL_PORTS.iter().map(|s| s.to_string()).collect()
    }
}

/// Factory function to create a simulation driver instance.
pub fn create_driver() -> Box<dyn PinDriver> {
    Box::new(SimulationDriver::new())
}
