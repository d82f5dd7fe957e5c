//! Protocol overlay registry — per-protocol enabled flags.
//!
//! Built at startup against a [`HeaderTopology`]. Bindings are checked once
//! here; overlapping bindings between protocols are legal and resolved by
//! the renderer.

use tracing::{debug, info};

use super::role::{Binding, Protocol};
use crate::error::PinoutError;
use crate::header::{HeaderTopology, PositionKind};

/// Enabled flag per protocol. All protocols start disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolRegistry {
    enabled: [bool; Protocol::COUNT],
}

impl ProtocolRegistry {
    /// Build the registry, validating every protocol binding against `topology`.
    ///
    /// # Errors
    /// Returns `PinoutError::ConfigurationError` if a binding targets a
    /// position outside the header or a power/ground position.
    pub fn new(topology: &HeaderTopology) -> Result<Self, PinoutError> {
        for protocol in Protocol::ALL {
            for binding in protocol.bindings() {
                let kind = topology.kind_of(binding.position).map_err(|_| {
                    PinoutError::ConfigurationError(format!(
                        "{protocol}-{} bound to position {} outside the header",
                        binding.role, binding.position
                    ))
                })?;
                if kind != PositionKind::Gpio {
                    return Err(PinoutError::ConfigurationError(format!(
                        "{protocol}-{} bound to {kind} position {}",
                        binding.role, binding.position
                    )));
                }
            }
        }

        debug!("Protocol registry built: {} protocols", Protocol::COUNT);
        Ok(Self::default())
    }

    /// Set the enabled flag of one protocol. Other protocols are untouched.
    pub fn set_enabled(&mut self, protocol: Protocol, enabled: bool) {
        let flag = &mut self.enabled[protocol.index()];
        if *flag != enabled {
            info!(
                "{protocol} {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        *flag = enabled;
    }

    /// Whether `protocol` is enabled.
    pub fn is_enabled(&self, protocol: Protocol) -> bool {
        self.enabled[protocol.index()]
    }

    /// Fixed bindings of `protocol`.
    pub fn bindings_of(&self, protocol: Protocol) -> &'static [Binding] {
        protocol.bindings()
    }

    /// Enabled protocols in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Protocol> + '_ {
        Protocol::ALL
            .into_iter()
            .filter(|p| self.enabled[p.index()])
    }

    /// Disable every protocol.
    pub fn disable_all(&mut self) {
        self.enabled = [false; Protocol::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProtocolRegistry {
        let topology = HeaderTopology::new().unwrap();
        ProtocolRegistry::new(&topology).unwrap()
    }

    #[test]
    fn all_disabled_by_default() {
        let reg = registry();
        for protocol in Protocol::ALL {
            assert!(!reg.is_enabled(protocol), "{protocol}");
        }
        assert_eq!(reg.enabled().count(), 0);
    }

    #[test]
    fn toggle_is_independent() {
        let mut reg = registry();
        reg.set_enabled(Protocol::Uart, true);
        assert!(reg.is_enabled(Protocol::Uart));
        for protocol in Protocol::ALL {
            if protocol != Protocol::Uart {
                assert!(!reg.is_enabled(protocol), "{protocol}");
            }
        }

        reg.set_enabled(Protocol::Uart, false);
        assert!(!reg.is_enabled(Protocol::Uart));
    }

    #[test]
    fn overlapping_protocols_may_both_be_enabled() {
        let mut reg = registry();
        reg.set_enabled(Protocol::Pwm, true);
        reg.set_enabled(Protocol::Spi1, true);
        assert!(reg.is_enabled(Protocol::Pwm));
        assert!(reg.is_enabled(Protocol::Spi1));
    }

    #[test]
    fn enabled_iterates_in_declaration_order() {
        let mut reg = registry();
        reg.set_enabled(Protocol::Pwm, true);
        reg.set_enabled(Protocol::I2c1, true);
        reg.set_enabled(Protocol::Uart, true);
        let enabled: Vec<_> = reg.enabled().collect();
        assert_eq!(enabled, vec![Protocol::I2c1, Protocol::Uart, Protocol::Pwm]);
    }

    #[test]
    fn disable_all_clears_flags() {
        let mut reg = registry();
        reg.set_enabled(Protocol::Spi0, true);
        reg.set_enabled(Protocol::Gpclk, true);
        reg.disable_all();
        assert_eq!(reg.enabled().count(), 0);
    }

    #[test]
    fn bindings_of_is_fixed() {
        let mut reg = registry();
        let before = reg.bindings_of(Protocol::Spi0);
        reg.set_enabled(Protocol::Spi0, true);
        assert_eq!(reg.bindings_of(Protocol::Spi0), before);
        assert_eq!(before.len(), 5);
    }
}
