//! Pinout controller — the single owner of mutable pinout state.
//!
//! Holds the header topology, the pin state store and the protocol overlay
//! registry, and exposes the public surface: mode and protocol mutation,
//! the rendered report, and read-only topology lookups.
//!
//! All operations are synchronous and O(1) or O(N) over the header. When the
//! controller is shared between callers, wrap it in a single `Mutex`.

use tracing::{info, warn};

use crate::config::PinoutSection;
use crate::error::PinoutError;
use crate::header::{HeaderTopology, PositionKind};
use crate::pin::{PinMode, PinStateStore};
use crate::protocol::{Binding, Protocol, ProtocolRegistry};
use crate::render::{self, Overlay, PositionState};

/// Owns pin modes and protocol flags on top of a fixed header topology.
#[derive(Debug, Clone)]
pub struct PinoutController {
    topology: HeaderTopology,
    pins: PinStateStore,
    protocols: ProtocolRegistry,
}

impl PinoutController {
    /// Create a controller for the reference header with boot defaults.
    ///
    /// # Errors
    /// Returns `PinoutError::ConfigurationError` if the static tables are
    /// inconsistent.
    pub fn new() -> Result<Self, PinoutError> {
        Self::with_topology(HeaderTopology::new()?)
    }

    /// Create a controller over an explicitly constructed topology.
    pub fn with_topology(topology: HeaderTopology) -> Result<Self, PinoutError> {
        let protocols = ProtocolRegistry::new(&topology)?;
        Ok(Self {
            topology,
            pins: PinStateStore::new(),
            protocols,
        })
    }

    /// Create a controller and apply the `[pinout]` configuration section.
    pub fn from_config(section: &PinoutSection) -> Result<Self, PinoutError> {
        let mut controller = Self::new()?;
        controller.apply_config(section)?;
        Ok(controller)
    }

    /// Apply configured pin modes and enabled protocols.
    ///
    /// Modes are applied in file order; a pin listed twice keeps the last mode.
    /// On error the controller is left unchanged.
    pub fn apply_config(&mut self, section: &PinoutSection) -> Result<(), PinoutError> {
        let mut pins = self.pins.clone();
        for entry in &section.mode {
            pins.set_mode(entry.pin, entry.mode)?;
        }
        self.pins = pins;

        for &protocol in &section.enabled {
            if self.protocols.is_enabled(protocol) {
                warn!("{protocol} listed more than once in config");
            }
            self.protocols.set_enabled(protocol, true);
        }
        info!(
            "Applied config: {} pin modes, {} protocols enabled",
            section.mode.len(),
            self.protocols.enabled().count()
        );
        Ok(())
    }

    // ─── Pin State ──────────────────────────────────────────────────

    /// Set the mode of a logical pin.
    pub fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), PinoutError> {
        self.pins.set_mode(pin, mode)
    }

    /// Current mode of a logical pin.
    pub fn get_mode(&self, pin: u8) -> Result<PinMode, PinoutError> {
        self.pins.get_mode(pin)
    }

    /// Restore boot-default modes and disable every protocol.
    pub fn reset(&mut self) {
        self.pins.reset();
        self.protocols.disable_all();
        info!("Pinout reset to defaults");
    }

    // ─── Protocols ──────────────────────────────────────────────────

    /// Enable or disable one protocol.
    pub fn set_enabled(&mut self, protocol: Protocol, enabled: bool) {
        self.protocols.set_enabled(protocol, enabled);
    }

    /// Whether a protocol is enabled.
    pub fn is_enabled(&self, protocol: Protocol) -> bool {
        self.protocols.is_enabled(protocol)
    }

    /// Fixed bindings of a protocol.
    pub fn bindings_of(&self, protocol: Protocol) -> &'static [Binding] {
        self.protocols.bindings_of(protocol)
    }

    /// Protocol claim on the position of `pin`, if an enabled protocol
    /// binds it.
    pub fn claimed_by(&self, pin: u8) -> Result<Option<Overlay>, PinoutError> {
        let position = self.topology.position_of(pin)?;
        Ok(render::overlays(&self.protocols)[position as usize - 1])
    }

    // ─── Topology (read-only) ───────────────────────────────────────

    /// Kind of a physical position.
    pub fn kind_of(&self, position: u8) -> Result<PositionKind, PinoutError> {
        self.topology.kind_of(position)
    }

    /// Logical pin at a physical position.
    pub fn pin_of(&self, position: u8) -> Result<Option<u8>, PinoutError> {
        self.topology.pin_of(position)
    }

    /// Physical position of a logical pin.
    pub fn position_of(&self, pin: u8) -> Result<u8, PinoutError> {
        self.topology.position_of(pin)
    }

    /// Underlying topology.
    pub fn topology(&self) -> &HeaderTopology {
        &self.topology
    }

    /// Underlying pin state store.
    pub fn pins(&self) -> &PinStateStore {
        &self.pins
    }

    /// Underlying protocol registry.
    pub fn protocols(&self) -> &ProtocolRegistry {
        &self.protocols
    }

    // ─── Rendering ──────────────────────────────────────────────────

    /// Render the pinout report.
    pub fn render(&self) -> String {
        render::render(&self.topology, &self.pins, &self.protocols)
    }

    /// Resolved per-position state, for callers building their own views.
    pub fn snapshot(&self) -> Vec<PositionState> {
        render::resolve(&self.topology, &self.pins, &self.protocols)
    }
}
