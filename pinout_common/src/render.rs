//! Composite pinout rendering.
//!
//! Labels are resolved per position with the following precedence:
//!
//! 1. Enabled protocol binding (later protocol in declaration order wins).
//! 2. Pin mode of the bound logical pin (GPIO positions).
//! 3. Fixed supply label (power/ground positions).
//!
//! Protocol labels follow the header column: odd positions read
//! `"{Protocol}-{Role}"`, even positions read `"{Role}-{Protocol}"`.
//!
//! # Report Layout
//!
//! ```text
//!                 vout_3_3V - 01 | 02 - vout_5v
//!               InputPullUp - 03 | 04 - vout_5v
//! ```
//!
//! Each label sits in a `LABEL_WIDTH` column: the left one right-justified,
//! the right one left-justified. The last row carries no trailing padding
//! and there is no trailing newline.

use serde::Serialize;

use crate::consts::{HEADER_POSITIONS, LABEL_WIDTH};
use crate::header::{HeaderTopology, PositionKind};
use crate::pin::{PinMode, PinStateStore};
use crate::protocol::{Protocol, ProtocolRegistry, SignalRole};

/// Protocol claim on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overlay {
    /// Winning protocol.
    pub protocol: Protocol,
    /// Role of the line at this position.
    pub role: SignalRole,
}

/// Resolved state of one physical position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionState {
    /// Physical position (1-based).
    pub position: u8,
    /// Position kind.
    pub kind: PositionKind,
    /// Bound logical pin, `None` for power/ground.
    pub pin: Option<u8>,
    /// Current mode of the bound pin.
    pub mode: Option<PinMode>,
    /// Winning protocol claim, if any.
    pub overlay: Option<Overlay>,
    /// Final report label.
    pub label: String,
}

/// Winning protocol claim per position, index 0 = position 1.
///
/// Later protocols in declaration order overwrite earlier ones.
pub fn overlays(protocols: &ProtocolRegistry) -> [Option<Overlay>; HEADER_POSITIONS] {
    let mut overlays = [None; HEADER_POSITIONS];
    for protocol in protocols.enabled() {
        for binding in protocols.bindings_of(protocol) {
            // In range: the registry checked every binding against the topology.
            overlays[binding.position as usize - 1] = Some(Overlay {
                protocol,
                role: binding.role,
            });
        }
    }
    overlays
}

/// Resolve every header position into its composite state.
pub fn resolve(
    topology: &HeaderTopology,
    pins: &PinStateStore,
    protocols: &ProtocolRegistry,
) -> Vec<PositionState> {
    let modes = pins.modes();

    topology
        .entries()
        .zip(overlays(protocols))
        .map(|((position, kind, pin), overlay)| {
            let mode = pin.map(|p| modes[p as usize]);
            let label = match (overlay, mode) {
                (Some(o), _) => overlay_label(position, o),
                (None, Some(m)) => m.label().to_string(),
                (None, None) => kind.label().to_string(),
            };
            PositionState {
                position,
                kind,
                pin,
                mode,
                overlay,
                label,
            }
        })
        .collect()
}

/// Protocol label for a position, ordered by header column.
pub fn overlay_label(position: u8, overlay: Overlay) -> String {
    if position % 2 == 1 {
        format!("{}-{}", overlay.protocol, overlay.role)
    } else {
        format!("{}-{}", overlay.role, overlay.protocol)
    }
}

/// Format resolved states as the two-column report.
pub fn format_report(states: &[PositionState]) -> String {
    let rows = states.len() / 2;
    let mut lines = Vec::with_capacity(rows);

    for (row, pair) in states.chunks_exact(2).enumerate() {
        let (left, right) = (&pair[0], &pair[1]);
        let line = if row + 1 == rows {
            format!(
                "{:>w$} - {:02} | {:02} - {}",
                left.label,
                left.position,
                right.position,
                right.label,
                w = LABEL_WIDTH
            )
        } else {
            format!(
                "{:>w$} - {:02} | {:02} - {:<w$}",
                left.label,
                left.position,
                right.position,
                right.label,
                w = LABEL_WIDTH
            )
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// Render the full report from the three state holders.
pub fn render(
    topology: &HeaderTopology,
    pins: &PinStateStore,
    protocols: &ProtocolRegistry,
) -> String {
    format_report(&resolve(topology, pins, protocols))
}
