//! Shared-bus protocols and the overlay registry.
//!
//! Each [`Protocol`] owns a fixed, ordered list of [`Binding`]s that claim
//! header positions when the protocol is enabled. Bindings are `'static`
//! tables; the only mutable state is the per-protocol enabled flag held by
//! [`ProtocolRegistry`].

pub mod registry;
pub mod role;

pub use registry::ProtocolRegistry;
pub use role::{Binding, Protocol, SignalRole};
