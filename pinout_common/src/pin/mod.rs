//! Per-pin electrical state.

pub mod mode;
pub mod store;

pub use mode::PinMode;
pub use store::PinStateStore;
