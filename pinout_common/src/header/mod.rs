//! Header topology — the fixed physical layout of the connector.
//!
//! Built once at startup from static tables. Immutable after construction.
//! Both lookup directions are precomputed into fixed-size arrays, so every
//! query is an O(1) index.

pub mod kind;
pub mod topology;

pub use kind::PositionKind;
pub use topology::HeaderTopology;
