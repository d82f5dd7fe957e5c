//! Hardware I/O capability.
//!
//! The pinout core never calls into hardware. Outer layers implement
//! [`driver::PinDriver`] to open, read and write pins by their platform
//! GPIO number, which on the reference board equals the logical pin number.

pub mod driver;
