//! The core module holds the device, its settings and the error type.

pub mod device;
pub mod error;
pub mod settings;
