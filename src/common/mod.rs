//! Shared plumbing used by the exported surface.
pub mod buf;
pub mod config;
pub mod error;
pub mod log;

pub use error::{BridgeCode, BridgeError, BridgeResult};
