//! Structured logging emitted through `tracing`.
//!
//! Events carry the same `mod`/`ev`/`code` triple on every call so a host can
//! grep a JSON-line stream by entry point.

use tracing::level_filters::LevelFilter;

use super::config::BridgeCfg;
use super::error::{BridgeCode, BridgeError, BridgeResult};

/// Emit a debug event for one call across the boundary.
pub fn event(module: &'static str, event: &'static str, code: BridgeCode) {
    tracing::debug!(module, event, code = code as u32, "ffi call");
}

/// Install a JSON-line subscriber on stderr at the configured level.
pub fn init(cfg: &BridgeCfg) -> BridgeResult<()> {
    if cfg.log_level == LevelFilter::OFF {
        return Ok(());
    }
    tracing_subscriber::fmt()
        .json()
        .with_max_level(cfg.log_level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| BridgeError::AlreadyInitialised)
}
