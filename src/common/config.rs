//! Runtime configuration loaded from the process environment.
//!
//! Only logging is configurable; the exported operations never read it.

use std::env;

use tracing::level_filters::LevelFilter;

use super::error::{BridgeError, BridgeResult};

/// Environment key selecting the log level.
pub const LOG_LEVEL_KEY: &str = "HELLO_FFI_LOG_LEVEL";

/// Snapshot of configuration values consumed by the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeCfg {
    pub log_level: LevelFilter,
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::WARN,
        }
    }
}

impl BridgeCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> BridgeResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(LOG_LEVEL_KEY) {
            cfg.log_level = parse_level(&raw)?;
        }
        Ok(cfg)
    }
}

fn parse_level(raw: &str) -> BridgeResult<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::OFF),
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(BridgeError::InvalidConfig {
            key: LOG_LEVEL_KEY,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn_when_unset() {
        let cfg = BridgeCfg::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.log_level, LevelFilter::WARN);
    }

    #[test]
    fn level_is_case_insensitive() {
        let cfg = BridgeCfg::from_lookup(|key| {
            assert_eq!(key, LOG_LEVEL_KEY);
            Some(" Debug ".to_string())
        })
        .unwrap();
        assert_eq!(cfg.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = BridgeCfg::from_lookup(|_| Some("loud".to_string())).unwrap_err();
        assert_eq!(
            err,
            BridgeError::InvalidConfig {
                key: LOG_LEVEL_KEY,
                value: "loud".to_string(),
            }
        );
    }
}
