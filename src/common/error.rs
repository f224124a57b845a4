//! Error handling primitives shared across the crate.

use thiserror::Error;

/// Stable error codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BridgeCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// Input failed validation.
    InvalidInput = 1,
    /// One-time setup was requested twice.
    AlreadyInitialised = 2,
}

/// Canonical error type for the crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("string contains a NUL byte at position {position}")]
    InteriorNul { position: usize },
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("logging already initialised")]
    AlreadyInitialised,
}

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Machine parsable code for this error.
    pub const fn code(&self) -> BridgeCode {
        match self {
            Self::InteriorNul { .. } | Self::InvalidConfig { .. } => BridgeCode::InvalidInput,
            Self::AlreadyInitialised => BridgeCode::AlreadyInitialised,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(BridgeCode::Ok as u32, 0);
        assert_eq!(BridgeCode::InvalidInput as u32, 1);
        assert_eq!(BridgeCode::AlreadyInitialised as u32, 2);
    }

    #[test]
    fn errors_map_to_codes() {
        assert_eq!(
            BridgeError::InteriorNul { position: 3 }.code(),
            BridgeCode::InvalidInput
        );
        let cfg = BridgeError::InvalidConfig {
            key: "HELLO_FFI_LOG_LEVEL",
            value: "loud".into(),
        };
        assert_eq!(cfg.code(), BridgeCode::InvalidInput);
        assert_eq!(cfg.to_string(), "invalid value \"loud\" for HELLO_FFI_LOG_LEVEL");
        assert_eq!(
            BridgeError::AlreadyInitialised.code(),
            BridgeCode::AlreadyInitialised
        );
    }
}
