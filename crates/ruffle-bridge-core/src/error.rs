//! Shared error type across the bridge crates.

use thiserror::Error;

/// Stable error codes, used as structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Settings failed to parse or validate.
    BadConfig,
    /// Unsupported settings version.
    UnsupportedVersion,
    /// Envelope or payload did not have the expected shape.
    Malformed,
    /// The host environment (DOM, globals, player) refused an operation.
    Environment,
}

impl ErrorCode {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Malformed => "MALFORMED",
            ErrorCode::Environment => "ENVIRONMENT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type used by core and page crates.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported settings version")]
    UnsupportedVersion,
    #[error("malformed: {0}")]
    Malformed(String),
    #[error("environment: {0}")]
    Environment(String),
}

impl BridgeError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            BridgeError::BadConfig(_) => ErrorCode::BadConfig,
            BridgeError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            BridgeError::Malformed(_) => ErrorCode::Malformed,
            BridgeError::Environment(_) => ErrorCode::Environment,
        }
    }
}
