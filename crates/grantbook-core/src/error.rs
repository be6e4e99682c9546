//! Error types for Grantbook Core.

use thiserror::Error;

/// Core errors that can occur while parsing vocabulary values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown permission level code: {0:?}")]
    UnknownLevelCode(String),

    #[error("unknown registrant kind: {0:?}")]
    UnknownRegistrantKind(String),

    #[error("invalid ledger digest: {0}")]
    InvalidDigest(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
