//! Error types for the allocator.

use thiserror::Error;

/// Errors that can occur when submitting a new grant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrantError {
    /// No level, or the `None` sentinel, was chosen.
    #[error("no permission level chosen")]
    LevelNotChosen,
}

/// Result type for allocator operations.
pub type Result<T> = std::result::Result<T, GrantError>;
