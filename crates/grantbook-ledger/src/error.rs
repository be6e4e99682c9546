//! Error types for the ledger.

use grantbook_core::{EntryId, PermissionType};
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No entry with this id.
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    /// Attempt to change the level of an owner or pattern entry.
    #[error("entry {id} is a {permission_type} grant and cannot be edited")]
    NotEditable {
        id: EntryId,
        permission_type: PermissionType,
    },

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
