//! Error types for the editor.

use grantbook_alloc::GrantError;
use grantbook_core::{CoreError, LedgerDigest};
use grantbook_ledger::LedgerError;
use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// Vocabulary error, e.g. an unknown level key.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Ledger refused the operation.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Allocator refused the submission.
    #[error("grant rejected: {0}")]
    Grant(#[from] GrantError),

    /// The ledger changed since the caller rendered it.
    #[error("stale snapshot: expected {expected}, ledger is at {actual}")]
    StaleSnapshot {
        expected: LedgerDigest,
        actual: LedgerDigest,
    },
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
