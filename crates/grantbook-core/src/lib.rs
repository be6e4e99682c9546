//! # Grantbook Core
//!
//! Pure vocabulary for editing registrant permissions: access levels,
//! registrant kinds, permission types and the naming rules that decide
//! whether a registrant string is a literal identifier or a pattern.
//!
//! This crate contains no I/O and no mutable state. It is pure computation
//! over small value types.
//!
//! ## Key Types
//!
//! - [`PermissionLevel`] - Ordered access strength with a stable short code
//! - [`RegistrantKind`] - Namespace of a registrant (repository, user, team)
//! - [`PermissionType`] - Explicit, pattern or owner grant
//! - [`NamingRules`] - Literal-identifier validation and repository suffix handling
//! - [`LevelLabels`] - Caller-supplied display labels for levels
//! - [`EntryId`] / [`LedgerDigest`] - Identifiers used by the ledger

pub mod error;
pub mod labels;
pub mod level;
pub mod naming;
pub mod permission;
pub mod types;

pub use error::{CoreError, Result};
pub use labels::{LevelChoice, LevelLabels};
pub use level::PermissionLevel;
pub use naming::{DisplayName, NamingRules, RegistrantKind};
pub use permission::PermissionType;
pub use types::{EntryId, LedgerDigest};
