//! # Grantbook Ledger
//!
//! The ordered collection of registrant permissions for one subject.
//!
//! ## Overview
//!
//! A [`Ledger`] holds [`PermissionEntry`] rows in insertion order. Each row
//! binds a registrant to a [`PermissionLevel`](grantbook_core::PermissionLevel)
//! and remembers how it came to exist:
//!
//! - **Explicit**: created through the editor for a literal identifier
//! - **Pattern**: created through the editor for a pattern string
//! - **Owner**: inherited from ownership, supplied by the caller
//!
//! Only explicit rows are editable. The ledger refuses level changes on
//! any other row and leaves itself untouched when it does.
//!
//! ## Snapshots
//!
//! A ledger can be encoded to CBOR and decoded again so the host can carry
//! it between a render and a later submit. [`Ledger::digest`] identifies a
//! snapshot so a stale one can be detected.
//!
//! ```rust
//! use grantbook_core::{PermissionLevel, RegistrantKind};
//! use grantbook_ledger::{Ledger, PermissionEntry};
//!
//! let mut ledger = Ledger::new();
//! let id = ledger.append(PermissionEntry::explicit("alice", RegistrantKind::User, PermissionLevel::Clone));
//! ledger.update(id, PermissionLevel::Push).unwrap();
//! assert_eq!(ledger.roles(), vec!["RW:alice".to_string()]);
//! ```

pub mod entry;
pub mod error;
pub mod ledger;

pub use entry::PermissionEntry;
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, LedgerRow};
