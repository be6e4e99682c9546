//! # Grantbook
//!
//! Editing the registrant permissions of a single subject: a repository's
//! users and teams, or a user's or team's repositories.
//!
//! ## Overview
//!
//! - **Ledger**: the ordered list of existing permissions. Each row is an
//!   explicit grant, a pattern grant or an inherited owner grant. Only
//!   explicit rows can have their level changed.
//! - **Allocator**: the pool of registrants that may still receive a new
//!   grant, and the submission path that classifies a registrant string as
//!   a literal identifier or a pattern before appending it.
//! - **Editor**: one editing session tying both together with the caller's
//!   level labels.
//!
//! Rendering, transport and enforcement live outside this crate. The
//! editor hands out display-ready rows and level choices, and takes
//! `submit` / `update` calls back.
//!
//! ## Usage
//!
//! ```rust
//! use grantbook::{EditorConfig, LevelLabels, PermissionEditor, PermissionLevel, RegistrantCatalog, RegistrantKind};
//! use grantbook::ledger::PermissionEntry;
//!
//! let catalog = RegistrantCatalog::new(RegistrantKind::User, ["alice", "bob"]);
//! let mut editor = PermissionEditor::new(
//!     catalog,
//!     [PermissionEntry::owner("alice", RegistrantKind::User, PermissionLevel::Rewind)],
//!     LevelLabels::new(),
//!     EditorConfig::default(),
//! );
//!
//! // alice is only an owner, so she can still get an explicit grant.
//! assert!(editor.available().contains("alice"));
//!
//! let request = editor.new_request().registrant("bob").level(PermissionLevel::Push);
//! editor.submit(&request).unwrap();
//! assert!(!editor.available().contains("bob"));
//! ```
//!
//! ## Re-exports
//!
//! - `grantbook::core` - Levels, kinds, naming rules, labels
//! - `grantbook::ledger` - The permission ledger
//! - `grantbook::alloc` - Candidate pools and submission

pub mod editor;
pub mod error;

// Re-export component crates
pub use grantbook_alloc as alloc;
pub use grantbook_core as core;
pub use grantbook_ledger as ledger;

// Re-export main types for convenience
pub use editor::{EditorConfig, PermissionEditor};
pub use error::{EditorError, Result};

pub use grantbook_alloc::{CandidatePool, GrantRequest, RegistrantCatalog};
pub use grantbook_core::{
    DisplayName, EntryId, LedgerDigest, LevelChoice, LevelLabels, NamingRules, PermissionLevel,
    PermissionType, RegistrantKind,
};
pub use grantbook_ledger::{Ledger, LedgerRow, PermissionEntry};
