//! # Grantbook Testkit
//!
//! Testing utilities for Grantbook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Classification vectors**: Registrant strings with their expected
//!   explicit/pattern classification, exportable as JSON for other
//!   implementations
//! - **Generators**: Proptest strategies for registrants, entries and ledgers
//! - **Fixtures**: Ready-made catalogs, labels and editors
//!
//! ## Classification Vectors
//!
//! ```rust
//! use grantbook_core::NamingRules;
//! use grantbook_testkit::vectors::all_vectors;
//!
//! let rules = NamingRules::default();
//! for vector in all_vectors() {
//!     assert_eq!(rules.classify(vector.input, vector.kind), vector.expected, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use grantbook_testkit::generators::LedgerParams;
//!
//! proptest! {
//!     #[test]
//!     fn rows_keep_order(params: LedgerParams) {
//!         let ledger = params.build();
//!         prop_assert_eq!(ledger.len(), params.entries.len());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use grantbook_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::users();
//! let mut editor = fixture.editor();
//! assert!(editor.can_add());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{standard_labels, TestFixture};
pub use generators::LedgerParams;
pub use vectors::{all_vectors, vectors_json, ClassificationVector};
