//! # Grantbook Allocator
//!
//! Decides who may still receive a new grant, and turns a submitted
//! (registrant, level) pair into a ledger entry.
//!
//! ## Candidate Pool
//!
//! The pool starts from the caller's [`RegistrantCatalog`] and drops every
//! registrant that already has an *editable* entry in the ledger. A
//! registrant covered only by a pattern grant or an ownership grant stays
//! in the pool so it can still receive an explicit override.
//!
//! ## Submission
//!
//! [`GrantAllocator::submit`] rejects a request with no level chosen, then
//! classifies the registrant string (literal identifier or pattern),
//! appends a fresh entry and removes the registrant from the pool.

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod pool;

pub use allocator::{available_registrants, GrantAllocator, GrantRequest};
pub use catalog::RegistrantCatalog;
pub use error::{GrantError, Result};
pub use pool::CandidatePool;
