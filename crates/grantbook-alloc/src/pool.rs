//! Candidate pools.
//!
//! A pool is derived from a catalog and a ledger. It remembers which ledger
//! instance (its epoch) and which generation of it the pool was computed at,
//! so a cached pool can be recognised as stale after the ledger changes or
//! is replaced.

use grantbook_core::RegistrantKind;
use grantbook_ledger::Ledger;

/// Registrants still eligible for a new explicit grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    kind: RegistrantKind,
    registrants: Vec<String>,
    epoch: u64,
    generation: u64,
}

impl CandidatePool {
    pub(crate) fn new(kind: RegistrantKind, registrants: Vec<String>, ledger: &Ledger) -> Self {
        Self {
            kind,
            registrants,
            epoch: ledger.epoch(),
            generation: ledger.generation(),
        }
    }

    pub fn kind(&self) -> RegistrantKind {
        self.kind
    }

    pub fn contains(&self, registrant: &str) -> bool {
        self.registrants.iter().any(|r| r == registrant)
    }

    /// Drop a registrant from the pool. Returns whether it was present.
    pub fn remove(&mut self, registrant: &str) -> bool {
        match self.registrants.iter().position(|r| r == registrant) {
            Some(index) => {
                self.registrants.remove(index);
                true
            }
            None => false,
        }
    }

    /// No registrant left to offer; the add-grant flow should be hidden.
    pub fn is_exhausted(&self) -> bool {
        self.registrants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.registrants.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.registrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrants.is_empty()
    }

    /// Ledger generation this pool was computed at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `ledger` has changed in a way this pool has not seen.
    ///
    /// A different ledger instance is always stale, even at the same
    /// generation. [`GrantAllocator::submit`](crate::GrantAllocator::submit)
    /// keeps the pool it is handed in step, so a pool is only stale after a
    /// mutation made elsewhere.
    pub fn is_stale(&self, ledger: &Ledger) -> bool {
        self.epoch != ledger.epoch() || self.generation != ledger.generation()
    }

    pub(crate) fn observe(&mut self, ledger: &Ledger) {
        self.epoch = ledger.epoch();
        self.generation = ledger.generation();
    }

    /// Registrants in catalog order.
    pub fn into_vec(self) -> Vec<String> {
        self.registrants
    }
}
