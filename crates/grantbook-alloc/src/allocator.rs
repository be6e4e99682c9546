//! The grant allocator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use grantbook_core::{NamingRules, PermissionLevel, PermissionType, RegistrantKind};
use grantbook_ledger::{Ledger, PermissionEntry};

use crate::catalog::RegistrantCatalog;
use crate::error::{GrantError, Result};
use crate::pool::CandidatePool;

/// A new grant as submitted from the add form.
///
/// `level` is `None` until the user picks one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
    pub kind: RegistrantKind,
    pub registrant: String,
    pub level: Option<PermissionLevel>,
}

impl GrantRequest {
    /// An empty request for `kind`, as the add form starts out.
    pub fn new(kind: RegistrantKind) -> Self {
        Self {
            kind,
            registrant: String::new(),
            level: None,
        }
    }

    pub fn registrant(mut self, registrant: impl Into<String>) -> Self {
        self.registrant = registrant.into();
        self
    }

    pub fn level(mut self, level: PermissionLevel) -> Self {
        self.level = Some(level);
        self
    }
}

/// Registrants from `catalog` without an editable entry in `ledger`.
///
/// Only editable entries remove a registrant. Pattern and owner entries
/// leave their literal registrant in the pool.
pub fn available_registrants(catalog: &RegistrantCatalog, ledger: &Ledger) -> CandidatePool {
    let granted: HashSet<&str> = ledger
        .editable_entries()
        .map(|entry| entry.registrant.as_str())
        .collect();

    let registrants: Vec<String> = catalog
        .iter()
        .filter(|name| !granted.contains(name))
        .map(str::to_string)
        .collect();

    tracing::trace!(
        "{} pool: {} of {} registrants available at generation {}",
        catalog.kind(),
        registrants.len(),
        catalog.len(),
        ledger.generation()
    );

    CandidatePool::new(catalog.kind(), registrants, ledger)
}

/// Computes candidate pools and turns submitted requests into entries.
#[derive(Debug, Clone)]
pub struct GrantAllocator {
    catalog: RegistrantCatalog,
    rules: NamingRules,
}

impl GrantAllocator {
    /// Create an allocator over `catalog` using `rules` for classification.
    pub fn new(catalog: RegistrantCatalog, rules: NamingRules) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &RegistrantCatalog {
        &self.catalog
    }

    pub fn kind(&self) -> RegistrantKind {
        self.catalog.kind()
    }

    pub fn rules(&self) -> &NamingRules {
        &self.rules
    }

    /// Replace the catalog. Pools computed before this are stale.
    pub fn set_catalog(&mut self, catalog: RegistrantCatalog) {
        self.catalog = catalog;
    }

    /// The current candidate pool for `ledger`.
    pub fn available_registrants(&self, ledger: &Ledger) -> CandidatePool {
        available_registrants(&self.catalog, ledger)
    }

    /// Explicit for literal identifiers, pattern for everything else.
    pub fn classify_new_registrant(&self, text: &str, kind: RegistrantKind) -> PermissionType {
        self.rules.classify(text, kind)
    }

    /// Append a new grant to `ledger`.
    ///
    /// Rejects the request, touching nothing, when no grantable level was
    /// chosen. Otherwise builds a fresh entry from the request, appends it,
    /// and removes the registrant from `pool`. The request itself is never
    /// stored.
    ///
    /// Callers are expected to hide the add flow while the pool is
    /// exhausted; submitting anyway is not refused.
    pub fn submit(
        &self,
        request: &GrantRequest,
        ledger: &mut Ledger,
        pool: &mut CandidatePool,
    ) -> Result<PermissionEntry> {
        let level = match request.level {
            Some(level) if level.is_grantable() => level,
            _ => {
                tracing::debug!("rejected grant for {:?}: no level chosen", request.registrant);
                return Err(GrantError::LevelNotChosen);
            }
        };

        let permission_type = self.classify_new_registrant(&request.registrant, request.kind);
        let entry = PermissionEntry::new(request.registrant.clone(), request.kind, level, permission_type);

        let was_current = !pool.is_stale(ledger);
        let id = ledger.append(entry.clone());
        pool.remove(&entry.registrant);
        if was_current {
            pool.observe(ledger);
        }

        tracing::debug!(
            "added {} grant {} {} for {}",
            permission_type,
            id,
            level,
            entry.registrant
        );

        Ok(entry)
    }
}
