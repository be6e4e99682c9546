//! The permission editor: one subject's editing session.
//!
//! The editor ties the ledger, the allocator, the caller's level labels and
//! a cached candidate pool into the interface the presentation layer talks
//! to.

use serde::{Deserialize, Serialize};

use grantbook_alloc::{CandidatePool, GrantAllocator, GrantRequest, RegistrantCatalog};
use grantbook_core::{
    DisplayName, EntryId, LedgerDigest, LevelChoice, LevelLabels, NamingRules, PermissionLevel,
    RegistrantKind,
};
use grantbook_ledger::{Ledger, LedgerRow, PermissionEntry};

use crate::error::{EditorError, Result};

/// Configuration for the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Literal-identifier rules used to classify new registrants.
    pub naming: NamingRules,
    /// Whether [`PermissionEditor::restore`] checks the snapshot digest.
    pub verify_snapshot_digest: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            naming: NamingRules::default(),
            verify_snapshot_digest: true,
        }
    }
}

/// Editing session for the registrant permissions of one subject.
///
/// Not shared between editors. Every mutating call either applies fully
/// or returns an error with nothing changed.
#[derive(Debug, Clone)]
pub struct PermissionEditor {
    /// Existing and newly added permissions.
    ledger: Ledger,
    /// Catalog and classification rules.
    allocator: GrantAllocator,
    /// Caller-supplied level labels.
    labels: LevelLabels,
    /// Configuration.
    config: EditorConfig,
    /// Cached candidate pool, refreshed when the ledger moves on.
    pool: CandidatePool,
}

impl PermissionEditor {
    /// Start a session over `entries` with registrants from `catalog`.
    pub fn new(
        catalog: RegistrantCatalog,
        entries: impl IntoIterator<Item = PermissionEntry>,
        labels: LevelLabels,
        config: EditorConfig,
    ) -> Self {
        Self::with_ledger(catalog, Ledger::from_entries(entries), labels, config)
    }

    /// Start a session over an existing ledger.
    pub fn with_ledger(
        catalog: RegistrantCatalog,
        ledger: Ledger,
        labels: LevelLabels,
        config: EditorConfig,
    ) -> Self {
        let allocator = GrantAllocator::new(catalog, config.naming.clone());
        let pool = allocator.available_registrants(&ledger);
        Self {
            ledger,
            allocator,
            labels,
            config,
            pool,
        }
    }

    pub fn kind(&self) -> RegistrantKind {
        self.allocator.kind()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Ledger rows in display order.
    pub fn rows(&self) -> Vec<LedgerRow<'_>> {
        self.ledger.list()
    }

    /// How to show the registrant of `row`.
    pub fn registrant_display(&self, row: &LedgerRow<'_>) -> DisplayName {
        row.entry.display_name(&self.config.naming)
    }

    /// Label for a level.
    pub fn level_label(&self, level: PermissionLevel) -> &str {
        self.labels.label(level)
    }

    /// Choices for the level selector of an existing row.
    pub fn edit_choices(&self) -> Vec<LevelChoice> {
        self.labels.choices(&PermissionLevel::ALL)
    }

    /// Choices for the level selector of the add form.
    pub fn grant_choices(&self) -> Vec<LevelChoice> {
        self.labels.choices(&PermissionLevel::NEW_GRANT)
    }

    /// Registrants that may still receive a new grant.
    pub fn available(&mut self) -> &CandidatePool {
        if self.pool.is_stale(&self.ledger) {
            self.refresh_pool();
        }
        &self.pool
    }

    /// Whether the add-grant flow should be offered.
    pub fn can_add(&mut self) -> bool {
        !self.available().is_exhausted()
    }

    /// An empty add-form request for this session's kind.
    pub fn new_request(&self) -> GrantRequest {
        GrantRequest::new(self.kind())
    }

    /// Role strings for the enforcing authority.
    pub fn roles(&self) -> Vec<String> {
        self.ledger.roles()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edit Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a new grant from the add form.
    pub fn submit(&mut self, request: &GrantRequest) -> Result<PermissionEntry> {
        if self.pool.is_stale(&self.ledger) {
            self.refresh_pool();
        }
        Ok(self
            .allocator
            .submit(request, &mut self.ledger, &mut self.pool)?)
    }

    /// Add a new grant, provided the ledger still matches `expected`.
    pub fn submit_checked(
        &mut self,
        request: &GrantRequest,
        expected: &LedgerDigest,
    ) -> Result<PermissionEntry> {
        self.ensure_digest(expected)?;
        self.submit(request)
    }

    /// Change the level of an explicit entry.
    pub fn update(&mut self, id: EntryId, level: PermissionLevel) -> Result<PermissionEntry> {
        Ok(self.ledger.update(id, level)?.clone())
    }

    /// Change the level of an explicit entry from a submitted choice key.
    pub fn update_by_key(&mut self, id: EntryId, key: &str) -> Result<PermissionEntry> {
        let level = self.labels.resolve(key)?;
        self.update(id, level)
    }

    /// Replace the registrant catalog, e.g. after registrants were created
    /// or deleted elsewhere.
    pub fn set_catalog(&mut self, catalog: RegistrantCatalog) {
        self.allocator.set_catalog(catalog);
        self.refresh_pool();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshots
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode the ledger so it can be carried to a later request.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(self.ledger.to_bytes()?)
    }

    /// Digest of the current ledger.
    pub fn digest(&self) -> Result<LedgerDigest> {
        Ok(self.ledger.digest()?)
    }

    /// Replace the ledger with a previously taken snapshot.
    ///
    /// When digest verification is enabled, `expected` must match the
    /// digest of the decoded ledger.
    pub fn restore(&mut self, bytes: &[u8], expected: &LedgerDigest) -> Result<()> {
        let ledger = Ledger::from_bytes(bytes)?;
        if self.config.verify_snapshot_digest {
            let actual = ledger.digest()?;
            if actual != *expected {
                tracing::warn!("snapshot digest mismatch: expected {}, got {}", expected, actual);
                return Err(EditorError::StaleSnapshot {
                    expected: *expected,
                    actual,
                });
            }
        }
        self.ledger = ledger;
        self.refresh_pool();
        Ok(())
    }

    fn ensure_digest(&self, expected: &LedgerDigest) -> Result<()> {
        let actual = self.ledger.digest()?;
        if actual != *expected {
            tracing::warn!("ledger changed since render: expected {}, got {}", expected, actual);
            return Err(EditorError::StaleSnapshot {
                expected: *expected,
                actual,
            });
        }
        Ok(())
    }

    fn refresh_pool(&mut self) {
        self.pool = self.allocator.available_registrants(&self.ledger);
    }
}
