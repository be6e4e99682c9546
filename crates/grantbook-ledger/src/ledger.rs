//! The permission ledger.
//!
//! An insertion-ordered list of entries for one subject. The ledger does
//! not sort, does not deduplicate registrants, and never re-derives an
//! entry's type from its registrant string.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use grantbook_core::{EntryId, LedgerDigest, PermissionLevel, PermissionType};

use crate::entry::PermissionEntry;
use crate::error::{LedgerError, Result};

/// An entry together with its ledger id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredEntry {
    id: EntryId,
    entry: PermissionEntry,
}

/// One row of the ledger as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerRow<'a> {
    pub id: EntryId,
    pub entry: &'a PermissionEntry,
    /// Whether the level selector for this row is interactive.
    pub editable: bool,
    /// `""`, `"owner"` or `"regex"`.
    pub tag: &'static str,
}

/// Encoded form of a ledger.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    next_id: EntryId,
    entries: Vec<StoredEntry>,
}

/// Source of ledger epochs. Every ledger instance gets its own.
static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

fn fresh_epoch() -> u64 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

/// Ordered registrant permissions for one subject.
#[derive(Debug)]
pub struct Ledger {
    /// Entries in display order.
    entries: Vec<StoredEntry>,

    /// Id handed to the next appended entry.
    next_id: EntryId,

    /// Identity of this instance. Not part of snapshots.
    epoch: u64,

    /// Bumped on every mutation. Not part of snapshots.
    generation: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: EntryId::default(),
            epoch: fresh_epoch(),
            generation: 0,
        }
    }
}

// A clone evolves on its own, so it gets its own epoch.
impl Clone for Ledger {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            next_id: self.next_id,
            epoch: fresh_epoch(),
            generation: self.generation,
        }
    }
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from upstream entries, keeping their order.
    pub fn from_entries(entries: impl IntoIterator<Item = PermissionEntry>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.append(entry);
        }
        ledger
    }

    /// Append an entry at the end and return its id.
    pub fn append(&mut self, entry: PermissionEntry) -> EntryId {
        let id = self.next_id;
        self.next_id = id.next();
        self.entries.push(StoredEntry { id, entry });
        self.generation += 1;
        id
    }

    /// Change the level of an editable entry.
    ///
    /// Fails without touching the ledger when the id is unknown or the
    /// entry is an owner or pattern grant. Only `level` changes; the
    /// entry keeps its id and position.
    pub fn update(&mut self, id: EntryId, level: PermissionLevel) -> Result<&PermissionEntry> {
        let stored = self
            .entries
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or(LedgerError::EntryNotFound(id))?;

        if !stored.entry.is_editable() {
            tracing::warn!(
                "refusing to change level of {} entry {} ({})",
                stored.entry.permission_type,
                id,
                stored.entry.registrant
            );
            return Err(LedgerError::NotEditable {
                id,
                permission_type: stored.entry.permission_type,
            });
        }

        if stored.entry.level != level {
            tracing::debug!(
                "entry {} ({}) level {} -> {}",
                id,
                stored.entry.registrant,
                stored.entry.level,
                level
            );
            stored.entry.level = level;
            self.generation += 1;
        }

        Ok(&stored.entry)
    }

    /// Get an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&PermissionEntry> {
        self.entries
            .iter()
            .find(|stored| stored.id == id)
            .map(|stored| &stored.entry)
    }

    /// Whether the entry with this id may be edited.
    ///
    /// Unknown ids are not editable.
    pub fn is_editable(&self, id: EntryId) -> bool {
        self.get(id).map_or(false, PermissionEntry::is_editable)
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = LedgerRow<'_>> {
        self.entries.iter().map(|stored| LedgerRow {
            id: stored.id,
            entry: &stored.entry,
            editable: stored.entry.is_editable(),
            tag: stored.entry.display_tag(),
        })
    }

    /// Rows in insertion order, collected.
    pub fn list(&self) -> Vec<LedgerRow<'_>> {
        self.rows().collect()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &PermissionEntry> {
        self.entries.iter().map(|stored| &stored.entry)
    }

    /// Editable entries in insertion order.
    pub fn editable_entries(&self) -> impl Iterator<Item = &PermissionEntry> {
        self.entries().filter(|entry| entry.is_editable())
    }

    /// Entries of one origin type.
    pub fn entries_of(&self, permission_type: PermissionType) -> impl Iterator<Item = &PermissionEntry> {
        self.entries()
            .filter(move |entry| entry.permission_type == permission_type)
    }

    /// Role strings for every entry, in order.
    pub fn roles(&self) -> Vec<String> {
        self.entries().map(PermissionEntry::as_role).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutation counter. Anything derived from the ledger is stale once
    /// this moves.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identity of this ledger instance.
    ///
    /// Distinct for every ledger created, cloned or decoded in this
    /// process. Generations are only comparable within one epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshots
    // ─────────────────────────────────────────────────────────────────────────

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let snapshot = Snapshot {
            next_id: self.next_id,
            entries: self.entries.clone(),
        };
        let mut buf = Vec::new();
        ciborium::into_writer(&snapshot, &mut buf)
            .map_err(|e| LedgerError::Snapshot(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    ///
    /// Rejects snapshots whose ids are not strictly increasing, are not
    /// below the recorded next id, or leave no id for another append.
    /// The decoded ledger starts a new epoch.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: Snapshot =
            ciborium::from_reader(bytes).map_err(|e| LedgerError::Snapshot(e.to_string()))?;

        let ordered = snapshot.entries.windows(2).all(|w| w[0].id < w[1].id);
        let bounded = snapshot
            .entries
            .last()
            .map_or(true, |last| last.id < snapshot.next_id);
        if !ordered || !bounded {
            return Err(LedgerError::Snapshot("entry ids out of order".into()));
        }
        if snapshot.next_id.get() == u64::MAX {
            return Err(LedgerError::Snapshot("entry id space exhausted".into()));
        }

        Ok(Self {
            entries: snapshot.entries,
            next_id: snapshot.next_id,
            epoch: fresh_epoch(),
            generation: 0,
        })
    }

    /// Digest of the snapshot bytes.
    pub fn digest(&self) -> Result<LedgerDigest> {
        Ok(LedgerDigest::hash(&self.to_bytes()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantbook_core::RegistrantKind;
    use grantbook_testkit::generators;
    use proptest::prelude::*;

    fn sample_ledger() -> (Ledger, EntryId, EntryId, EntryId) {
        let mut ledger = Ledger::new();
        let owner = ledger.append(PermissionEntry::owner("carol", RegistrantKind::User, PermissionLevel::Rewind));
        let explicit = ledger.append(PermissionEntry::explicit("alice", RegistrantKind::User, PermissionLevel::Clone));
        let pattern = ledger.append(PermissionEntry::pattern("ops-.*", RegistrantKind::User, PermissionLevel::Push));
        (ledger, owner, explicit, pattern)
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let (ledger, owner, explicit, pattern) = sample_ledger();
        let rows = ledger.list();

        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![owner, explicit, pattern]);
        assert_eq!(rows.iter().map(|r| r.tag).collect::<Vec<_>>(), vec!["owner", "", "regex"]);
        assert_eq!(rows.iter().map(|r| r.editable).collect::<Vec<_>>(), vec![false, true, false]);
    }

    #[test]
    fn test_update_explicit_changes_only_level() {
        let (mut ledger, _, explicit, _) = sample_ledger();
        let before = ledger.list().iter().map(|r| (r.id, r.entry.clone())).collect::<Vec<_>>();

        let updated = ledger.update(explicit, PermissionLevel::Delete).unwrap();
        assert_eq!(updated.level, PermissionLevel::Delete);
        assert_eq!(updated.registrant, "alice");
        assert_eq!(updated.permission_type, PermissionType::Explicit);

        let after = ledger.list();
        assert_eq!(after.len(), before.len());
        for (row, (id, entry)) in after.iter().zip(before.iter()) {
            assert_eq!(row.id, *id);
            if row.id == explicit {
                assert_eq!(row.entry.registrant, entry.registrant);
                assert_eq!(row.entry.kind, entry.kind);
                assert_eq!(row.entry.permission_type, entry.permission_type);
            } else {
                assert_eq!(row.entry, entry);
            }
        }
    }

    #[test]
    fn test_update_refuses_owner_and_pattern() {
        let (mut ledger, owner, _, pattern) = sample_ledger();
        let generation = ledger.generation();
        let before = ledger.roles();

        assert_eq!(
            ledger.update(owner, PermissionLevel::View),
            Err(LedgerError::NotEditable { id: owner, permission_type: PermissionType::Owner })
        );
        assert_eq!(
            ledger.update(pattern, PermissionLevel::View),
            Err(LedgerError::NotEditable { id: pattern, permission_type: PermissionType::Pattern })
        );

        assert_eq!(ledger.roles(), before);
        assert_eq!(ledger.generation(), generation);
    }

    #[test]
    fn test_update_unknown_id() {
        let (mut ledger, _, _, _) = sample_ledger();
        let missing = EntryId::new(99);
        assert_eq!(ledger.update(missing, PermissionLevel::View), Err(LedgerError::EntryNotFound(missing)));
        assert!(!ledger.is_editable(missing));
    }

    #[test]
    fn test_update_same_level_keeps_generation() {
        let (mut ledger, _, explicit, _) = sample_ledger();
        let generation = ledger.generation();
        ledger.update(explicit, PermissionLevel::Clone).unwrap();
        assert_eq!(ledger.generation(), generation);
        ledger.update(explicit, PermissionLevel::None).unwrap();
        assert_eq!(ledger.generation(), generation + 1);
    }

    #[test]
    fn test_duplicate_registrants_allowed() {
        let mut ledger = Ledger::new();
        let a = ledger.append(PermissionEntry::explicit("x", RegistrantKind::User, PermissionLevel::View));
        let b = ledger.append(PermissionEntry::explicit("x", RegistrantKind::User, PermissionLevel::Push));
        assert_ne!(a, b);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.roles(), vec!["V:x".to_string(), "RW:x".to_string()]);
    }

    #[test]
    fn test_snapshot_preserves_ids_and_order() {
        let (mut ledger, _, explicit, _) = sample_ledger();
        ledger.update(explicit, PermissionLevel::Push).unwrap();

        let bytes = ledger.to_bytes().unwrap();
        let mut restored = Ledger::from_bytes(&bytes).unwrap();

        assert_eq!(restored.list(), ledger.list());
        assert_eq!(restored.digest().unwrap(), ledger.digest().unwrap());

        // Ids keep counting from where the original left off.
        let next = restored.append(PermissionEntry::explicit("dave", RegistrantKind::User, PermissionLevel::View));
        assert!(next > explicit);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(Ledger::from_bytes(b"not cbor"), Err(LedgerError::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_rejects_exhausted_id_space() {
        let snapshot = Snapshot {
            next_id: EntryId::new(u64::MAX),
            entries: vec![StoredEntry {
                id: EntryId::new(3),
                entry: PermissionEntry::explicit("alice", RegistrantKind::User, PermissionLevel::View),
            }],
        };
        let mut bytes = Vec::new();
        ciborium::into_writer(&snapshot, &mut bytes).unwrap();

        assert!(matches!(Ledger::from_bytes(&bytes), Err(LedgerError::Snapshot(_))));
    }

    #[test]
    fn test_decoded_and_cloned_ledgers_get_new_epochs() {
        let (ledger, _, _, _) = sample_ledger();
        let restored = Ledger::from_bytes(&ledger.to_bytes().unwrap()).unwrap();
        let empty = Ledger::new();
        let cloned = ledger.clone();

        assert_eq!(restored.generation(), empty.generation());
        assert_ne!(restored.epoch(), empty.epoch());
        assert_ne!(restored.epoch(), ledger.epoch());
        assert_ne!(cloned.epoch(), ledger.epoch());
        assert_eq!(cloned.generation(), ledger.generation());
    }

    #[test]
    fn test_entries_of_filters_by_type() {
        let (mut ledger, _, _, _) = sample_ledger();
        ledger.append(PermissionEntry::explicit("erin", RegistrantKind::User, PermissionLevel::View));

        let explicit: Vec<_> = ledger
            .entries_of(PermissionType::Explicit)
            .map(|e| e.registrant.as_str())
            .collect();
        assert_eq!(explicit, vec!["alice", "erin"]);
        assert!(ledger.entries_of(PermissionType::Owner).all(PermissionEntry::is_owner));
        assert!(ledger.entries_of(PermissionType::Pattern).all(PermissionEntry::is_pattern));
        assert_eq!(ledger.entries_of(PermissionType::Pattern).count(), 1);
    }

    #[test]
    fn test_digest_tracks_content() {
        let (mut ledger, _, explicit, _) = sample_ledger();
        let before = ledger.digest().unwrap();
        ledger.update(explicit, PermissionLevel::Rewind).unwrap();
        assert_ne!(ledger.digest().unwrap(), before);
    }

    // Only core types cross over from the testkit; entries are built here.
    fn arb_entry() -> impl Strategy<Value = PermissionEntry> {
        ("[a-z]{1,6}", generators::level(), generators::permission_type())
            .prop_map(|(name, level, ty)| PermissionEntry::new(name, RegistrantKind::Team, level, ty))
    }

    proptest! {
        #[test]
        fn editable_iff_explicit(entries in prop::collection::vec(arb_entry(), 0..16)) {
            let ledger = Ledger::from_entries(entries);
            for row in ledger.rows() {
                prop_assert_eq!(row.editable, row.entry.permission_type == PermissionType::Explicit);
            }
        }

        #[test]
        fn refused_update_leaves_ledger_unchanged(
            entries in prop::collection::vec(arb_entry(), 1..16),
            pick in any::<prop::sample::Index>(),
            level in generators::level(),
        ) {
            let mut ledger = Ledger::from_entries(entries);
            let row_id = ledger.list()[pick.index(ledger.len())].id;
            let before = ledger.to_bytes().unwrap();

            if ledger.update(row_id, level).is_err() {
                prop_assert!(!ledger.is_editable(row_id));
                prop_assert_eq!(ledger.to_bytes().unwrap(), before);
            }
        }
    }
}
