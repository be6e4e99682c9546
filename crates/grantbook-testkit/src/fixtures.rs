//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use grantbook::{EditorConfig, PermissionEditor};
use grantbook_alloc::RegistrantCatalog;
use grantbook_core::{LevelLabels, PermissionLevel, RegistrantKind};
use grantbook_ledger::PermissionEntry;

/// Labels resembling what a host would pass in.
pub fn standard_labels() -> LevelLabels {
    LevelLabels::new()
        .with(PermissionLevel::None, "none")
        .with(PermissionLevel::Exclude, "exclude")
        .with(PermissionLevel::View, "view")
        .with(PermissionLevel::Clone, "clone")
        .with(PermissionLevel::Push, "push")
        .with(PermissionLevel::Create, "create")
        .with(PermissionLevel::Delete, "delete")
        .with(PermissionLevel::Rewind, "rewind")
}

/// A catalog plus starting entries for one editing session.
pub struct TestFixture {
    pub catalog: RegistrantCatalog,
    pub entries: Vec<PermissionEntry>,
}

impl TestFixture {
    /// Users of a repository: one owner, one explicit grant, one pattern.
    pub fn users() -> Self {
        let kind = RegistrantKind::User;
        Self {
            catalog: RegistrantCatalog::new(kind, ["admin", "alice", "bob", "carol", "dave"]),
            entries: vec![
                PermissionEntry::owner("admin", kind, PermissionLevel::Rewind),
                PermissionEntry::explicit("alice", kind, PermissionLevel::Push),
                PermissionEntry::pattern("ca.*", kind, PermissionLevel::View),
            ],
        }
    }

    /// Repositories a team has access to.
    pub fn repositories() -> Self {
        let kind = RegistrantKind::Repository;
        Self {
            catalog: RegistrantCatalog::new(
                kind,
                ["tools/build.git", "tools/deploy.git", "web/site.git"],
            ),
            entries: vec![
                PermissionEntry::explicit("tools/build.git", kind, PermissionLevel::Clone),
                PermissionEntry::pattern("tools/.*", kind, PermissionLevel::View),
            ],
        }
    }

    /// A catalog with every registrant already explicitly granted.
    pub fn exhausted() -> Self {
        let kind = RegistrantKind::Team;
        Self {
            catalog: RegistrantCatalog::new(kind, ["dev", "ops"]),
            entries: vec![
                PermissionEntry::explicit("dev", kind, PermissionLevel::Push),
                PermissionEntry::explicit("ops", kind, PermissionLevel::Clone),
            ],
        }
    }

    /// Start an editor with standard labels and default configuration.
    pub fn editor(&self) -> PermissionEditor {
        self.editor_with(EditorConfig::default())
    }

    /// Start an editor with standard labels and `config`.
    pub fn editor_with(&self, config: EditorConfig) -> PermissionEditor {
        PermissionEditor::new(
            self.catalog.clone(),
            self.entries.iter().cloned(),
            standard_labels(),
            config,
        )
    }
}
