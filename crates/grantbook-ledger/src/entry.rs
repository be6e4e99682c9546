//! Registrant permission entries.
//!
//! An entry binds one registrant string to a level and records how the
//! entry came to exist. Editability follows from that origin alone.

use serde::{Deserialize, Serialize};

use grantbook_core::{DisplayName, NamingRules, PermissionLevel, PermissionType, RegistrantKind};

/// A single access-control row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Repository, user or team identifier, or a pattern over them.
    pub registrant: String,

    /// Namespace of the registrant.
    pub kind: RegistrantKind,

    /// Granted access level.
    pub level: PermissionLevel,

    /// How this entry came to exist. Fixed at creation.
    #[serde(rename = "type")]
    pub permission_type: PermissionType,
}

impl PermissionEntry {
    /// Create an entry with an explicit origin type.
    pub fn new(
        registrant: impl Into<String>,
        kind: RegistrantKind,
        level: PermissionLevel,
        permission_type: PermissionType,
    ) -> Self {
        Self {
            registrant: registrant.into(),
            kind,
            level,
            permission_type,
        }
    }

    /// An explicit grant for a literal identifier.
    pub fn explicit(registrant: impl Into<String>, kind: RegistrantKind, level: PermissionLevel) -> Self {
        Self::new(registrant, kind, level, PermissionType::Explicit)
    }

    /// A grant whose registrant is a pattern.
    pub fn pattern(registrant: impl Into<String>, kind: RegistrantKind, level: PermissionLevel) -> Self {
        Self::new(registrant, kind, level, PermissionType::Pattern)
    }

    /// A grant inherited from ownership.
    pub fn owner(registrant: impl Into<String>, kind: RegistrantKind, level: PermissionLevel) -> Self {
        Self::new(registrant, kind, level, PermissionType::Owner)
    }

    /// Whether the level of this entry may be changed.
    pub fn is_editable(&self) -> bool {
        self.permission_type.is_editable()
    }

    pub fn is_explicit(&self) -> bool {
        self.permission_type == PermissionType::Explicit
    }

    pub fn is_pattern(&self) -> bool {
        self.permission_type == PermissionType::Pattern
    }

    pub fn is_owner(&self) -> bool {
        self.permission_type == PermissionType::Owner
    }

    /// Presentation tag: `""`, `"owner"` or `"regex"`.
    pub fn display_tag(&self) -> &'static str {
        self.permission_type.display_tag()
    }

    /// Display form of the registrant under `rules`.
    pub fn display_name(&self, rules: &NamingRules) -> DisplayName {
        rules.display_name(&self.registrant, self.kind)
    }

    /// Role string for the enforcing authority.
    pub fn as_role(&self) -> String {
        self.level.as_role(&self.registrant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_only_when_explicit() {
        let explicit = PermissionEntry::explicit("alice", RegistrantKind::User, PermissionLevel::Push);
        let pattern = PermissionEntry::pattern("dev-.*", RegistrantKind::Team, PermissionLevel::Push);
        let owner = PermissionEntry::owner("bob", RegistrantKind::User, PermissionLevel::Rewind);

        assert!(explicit.is_editable());
        assert!(!pattern.is_editable());
        assert!(!owner.is_editable());

        assert_eq!(explicit.display_tag(), "");
        assert_eq!(pattern.display_tag(), "regex");
        assert_eq!(owner.display_tag(), "owner");
    }

    #[test]
    fn test_origin_predicates() {
        let explicit = PermissionEntry::explicit("alice", RegistrantKind::User, PermissionLevel::Push);
        let pattern = PermissionEntry::pattern("dev-.*", RegistrantKind::Team, PermissionLevel::Push);
        let owner = PermissionEntry::owner("bob", RegistrantKind::User, PermissionLevel::Rewind);

        assert!(explicit.is_explicit() && !explicit.is_pattern() && !explicit.is_owner());
        assert!(pattern.is_pattern() && !pattern.is_explicit() && !pattern.is_owner());
        assert!(owner.is_owner() && !owner.is_explicit() && !owner.is_pattern());
    }

    #[test]
    fn test_as_role() {
        let entry = PermissionEntry::explicit("tools/build.git", RegistrantKind::Repository, PermissionLevel::Clone);
        assert_eq!(entry.as_role(), "R:tools/build.git");
    }

    #[test]
    fn test_display_name_uses_kind() {
        let rules = NamingRules::default();
        let repo = PermissionEntry::explicit("tools/build.git", RegistrantKind::Repository, PermissionLevel::View);
        assert_eq!(repo.display_name(&rules), DisplayName::Repository("tools/build".into()));

        let team = PermissionEntry::explicit("tools", RegistrantKind::Team, PermissionLevel::View);
        assert_eq!(team.display_name(&rules), DisplayName::Plain("tools".into()));
    }
}
