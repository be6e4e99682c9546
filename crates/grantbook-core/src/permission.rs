//! How a permission entry came to exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a permission entry.
///
/// The type is decided once, when the entry is created, and is stored with
/// the entry from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionType {
    /// A grant for a literal registrant identifier. The only editable type.
    Explicit,

    /// A grant whose registrant string is a pattern matched by clients.
    ///
    /// Never editable: a pattern grant must not be silently overwritten
    /// from a row that looks like a single registrant.
    #[serde(alias = "regex")]
    Pattern,

    /// A grant inherited from ownership of the subject.
    Owner,
}

impl PermissionType {
    /// Whether entries of this type may have their level changed.
    pub fn is_editable(&self) -> bool {
        matches!(self, PermissionType::Explicit)
    }

    /// Presentation tag for a row of this type.
    ///
    /// Explicit rows carry no tag.
    pub const fn display_tag(&self) -> &'static str {
        match self {
            PermissionType::Explicit => "",
            PermissionType::Owner => "owner",
            PermissionType::Pattern => "regex",
        }
    }
}

impl fmt::Display for PermissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionType::Explicit => write!(f, "explicit"),
            PermissionType::Pattern => write!(f, "pattern"),
            PermissionType::Owner => write!(f, "owner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_explicit_is_editable() {
        assert!(PermissionType::Explicit.is_editable());
        assert!(!PermissionType::Pattern.is_editable());
        assert!(!PermissionType::Owner.is_editable());
    }

    #[test]
    fn test_display_tags_are_distinct() {
        assert_eq!(PermissionType::Explicit.display_tag(), "");
        assert_eq!(PermissionType::Owner.display_tag(), "owner");
        assert_eq!(PermissionType::Pattern.display_tag(), "regex");
    }

    #[test]
    fn test_regex_alias_deserializes() {
        let ty: PermissionType = serde_json::from_str("\"regex\"").unwrap();
        assert_eq!(ty, PermissionType::Pattern);
    }
}
