//! Classification vectors.
//!
//! Known registrant strings and how they must classify under the default
//! naming rules. Every implementation of the editor must agree on these.

use serde::Serialize;

use grantbook_core::{PermissionType, RegistrantKind};

/// A single classification vector.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw submitted registrant string.
    pub input: &'static str,
    /// Kind the string was submitted for.
    pub kind: RegistrantKind,
    /// Expected classification.
    pub expected: PermissionType,
}

/// Get all classification vectors.
pub fn all_vectors() -> Vec<ClassificationVector> {
    vec![
        ClassificationVector {
            name: "plain repository",
            input: "my-repo",
            kind: RegistrantKind::Repository,
            expected: PermissionType::Explicit,
        },
        ClassificationVector {
            name: "nested repository with suffix",
            input: "group/sub/project.git",
            kind: RegistrantKind::Repository,
            expected: PermissionType::Explicit,
        },
        ClassificationVector {
            name: "repository pattern",
            input: "personal/.*.git",
            kind: RegistrantKind::Repository,
            expected: PermissionType::Pattern,
        },
        ClassificationVector {
            name: "user with punctuation",
            input: "j.doe_2~x",
            kind: RegistrantKind::User,
            expected: PermissionType::Explicit,
        },
        ClassificationVector {
            name: "user with email",
            input: "jdoe@example.com",
            kind: RegistrantKind::User,
            expected: PermissionType::Pattern,
        },
        ClassificationVector {
            name: "team wildcard",
            input: "team-.*",
            kind: RegistrantKind::Team,
            expected: PermissionType::Pattern,
        },
        ClassificationVector {
            name: "team alternation",
            input: "(dev|ops)",
            kind: RegistrantKind::Team,
            expected: PermissionType::Pattern,
        },
        ClassificationVector {
            name: "non-ascii letters",
            input: "équipe",
            kind: RegistrantKind::Team,
            expected: PermissionType::Explicit,
        },
        ClassificationVector {
            name: "superscript digit",
            input: "v²",
            kind: RegistrantKind::User,
            expected: PermissionType::Pattern,
        },
        ClassificationVector {
            name: "roman numeral letter",
            input: "release-Ⅷ",
            kind: RegistrantKind::Team,
            expected: PermissionType::Pattern,
        },
        ClassificationVector {
            name: "empty string",
            input: "",
            kind: RegistrantKind::User,
            expected: PermissionType::Explicit,
        },
        ClassificationVector {
            name: "whitespace",
            input: "two words",
            kind: RegistrantKind::User,
            expected: PermissionType::Pattern,
        },
    ]
}

/// All vectors as pretty-printed JSON.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantbook_core::NamingRules;

    #[test]
    fn test_vectors_match_default_rules() {
        let rules = NamingRules::default();
        for vector in all_vectors() {
            assert_eq!(
                rules.classify(vector.input, vector.kind),
                vector.expected,
                "Vector '{}' classified differently",
                vector.name
            );
        }
    }

    #[test]
    fn test_vectors_json() {
        let json = vectors_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &parsed[0];
        assert_eq!(first["input"], "my-repo");
        assert_eq!(first["kind"], "repository");
        assert_eq!(first["expected"], "explicit");
    }
}
