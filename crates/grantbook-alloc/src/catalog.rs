//! Registrant catalogs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use grantbook_core::RegistrantKind;

/// Every known registrant of one kind, as supplied by the caller.
///
/// Order is kept for display; repeated identifiers are collapsed to their
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrantCatalog {
    kind: RegistrantKind,
    registrants: Vec<String>,
}

impl RegistrantCatalog {
    /// Create a catalog of `kind` from caller-supplied identifiers.
    pub fn new<I, S>(kind: RegistrantKind, registrants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let registrants = registrants
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { kind, registrants }
    }

    /// An empty catalog.
    pub fn empty(kind: RegistrantKind) -> Self {
        Self {
            kind,
            registrants: Vec::new(),
        }
    }

    pub fn kind(&self) -> RegistrantKind {
        self.kind
    }

    pub fn contains(&self, registrant: &str) -> bool {
        self.registrants.iter().any(|r| r == registrant)
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
}
