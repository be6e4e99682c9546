//! Registrant naming rules.
//!
//! A registrant string is a literal identifier when every character is a
//! letter, an ASCII digit, or one of a small set of path-safe punctuation
//! marks. Anything else marks the string as a pattern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::permission::PermissionType;

/// Namespace a registrant identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrantKind {
    Repository,
    User,
    Team,
}

impl fmt::Display for RegistrantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrantKind::Repository => write!(f, "repository"),
            RegistrantKind::User => write!(f, "user"),
            RegistrantKind::Team => write!(f, "team"),
        }
    }
}

impl FromStr for RegistrantKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "repository" => Ok(RegistrantKind::Repository),
            "user" => Ok(RegistrantKind::User),
            "team" => Ok(RegistrantKind::Team),
            _ => Err(CoreError::UnknownRegistrantKind(s.to_string())),
        }
    }
}

/// How a registrant should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayName {
    /// A literal repository name with the storage suffix removed.
    Repository(String),
    /// The registrant string as stored.
    Plain(String),
}

impl DisplayName {
    /// The text to show.
    pub fn as_str(&self) -> &str {
        match self {
            DisplayName::Repository(name) | DisplayName::Plain(name) => name,
        }
    }
}

/// Rules for telling literal identifiers apart from patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Suffix of stored repository names, stripped before validation.
    pub repository_suffix: String,

    /// Punctuation allowed in literal identifiers besides letters and digits.
    pub literal_punctuation: Vec<char>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            repository_suffix: ".git".to_string(),
            literal_punctuation: vec!['/', '.', '_', '-', '~'],
        }
    }
}

/// Letters of any script and ASCII digits.
///
/// Numeric letters such as `Ⅷ`, superscripts such as `²` and non-ASCII
/// decimal digits are not identifier characters.
fn is_identifier_char(c: char) -> bool {
    (c.is_alphabetic() && !c.is_numeric()) || c.is_ascii_digit()
}

impl NamingRules {
    /// Find the first character not allowed in a literal identifier.
    pub fn find_invalid_character(&self, name: &str) -> Option<char> {
        name.chars()
            .find(|c| !is_identifier_char(*c) && !self.literal_punctuation.contains(c))
    }

    /// Remove the repository suffix, if present.
    pub fn strip_suffix<'a>(&self, name: &'a str) -> &'a str {
        if self.repository_suffix.is_empty() {
            return name;
        }
        name.strip_suffix(self.repository_suffix.as_str())
            .unwrap_or(name)
    }

    /// Normalize a raw registrant string of `kind` for validation.
    fn normalize<'a>(&self, name: &'a str, kind: RegistrantKind) -> &'a str {
        match kind {
            RegistrantKind::Repository => self.strip_suffix(name),
            RegistrantKind::User | RegistrantKind::Team => name,
        }
    }

    /// Whether `name` is a literal identifier of `kind`.
    pub fn is_literal(&self, name: &str, kind: RegistrantKind) -> bool {
        self.find_invalid_character(self.normalize(name, kind)).is_none()
    }

    /// Classify a newly submitted registrant string.
    ///
    /// Total: every string is either [`PermissionType::Explicit`] or
    /// [`PermissionType::Pattern`]. The empty string is explicit.
    pub fn classify(&self, name: &str, kind: RegistrantKind) -> PermissionType {
        if self.is_literal(name, kind) {
            PermissionType::Explicit
        } else {
            PermissionType::Pattern
        }
    }

    /// Display form of a stored registrant.
    pub fn display_name(&self, name: &str, kind: RegistrantKind) -> DisplayName {
        if kind == RegistrantKind::Repository {
            let stripped = self.strip_suffix(name);
            if self.find_invalid_character(stripped).is_none() {
                return DisplayName::Repository(stripped.to_string());
            }
        }
        DisplayName::Plain(name.to_string())
    }
}
