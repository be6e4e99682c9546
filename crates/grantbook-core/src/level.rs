//! Access levels.
//!
//! Levels are totally ordered from weakest to strongest. Each level has a
//! short code that is its stable identity on the wire and in option lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Strength of access granted to a registrant.
///
/// Ordering: `None < Exclude < View < Clone < Push < Create < Delete < Rewind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PermissionLevel {
    /// No access. Also the "nothing chosen" sentinel for new grants.
    #[serde(rename = "N")]
    None,
    /// Explicitly excluded, even if another grant would match.
    #[serde(rename = "X")]
    Exclude,
    /// May see the registrant but not fetch it.
    #[serde(rename = "V")]
    View,
    /// Read access.
    #[serde(rename = "R")]
    Clone,
    /// Read and write.
    #[serde(rename = "RW")]
    Push,
    /// Read, write and create refs.
    #[serde(rename = "RWC")]
    Create,
    /// Read, write, create and delete refs.
    #[serde(rename = "RWD")]
    Delete,
    /// Full control including history rewrites.
    #[serde(rename = "RW+")]
    Rewind,
}

impl PermissionLevel {
    /// Every level, weakest first. Offered when editing an existing entry.
    pub const ALL: [PermissionLevel; 8] = [
        PermissionLevel::None,
        PermissionLevel::Exclude,
        PermissionLevel::View,
        PermissionLevel::Clone,
        PermissionLevel::Push,
        PermissionLevel::Create,
        PermissionLevel::Delete,
        PermissionLevel::Rewind,
    ];

    /// Levels offered for a brand-new grant. Excludes the `None` sentinel.
    pub const NEW_GRANT: [PermissionLevel; 7] = [
        PermissionLevel::Exclude,
        PermissionLevel::View,
        PermissionLevel::Clone,
        PermissionLevel::Push,
        PermissionLevel::Create,
        PermissionLevel::Delete,
        PermissionLevel::Rewind,
    ];

    /// Stable short code for this level.
    pub const fn code(&self) -> &'static str {
        match self {
            PermissionLevel::None => "N",
            PermissionLevel::Exclude => "X",
            PermissionLevel::View => "V",
            PermissionLevel::Clone => "R",
            PermissionLevel::Push => "RW",
            PermissionLevel::Create => "RWC",
            PermissionLevel::Delete => "RWD",
            PermissionLevel::Rewind => "RW+",
        }
    }

    /// Parse a level from its short code.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.code() == code)
            .ok_or_else(|| CoreError::UnknownLevelCode(code.to_string()))
    }

    /// Whether this level may be chosen for a new grant.
    pub fn is_grantable(&self) -> bool {
        *self != PermissionLevel::None
    }

    /// Check if this level is at least as strong as `other`.
    pub fn at_least(&self, other: PermissionLevel) -> bool {
        *self >= other
    }

    /// Check if this level is strictly stronger than `other`.
    pub fn exceeds(&self, other: PermissionLevel) -> bool {
        *self > other
    }

    /// Role string handed to the enforcing authority: `"<code>:<registrant>"`.
    pub fn as_role(&self, registrant: &str) -> String {
        format!("{}:{}", self.code(), registrant)
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PermissionLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
