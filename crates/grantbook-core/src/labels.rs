//! Display labels for permission levels.
//!
//! Labels are supplied by the caller (usually already localized). They are
//! only ever used to render choices; no decision depends on them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::level::PermissionLevel;

/// Caller-supplied mapping from level to human-readable label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLabels {
    labels: HashMap<PermissionLevel, String>,
}

/// One selectable level in a choice control.
///
/// `key` is the level code, so an option keeps its identity even if the
/// list it was rendered from is reordered before the choice comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChoice {
    pub level: PermissionLevel,
    pub key: &'static str,
    pub label: String,
}

impl LevelLabels {
    /// Create an empty mapping. Every level falls back to its code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label for a level.
    pub fn with(mut self, level: PermissionLevel, label: impl Into<String>) -> Self {
        self.labels.insert(level, label.into());
        self
    }

    /// Label for `level`, or its code when none was supplied.
    pub fn label(&self, level: PermissionLevel) -> &str {
        self.labels
            .get(&level)
            .map(String::as_str)
            .unwrap_or_else(|| level.code())
    }

    /// Build choices for `levels`, in the order given.
    pub fn choices(&self, levels: &[PermissionLevel]) -> Vec<LevelChoice> {
        levels
            .iter()
            .map(|&level| LevelChoice {
                level,
                key: level.code(),
                label: self.label(level).to_string(),
            })
            .collect()
    }

    /// Resolve a submitted choice key back to its level.
    pub fn resolve(&self, key: &str) -> Result<PermissionLevel> {
        PermissionLevel::from_code(key)
    }
}

impl FromIterator<(PermissionLevel, String)> for LevelLabels {
    fn from_iter<I: IntoIterator<Item = (PermissionLevel, String)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_fallback() {
        let labels = LevelLabels::new().with(PermissionLevel::Clone, "clone");
        assert_eq!(labels.label(PermissionLevel::Clone), "clone");
        assert_eq!(labels.label(PermissionLevel::Push), "RW");
    }

    #[test]
    fn test_choices_keyed_by_code() {
        let labels = LevelLabels::new()
            .with(PermissionLevel::View, "view")
            .with(PermissionLevel::Rewind, "rewind (RW+)");

        let choices = labels.choices(&[PermissionLevel::Rewind, PermissionLevel::View]);
        assert_eq!(choices[0].key, "RW+");
        assert_eq!(choices[0].label, "rewind (RW+)");
        assert_eq!(choices[1].level, PermissionLevel::View);

        // Position does not matter when resolving.
        assert_eq!(labels.resolve(choices[0].key), Ok(PermissionLevel::Rewind));
    }

    #[test]
    fn test_from_iterator() {
        let labels: LevelLabels = PermissionLevel::ALL
            .into_iter()
            .map(|level| (level, format!("level {}", level.code())))
            .collect();
        assert_eq!(labels.label(PermissionLevel::None), "level N");
    }
}
