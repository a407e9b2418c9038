//! Route matching against the menu.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::menu::MenuModel;

/// Result of matching a route path against the menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathMatch {
    /// Path of the active entry, if any entry matches exactly.
    pub active_path: Option<String>,
    /// Ids of every section that contains the active entry.
    pub containing_sections: BTreeSet<String>,
}

impl PathMatch {
    /// Whether any entry matched.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.active_path.is_some()
    }
}

/// Match `current_path` against every entry of `model`.
///
/// Comparison is exact string equality: no prefix matching, no wildcard
/// segments and no trailing-slash normalization. `/learn/setup/` does not
/// match an entry at `/learn/setup`.
#[must_use]
pub fn match_path(current_path: &str, model: &MenuModel) -> PathMatch {
    let containing_sections: BTreeSet<String> = model
        .sections()
        .iter()
        .filter(|section| section.entries.iter().any(|e| e.path == current_path))
        .map(|section| section.id.clone())
        .collect();

    if containing_sections.is_empty() {
        return PathMatch::default();
    }

    PathMatch {
        active_path: Some(current_path.to_owned()),
        containing_sections,
    }
}
