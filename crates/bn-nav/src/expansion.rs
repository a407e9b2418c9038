//! Which sidebar sections are expanded.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::matcher::PathMatch;
use crate::menu::MenuModel;

/// Expanded flag per section id.
///
/// Keys are exactly the section ids of the model the state was last seeded
/// or reseeded from. Transitions return a new value and leave `self` intact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpansionState {
    flags: BTreeMap<String, bool>,
}

impl ExpansionState {
    /// Initial state: a section is open iff it contains the matched entry.
    #[must_use]
    pub fn seed(model: &MenuModel, matched: &PathMatch) -> Self {
        let flags = model
            .sections()
            .iter()
            .map(|s| (s.id.clone(), matched.containing_sections.contains(&s.id)))
            .collect();
        Self { flags }
    }

    /// Force the matched sections open, keeping every other flag.
    ///
    /// Never closes a section. Sections missing from the previous state start
    /// closed; ids no longer in the model are dropped.
    #[must_use]
    pub fn reseed(&self, model: &MenuModel, matched: &PathMatch) -> Self {
        let flags = model
            .sections()
            .iter()
            .map(|s| {
                let open = matched.containing_sections.contains(&s.id)
                    || self.flags.get(&s.id).copied().unwrap_or(false);
                (s.id.clone(), open)
            })
            .collect();
        Self { flags }
    }

    /// Flip one section.
    ///
    /// Unknown ids leave the state unchanged.
    #[must_use]
    pub fn toggle(&self, section_id: &str) -> Self {
        let mut next = self.clone();
        match next.flags.get_mut(section_id) {
            Some(open) => *open = !*open,
            None => tracing::warn!(section = %section_id, "Toggle for unknown menu section ignored"),
        }
        next
    }

    /// Whether the section is open. Unknown ids are closed.
    #[must_use]
    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.flags.get(section_id).copied().unwrap_or(false)
    }

    /// Whether the section id is a key of this state.
    #[must_use]
    pub fn contains(&self, section_id: &str) -> bool {
        self.flags.contains_key(section_id)
    }

    /// Iterate `(section_id, expanded)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::match_path;
    use crate::menu::{MenuEntry, MenuSection};
    use pretty_assertions::assert_eq;

    fn model() -> MenuModel {
        MenuModel::new(vec![
            MenuSection::new(
                "getting-started",
                "Getting Started",
                vec![
                    MenuEntry::new("Setup Guide", "/learn/setup"),
                    MenuEntry::new("Installation", "/learn/installation"),
                ],
            ),
            MenuSection::new(
                "advanced",
                "Advanced",
                vec![MenuEntry::new("Middleware", "/learn/middleware")],
            ),
            MenuSection::new(
                "recipes",
                "Recipes",
                vec![MenuEntry::new("File Uploads", "/learn/recipes/file-uploads")],
            ),
        ])
        .unwrap()
    }

    fn flags(state: &ExpansionState) -> Vec<(&str, bool)> {
        state.iter().collect()
    }

    #[test]
    fn test_seed_opens_only_active_section() {
        let m = model();
        let state = ExpansionState::seed(&m, &match_path("/learn/setup", &m));

        assert_eq!(
            flags(&state),
            vec![
                ("advanced", false),
                ("getting-started", true),
                ("recipes", false)
            ]
        );
    }

    #[test]
    fn test_seed_on_miss_closes_everything() {
        let m = model();
        let state = ExpansionState::seed(&m, &match_path("/nowhere", &m));

        assert!(state.iter().all(|(_, open)| !open));
        assert_eq!(state.iter().count(), 3);
    }

    #[test]
    fn test_reseed_keeps_manually_opened() {
        let m = model();
        let state = ExpansionState::seed(&m, &match_path("/learn/setup", &m)).toggle("advanced");

        let next = state.reseed(&m, &match_path("/learn/installation", &m));

        assert!(next.is_expanded("getting-started"));
        assert!(next.is_expanded("advanced"));
        assert!(!next.is_expanded("recipes"));
    }

    #[test]
    fn test_reseed_never_closes() {
        let m = model();
        let starts = [
            ExpansionState::seed(&m, &PathMatch::default()),
            ExpansionState::seed(&m, &match_path("/learn/middleware", &m)),
            ExpansionState::seed(&m, &PathMatch::default())
                .toggle("recipes")
                .toggle("getting-started"),
        ];
        let paths = [
            "/learn/setup",
            "/learn/middleware",
            "/learn/recipes/file-uploads",
            "/missing",
        ];

        for start in &starts {
            for path in paths {
                let next = start.reseed(&m, &match_path(path, &m));
                for (id, open) in start.iter() {
                    if open {
                        assert!(next.is_expanded(id), "{id} closed by reseed to {path}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_reseed_forces_active_open_after_manual_close() {
        let m = model();
        let closed = ExpansionState::seed(&m, &match_path("/learn/setup", &m))
            .toggle("getting-started");
        assert!(!closed.is_expanded("getting-started"));

        let next = closed.reseed(&m, &match_path("/learn/installation", &m));

        assert!(next.is_expanded("getting-started"));
    }

    #[test]
    fn test_reseed_adds_new_sections_closed_and_drops_stale() {
        let small = MenuModel::new(vec![MenuSection::new(
            "old",
            "Old",
            vec![MenuEntry::new("Old", "/old")],
        )])
        .unwrap();
        let state = ExpansionState::seed(&small, &match_path("/old", &small));

        let next = state.reseed(&model(), &PathMatch::default());

        assert!(!next.contains("old"));
        assert!(next.contains("advanced"));
        assert!(!next.is_expanded("advanced"));
    }

    #[test]
    fn test_toggle_is_involution() {
        let m = model();
        let state = ExpansionState::seed(&m, &match_path("/learn/setup", &m));

        for id in ["getting-started", "advanced", "recipes"] {
            let once = state.toggle(id);
            assert_ne!(once.is_expanded(id), state.is_expanded(id));
            for (other, open) in state.iter().filter(|(k, _)| *k != id) {
                assert_eq!(once.is_expanded(other), open);
            }
            assert_eq!(once.toggle(id), state);
        }
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let m = model();
        let state = ExpansionState::seed(&m, &match_path("/learn/setup", &m));

        assert_eq!(state.toggle("no-such-section"), state);
    }

    #[test]
    fn test_serializes_as_map() {
        let m = model();
        let state = ExpansionState::seed(&m, &match_path("/learn/setup", &m));

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["getting-started"], true);
        assert_eq!(json["advanced"], false);
    }
}
