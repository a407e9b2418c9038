//! Menu model for the documentation sidebar.
//!
//! The model is built once at startup and shared read-only between every
//! navigation shell. All invariants are checked on construction so that a
//! bad menu fails before the server starts listening.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Single link in a menu section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label.
    pub name: String,
    /// Absolute route path, unique across the whole model.
    pub path: String,
}

impl MenuEntry {
    /// Create a menu entry.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Top-level collapsible group of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Stable identifier, unique across the model.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Entries in display order.
    #[serde(alias = "items")]
    pub entries: Vec<MenuEntry>,
}

impl MenuSection {
    /// Create a menu section.
    pub fn new(id: impl Into<String>, title: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            entries,
        }
    }
}

/// Menu invariant violation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// Section id is empty.
    #[error("menu section at position {0} has an empty id")]
    EmptyId(usize),
    /// Two sections share an id.
    #[error("duplicate menu section id: {0}")]
    DuplicateSection(String),
    /// Section has no entries.
    #[error("menu section '{0}' has no entries")]
    EmptySection(String),
    /// Two entries share a path.
    #[error("duplicate menu entry path: {0}")]
    DuplicatePath(String),
    /// Entry path is not an absolute route.
    #[error("menu entry path must start with '/': {0}")]
    RelativePath(String),
}

/// Validated, immutable documentation menu.
///
/// Section order and entry order are display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MenuSection>", into = "Vec<MenuSection>")]
pub struct MenuModel {
    sections: Vec<MenuSection>,
    /// Entry path -> index of the owning section.
    path_index: HashMap<String, usize>,
}

impl MenuModel {
    /// Build a menu, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] for empty or duplicate section ids, sections
    /// without entries, and duplicate or relative entry paths.
    pub fn new(sections: Vec<MenuSection>) -> Result<Self, MenuError> {
        let mut ids = HashSet::with_capacity(sections.len());
        let mut path_index = HashMap::new();

        for (position, section) in sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(MenuError::EmptyId(position));
            }
            if !ids.insert(section.id.as_str()) {
                return Err(MenuError::DuplicateSection(section.id.clone()));
            }
            if section.entries.is_empty() {
                return Err(MenuError::EmptySection(section.id.clone()));
            }
            for entry in &section.entries {
                if !entry.path.starts_with('/') {
                    return Err(MenuError::RelativePath(entry.path.clone()));
                }
                if path_index.insert(entry.path.clone(), position).is_some() {
                    return Err(MenuError::DuplicatePath(entry.path.clone()));
                }
            }
        }

        Ok(Self {
            sections,
            path_index,
        })
    }

    /// Menu without sections.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Look up a section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&MenuSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Section owning the entry with this exact path.
    #[must_use]
    pub fn section_for_path(&self, path: &str) -> Option<&MenuSection> {
        self.path_index.get(path).map(|&i| &self.sections[i])
    }

    /// Whether an entry has exactly this path.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.path_index.contains_key(path)
    }

    /// Whether the menu has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl TryFrom<Vec<MenuSection>> for MenuModel {
    type Error = MenuError;

    fn try_from(sections: Vec<MenuSection>) -> Result<Self, Self::Error> {
        Self::new(sections)
    }
}

impl From<MenuModel> for Vec<MenuSection> {
    fn from(model: MenuModel) -> Self {
        model.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str, paths: &[&str]) -> MenuSection {
        MenuSection::new(
            id,
            id.to_uppercase(),
            paths.iter().map(|p| MenuEntry::new(*p, *p)).collect(),
        )
    }

    #[test]
    fn test_valid_model_preserves_order() {
        let model = MenuModel::new(vec![
            section("b", &["/learn/b1", "/learn/b2"]),
            section("a", &["/learn/a1"]),
        ])
        .unwrap();

        let ids: Vec<&str> = model.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let paths: Vec<&str> = model.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/learn/b1", "/learn/b2", "/learn/a1"]);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = MenuModel::new(vec![
            section("a", &["/learn/x"]),
            section("b", &["/learn/x"]),
        ])
        .unwrap_err();

        assert_eq!(err, MenuError::DuplicatePath("/learn/x".to_owned()));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let err = MenuModel::new(vec![section("a", &["/one"]), section("a", &["/two"])])
            .unwrap_err();

        assert_eq!(err, MenuError::DuplicateSection("a".to_owned()));
    }

    #[test]
    fn test_empty_section_rejected() {
        let err = MenuModel::new(vec![section("a", &[])]).unwrap_err();

        assert_eq!(err, MenuError::EmptySection("a".to_owned()));
    }

    #[test]
    fn test_relative_path_rejected() {
        let err = MenuModel::new(vec![section("a", &["learn/x"])]).unwrap_err();

        assert!(err.to_string().contains("learn/x"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = MenuModel::new(vec![section("", &["/x"])]).unwrap_err();

        assert_eq!(err, MenuError::EmptyId(0));
    }

    #[test]
    fn test_empty_model_is_valid() {
        let model = MenuModel::new(Vec::new()).unwrap();

        assert!(model.is_empty());
        assert_eq!(model, MenuModel::empty());
    }

    #[test]
    fn test_section_for_path() {
        let model = MenuModel::new(vec![
            section("a", &["/learn/a1"]),
            section("b", &["/learn/b1"]),
        ])
        .unwrap();

        assert_eq!(model.section_for_path("/learn/b1").unwrap().id, "b");
        assert!(model.section_for_path("/learn/b").is_none());
        assert!(model.contains_path("/learn/a1"));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"id": "a", "title": "A", "items": [{"name": "One", "path": "/one"}]},
            {"id": "b", "title": "B", "entries": [{"name": "Dup", "path": "/one"}]}
        ]"#;

        let result: Result<MenuModel, _> = serde_json::from_str(json);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate menu entry path"));
    }

    /// Shape of the `[learn]` table in `bootnode.toml`.
    #[derive(Debug, Deserialize)]
    struct Learn {
        sections: MenuModel,
    }

    #[test]
    fn test_deserialize_from_toml_tables() {
        let toml = r#"
            [[sections]]
            id = "getting-started"
            title = "Getting Started"
            entries = [
                { name = "Setup Guide", path = "/learn/setup" },
                { name = "Installation", path = "/learn/installation" },
            ]

            [[sections]]
            id = "recipes"
            title = "Recipes"
            items = [{ name = "File Uploads", path = "/learn/recipes/file-uploads" }]
        "#;

        let learn: Learn = toml::from_str(toml).unwrap();
        let paths: Vec<&str> = learn.sections.entries().map(|e| e.path.as_str()).collect();

        assert_eq!(
            paths,
            vec!["/learn/setup", "/learn/installation", "/learn/recipes/file-uploads"]
        );
        assert_eq!(learn.sections.section("recipes").unwrap().title, "Recipes");
    }

    #[test]
    fn test_toml_relative_path_rejected() {
        let toml = r#"
            [[sections]]
            id = "a"
            title = "A"
            entries = [{ name = "One", path = "learn/one" }]
        "#;

        let err = toml::from_str::<Learn>(toml).unwrap_err();
        assert!(err.to_string().contains("learn/one"));
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let model = MenuModel::new(vec![section("a", &["/one"])]).unwrap();

        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json[0]["id"], "a");
        assert_eq!(json[0]["entries"][0]["path"], "/one");
    }
}
