//! Render-ready projection of a navigation shell.

use serde::Serialize;

use crate::layout::ViewportClass;

/// Everything the sidebar chrome needs to paint one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    /// Route path the view was computed for.
    pub current_path: String,
    /// Matched entry path, if any.
    pub active_path: Option<String>,
    pub viewport_class: ViewportClass,
    /// Mobile menu-open button.
    pub menu_button_visible: bool,
    /// False when the menu has no sections; the content renders alone.
    pub has_sidebar: bool,
    /// Whether the sidebar panel is on screen.
    pub sidebar_visible: bool,
    pub sections: Vec<SectionView>,
}

/// One section header and, when expanded, its entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub expanded: bool,
    /// Empty while collapsed.
    pub entries: Vec<EntryView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub name: String,
    pub path: String,
    pub active: bool,
}
