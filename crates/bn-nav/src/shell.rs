//! Navigation shell: one session's sidebar state and its projection.
//!
//! The shell owns the expansion and layout state exclusively. Every change
//! goes through [`NavigationShell::handle`], which applies the transition
//! synchronously, so a [`view`](NavigationShell::view) taken afterwards always
//! reflects the event.

use std::sync::Arc;

use crate::expansion::ExpansionState;
use crate::html;
use crate::layout::LayoutState;
use crate::matcher::{PathMatch, match_path};
use crate::menu::MenuModel;
use crate::view::{EntryView, SectionView, ShellView};
use crate::viewport::ViewportSubscription;

/// Input to a navigation shell.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellEvent {
    /// Router moved to a new path.
    Navigate(String),
    /// An entry link in the sidebar was followed. Closes the mobile sidebar
    /// and navigates.
    SelectEntry(String),
    /// Viewport width changed.
    Resize(f64),
    /// Section header clicked.
    ToggleSection(String),
    /// Mobile menu button clicked.
    OpenSidebar,
    /// Mobile close button clicked.
    CloseSidebar,
}

/// Per-session navigation renderer.
#[derive(Debug)]
pub struct NavigationShell {
    model: Arc<MenuModel>,
    current_path: String,
    matched: PathMatch,
    expansion: ExpansionState,
    layout: LayoutState,
    viewport: Option<ViewportSubscription>,
}

impl NavigationShell {
    /// Mount a shell at `path` for a viewport of `width`.
    #[must_use]
    pub fn mount(model: Arc<MenuModel>, path: &str, width: f64, breakpoint: f64) -> Self {
        let matched = match_path(path, &model);
        let expansion = ExpansionState::seed(&model, &matched);
        Self {
            model,
            current_path: path.to_owned(),
            matched,
            expansion,
            layout: LayoutState::at_width(width, breakpoint),
            viewport: None,
        }
    }

    /// Attach a viewport subscription, held until the shell is dropped.
    #[must_use]
    pub fn with_viewport(mut self, subscription: ViewportSubscription) -> Self {
        self.viewport = Some(subscription);
        self
    }

    /// Apply one event.
    pub fn handle(&mut self, event: ShellEvent) {
        tracing::debug!(?event, "Navigation event");
        match event {
            ShellEvent::Navigate(path) => self.navigate(path),
            ShellEvent::SelectEntry(path) => {
                self.layout = self.layout.close_sidebar();
                self.navigate(path);
            }
            ShellEvent::Resize(width) => self.layout = self.layout.on_resize(width),
            ShellEvent::ToggleSection(id) => self.expansion = self.expansion.toggle(&id),
            ShellEvent::OpenSidebar => self.layout = self.layout.open_sidebar(),
            ShellEvent::CloseSidebar => self.layout = self.layout.close_sidebar(),
        }
    }

    /// Apply the latest width from the viewport subscription, if it changed.
    ///
    /// Returns true when a resize was applied.
    pub fn sync_viewport(&mut self) -> bool {
        let Some(width) = self.viewport.as_mut().and_then(ViewportSubscription::take_changed)
        else {
            return false;
        };
        self.handle(ShellEvent::Resize(width));
        true
    }

    fn navigate(&mut self, path: String) {
        // Reseed before anything can render so the active section is open on
        // the first paint after navigation.
        self.matched = match_path(&path, &self.model);
        self.expansion = self.expansion.reseed(&self.model, &self.matched);
        self.current_path = path;
    }

    /// Project the current state.
    #[must_use]
    pub fn view(&self) -> ShellView {
        let active = self.matched.active_path.as_deref();
        let sections = self
            .model
            .sections()
            .iter()
            .map(|section| {
                let expanded = self.expansion.is_expanded(&section.id);
                let entries = if expanded {
                    section
                        .entries
                        .iter()
                        .map(|entry| EntryView {
                            name: entry.name.clone(),
                            path: entry.path.clone(),
                            active: active == Some(entry.path.as_str()),
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                SectionView {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    expanded,
                    entries,
                }
            })
            .collect();

        let has_sidebar = !self.model.is_empty();
        ShellView {
            current_path: self.current_path.clone(),
            active_path: self.matched.active_path.clone(),
            viewport_class: self.layout.viewport_class(),
            menu_button_visible: has_sidebar && self.layout.is_mobile(),
            has_sidebar,
            sidebar_visible: has_sidebar && self.layout.sidebar_shown(),
            sections,
        }
    }

    /// Render the shell around the router-provided content.
    ///
    /// `control_base` is the URL prefix of the toggle and sidebar endpoints.
    #[must_use]
    pub fn render(&self, control_base: &str, content_html: &str) -> String {
        html::render_shell(&self.view(), control_base, content_html)
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    #[must_use]
    pub fn active_path(&self) -> Option<&str> {
        self.matched.active_path.as_deref()
    }

    #[must_use]
    pub fn path_match(&self) -> &PathMatch {
        &self.matched
    }

    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    #[must_use]
    pub fn model(&self) -> &MenuModel {
        &self.model
    }
}
