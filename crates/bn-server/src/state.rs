//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use bn_contact::ContactDesk;
use bn_content::PageRegistry;
use bn_nav::MenuModel;

use crate::session::SessionStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Static pages rendered at startup.
    pub(crate) pages: PageRegistry,
    /// Documentation menu shared by every navigation shell.
    pub(crate) menu: Arc<MenuModel>,
    pub(crate) sessions: SessionStore,
    pub(crate) contact: ContactDesk,
    /// Mobile/desktop threshold in logical pixels.
    pub(crate) breakpoint: f64,
    /// Width assumed until the client reports one.
    pub(crate) default_width: f64,
    /// Application version for asset URLs and `ETag`s.
    pub(crate) version: String,
}

impl AppState {
    /// Where `/learn` sends visitors: the first menu entry.
    pub(crate) fn learn_start(&self) -> Option<&str> {
        self.menu.entries().next().map(|entry| entry.path.as_str())
    }
}
