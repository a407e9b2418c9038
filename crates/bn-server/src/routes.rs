//! Route table listing, as printed by `bootnode routes`.

use std::fmt;

use bn_content::{LearnChild, PageKind, PageRegistry};
use bn_nav::MenuModel;

/// What a route serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Marketing page.
    Page,
    /// Written documentation guide.
    Guide,
    /// Menu entry without a guide yet.
    ComingSoon,
    /// Redirect to the first guide.
    Redirect,
    /// Sidebar control form target.
    Control,
    /// JSON endpoint.
    Api,
    WebSocket,
    Asset,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Page => "page",
            Self::Guide => "guide",
            Self::ComingSoon => "coming soon",
            Self::Redirect => "redirect",
            Self::Control => "control",
            Self::Api => "api",
            Self::WebSocket => "websocket",
            Self::Asset => "asset",
        };
        f.write_str(label)
    }
}

/// One served route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteRoute {
    pub method: &'static str,
    pub path: String,
    pub kind: RouteKind,
}

impl SiteRoute {
    fn new(method: &'static str, path: impl Into<String>, kind: RouteKind) -> Self {
        Self {
            method,
            path: path.into(),
            kind,
        }
    }
}

/// Every route the server answers, documentation entries in menu order.
#[must_use]
pub fn site_routes(menu: &MenuModel, pages: &PageRegistry) -> Vec<SiteRoute> {
    let mut routes: Vec<SiteRoute> = pages
        .pages()
        .filter(|page| page.kind != PageKind::Learn)
        .map(|page| SiteRoute::new("GET", page.path.clone(), RouteKind::Page))
        .collect();
    routes.push(SiteRoute::new("GET", "/contact", RouteKind::Page));
    routes.push(SiteRoute::new("POST", "/contact", RouteKind::Page));

    routes.push(SiteRoute::new("GET", "/learn", RouteKind::Redirect));
    for entry in menu.entries() {
        let kind = match pages.learn_child(&entry.path, menu) {
            LearnChild::Page(_) => RouteKind::Guide,
            LearnChild::ComingSoon { .. } | LearnChild::NotFound { .. } => RouteKind::ComingSoon,
        };
        routes.push(SiteRoute::new("GET", entry.path.clone(), kind));
    }
    for control in [
        "/learn/_nav/toggle",
        "/learn/_nav/sidebar/open",
        "/learn/_nav/sidebar/close",
    ] {
        routes.push(SiteRoute::new("POST", control, RouteKind::Control));
    }

    routes.push(SiteRoute::new("GET", "/api/navigation", RouteKind::Api));
    routes.push(SiteRoute::new("POST", "/api/contact", RouteKind::Api));
    routes.push(SiteRoute::new("GET", "/ws/viewport", RouteKind::WebSocket));
    routes.extend(
        bn_assets::iter().map(|name| SiteRoute::new("GET", format!("/static/{name}"), RouteKind::Asset)),
    );
    routes
}
