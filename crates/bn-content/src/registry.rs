//! Page registry: every static page the site serves, keyed by route path.

use std::borrow::Cow;
use std::collections::BTreeMap;

use bn_nav::MenuModel;
use bn_nav::html::escape_html;

use crate::home;
use crate::markdown::render_markdown;

/// Site name appended to document titles.
pub const SITE_NAME: &str = "Bootnode";

/// Marketing pages rendered from markdown: (path, title, source).
const MARKETING_PAGES: &[(&str, &str, &str)] = &[
    ("/about", "About", include_str!("../content/about.md")),
    ("/features", "Features", include_str!("../content/features.md")),
    (
        "/documentation",
        "Documentation",
        include_str!("../content/documentation.md"),
    ),
];

/// Written learn guides: (path, source). Titles come from the first H1.
const LEARN_PAGES: &[(&str, &str)] = &[
    ("/learn/setup", include_str!("../content/learn/setup.md")),
    (
        "/learn/installation",
        include_str!("../content/learn/installation.md"),
    ),
    (
        "/learn/configuration",
        include_str!("../content/learn/configuration.md"),
    ),
    (
        "/learn/authentication",
        include_str!("../content/learn/authentication.md"),
    ),
    (
        "/learn/api-routes",
        include_str!("../content/learn/api-routes.md"),
    ),
    ("/learn/database", include_str!("../content/learn/database.md")),
    (
        "/learn/validation",
        include_str!("../content/learn/validation.md"),
    ),
    (
        "/learn/middleware",
        include_str!("../content/learn/middleware.md"),
    ),
];

/// Format a browser title such as `"About | Bootnode"`.
#[must_use]
pub fn document_title(page: &str) -> String {
    format!("{page} | {SITE_NAME}")
}

/// What kind of page a [`Page`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Landing page.
    Home,
    /// About, features and the legacy documentation page.
    Marketing,
    /// A written guide under `/learn`.
    Learn,
}

/// A pre-rendered page.
#[derive(Clone, Debug)]
pub struct Page {
    /// Route path.
    pub path: String,
    /// Display title.
    pub title: String,
    /// Rendered body HTML.
    pub html: String,
    pub kind: PageKind,
}

impl Page {
    /// Browser title for this page.
    #[must_use]
    pub fn document_title(&self) -> String {
        match self.kind {
            PageKind::Home => SITE_NAME.to_owned(),
            PageKind::Marketing | PageKind::Learn => document_title(&self.title),
        }
    }
}

/// Child content for a `/learn/...` route.
#[derive(Clone, Copy, Debug)]
pub enum LearnChild<'a> {
    /// A written guide.
    Page(&'a Page),
    /// The menu lists this path but no guide is written yet.
    ComingSoon {
        /// Menu entry name.
        name: &'a str,
    },
    /// Neither the menu nor the registry knows this path.
    NotFound {
        path: &'a str,
    },
}

impl<'a> LearnChild<'a> {
    /// Display title of the child.
    #[must_use]
    pub fn title(&self) -> Cow<'a, str> {
        match *self {
            Self::Page(page) => Cow::Borrowed(page.title.as_str()),
            Self::ComingSoon { name } => Cow::Borrowed(name),
            Self::NotFound { .. } => Cow::Borrowed("Page Not Found"),
        }
    }

    /// Body HTML of the child.
    #[must_use]
    pub fn html(&self) -> Cow<'a, str> {
        match *self {
            Self::Page(page) => Cow::Borrowed(page.html.as_str()),
            Self::ComingSoon { name } => Cow::Owned(coming_soon_html(name)),
            Self::NotFound { path } => Cow::Owned(not_found_html(path)),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Placeholder for a listed guide that has no content yet.
#[must_use]
pub fn coming_soon_html(name: &str) -> String {
    format!(
        r#"<div class="coming-soon"><div class="coming-soon-card"><h2>{} Coming Soon!</h2><p>We're working hard to bring you this feature. Please check back later.</p></div></div>"#,
        escape_html(name)
    )
}

/// Body for a path nothing serves.
#[must_use]
pub fn not_found_html(path: &str) -> String {
    format!(
        r#"<div class="not-found"><h1>Page Not Found</h1><p>Nothing lives at <code>{}</code>.</p><p><a href="/">Back to Home</a></p></div>"#,
        escape_html(path)
    )
}

/// All static pages, rendered once at startup.
#[derive(Debug)]
pub struct PageRegistry {
    pages: BTreeMap<String, Page>,
}

impl PageRegistry {
    /// Render the built-in pages.
    ///
    /// `start_path` is where the landing page's "Get Started" buttons point.
    #[must_use]
    pub fn builtin(start_path: &str) -> Self {
        let mut pages = BTreeMap::new();

        pages.insert(
            "/".to_owned(),
            Page {
                path: "/".to_owned(),
                title: "Home".to_owned(),
                html: home::render_home(start_path),
                kind: PageKind::Home,
            },
        );

        for (path, title, source) in MARKETING_PAGES {
            let rendered = render_markdown(source);
            pages.insert(
                (*path).to_owned(),
                Page {
                    path: (*path).to_owned(),
                    title: (*title).to_owned(),
                    html: rendered.html,
                    kind: PageKind::Marketing,
                },
            );
        }

        for (path, source) in LEARN_PAGES {
            let rendered = render_markdown(source);
            let title = rendered
                .title
                .unwrap_or_else(|| fallback_title(path).to_owned());
            pages.insert(
                (*path).to_owned(),
                Page {
                    path: (*path).to_owned(),
                    title,
                    html: rendered.html,
                    kind: PageKind::Learn,
                },
            );
        }

        tracing::debug!(count = pages.len(), "Rendered static pages");
        Self { pages }
    }

    /// Look up a page by exact path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Page> {
        self.pages.get(path)
    }

    /// Resolve the child shown inside the documentation shell at `path`.
    ///
    /// Only paths listed in `menu` resolve; a written guide the menu leaves
    /// out is not served.
    #[must_use]
    pub fn learn_child<'a>(&'a self, path: &'a str, menu: &'a MenuModel) -> LearnChild<'a> {
        let Some(entry) = menu.entries().find(|entry| entry.path == path) else {
            return LearnChild::NotFound { path };
        };
        match self.get(path).filter(|p| p.kind == PageKind::Learn) {
            Some(page) => LearnChild::Page(page),
            None => LearnChild::ComingSoon {
                name: entry.name.as_str(),
            },
        }
    }

    /// Pages in path order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// Written learn guides in path order.
    pub fn learn_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages().filter(|p| p.kind == PageKind::Learn)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

fn fallback_title(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
