//! Page chrome: document head, top navigation bar and footer.

use std::fmt::Write;

use bn_content::REPOSITORY_URL;
use bn_nav::html::escape_html;

/// Top navigation links: (href, label).
const NAV_LINKS: &[(&str, &str)] = &[
    ("/features", "Features"),
    ("/about", "About"),
    ("/learn", "Learn"),
    ("/contact", "Contact"),
];

/// Footer columns: (heading, links). `#` marks pages that do not exist yet.
const FOOTER_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Product",
        &[
            ("/features", "Features"),
            ("#", "Pricing"),
            ("/documentation", "Documentation"),
            ("#", "Changelog"),
        ],
    ),
    (
        "Resources",
        &[
            ("/learn", "Tutorials"),
            ("#", "Blog"),
            ("#", "Examples"),
            ("#", "Community"),
        ],
    ),
    (
        "Company",
        &[("/about", "About"), ("#", "Careers"), ("/contact", "Contact")],
    ),
];

/// A full HTML document.
pub(crate) struct Document<'a> {
    /// Browser title, already formatted.
    pub(crate) title: &'a str,
    /// Href of the top navigation link to mark as current.
    pub(crate) section: Option<&'a str>,
    pub(crate) body: &'a str,
    /// Documentation pages fill the viewport and skip the footer.
    pub(crate) footer: bool,
}

impl Document<'_> {
    pub(crate) fn render(&self, version: &str) -> String {
        let mut out = String::with_capacity(self.body.len() + 4096);
        let title = escape_html(self.title);
        let version = escape_html(version);
        let stylesheet = bn_assets::STYLESHEET;
        let script = bn_assets::SCRIPT;
        write!(
            out,
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><link rel="stylesheet" href="/static/{stylesheet}?v={version}"><script src="/static/{script}?v={version}" defer></script></head><body>"#
        )
        .unwrap();

        render_nav(self.section, &mut out);

        if self.footer {
            write!(out, r#"<main class="page">{}</main>"#, self.body).unwrap();
            render_footer(&mut out);
        } else {
            out.push_str(self.body);
        }

        out.push_str("</body></html>");
        out
    }
}

fn render_nav(section: Option<&str>, out: &mut String) {
    out.push_str(
        r#"<header class="site-nav"><a href="/" class="brand"><span class="brand-mark">BN</span><span>Bootnode</span></a><ul class="nav-links">"#,
    );
    for (href, label) in NAV_LINKS {
        if section == Some(*href) {
            write!(
                out,
                r#"<li><a href="{href}" class="current" aria-current="page">{label}</a></li>"#
            )
            .unwrap();
        } else {
            write!(out, r#"<li><a href="{href}">{label}</a></li>"#).unwrap();
        }
    }
    out.push_str("</ul></header>");
}

fn render_footer(out: &mut String) {
    write!(
        out,
        r#"<footer class="site-footer"><div class="footer-grid"><div class="footer-brand"><a href="/" class="brand"><span class="brand-mark">BN</span><span>Bootnode</span></a><p>The complete backend for modern applications. Build faster, scale easier, and focus on what matters most.</p><a href="{REPOSITORY_URL}">GitHub</a></div>"#
    )
    .unwrap();

    for (heading, links) in FOOTER_COLUMNS {
        write!(out, "<div><h3>{heading}</h3><ul>").unwrap();
        for (href, label) in *links {
            write!(out, r#"<li><a href="{href}">{label}</a></li>"#).unwrap();
        }
        out.push_str("</ul></div>");
    }

    write!(
        out,
        r##"</div><div class="footer-bottom"><span>&copy; {} Bootnode. All rights reserved.</span><span><a href="#">Privacy Policy</a> <a href="#">Terms of Service</a></span></div></footer>"##,
        chrono::Utc::now().format("%Y")
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(section: Option<&str>, footer: bool) -> String {
        Document {
            title: "About | Bootnode",
            section,
            body: "<p>body</p>",
            footer,
        }
        .render("1.0.0")
    }

    #[test]
    fn test_document_head_and_assets() {
        let html = document(None, true);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About | Bootnode</title>"));
        assert!(html.contains(r#"href="/static/site.css?v=1.0.0""#));
        assert!(html.contains(r#"src="/static/site.js?v=1.0.0""#));
        assert!(html.contains(r#"<main class="page"><p>body</p></main>"#));
    }

    #[test]
    fn test_current_nav_link_marked() {
        let html = document(Some("/about"), true);

        assert!(html.contains(r#"<a href="/about" class="current" aria-current="page">About</a>"#));
        assert!(html.contains(r#"<li><a href="/learn">Learn</a></li>"#));
    }

    #[test]
    fn test_footer_optional() {
        assert!(document(None, true).contains("site-footer"));

        let bare = document(Some("/learn"), false);
        assert!(!bare.contains("site-footer"));
        assert!(bare.contains("<p>body</p></body>"));
    }
}
