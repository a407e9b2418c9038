//! HTML projection of a [`ShellView`].
//!
//! Controls are plain forms posting to `{control_base}/...` so the sidebar
//! works without client-side scripting:
//! - `{control_base}/toggle` (section id in the `section` field)
//! - `{control_base}/sidebar/open`
//! - `{control_base}/sidebar/close`
//!
//! Each form carries a `return_to` field with the current path.

use std::fmt::Write;

use crate::view::{SectionView, ShellView};

/// Query string appended to sidebar entry links so the router can tell a
/// sidebar selection from other navigation.
pub const SIDEBAR_LINK_QUERY: &str = "nav=sidebar";

/// Escape text for HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the documentation shell around `content_html`.
///
/// With no sections the content is rendered alone.
#[must_use]
pub fn render_shell(view: &ShellView, control_base: &str, content_html: &str) -> String {
    let mut out = String::with_capacity(content_html.len() + 2048);

    if !view.has_sidebar {
        write!(
            out,
            r#"<div class="docs-shell docs-shell-bare"><main class="docs-content">{content_html}</main></div>"#
        )
        .unwrap();
        return out;
    }

    let return_to = escape_html(&view.current_path);
    let control_base = escape_html(control_base);

    let class = match view.viewport_class {
        crate::ViewportClass::Mobile => "mobile",
        crate::ViewportClass::Desktop => "desktop",
    };
    write!(
        out,
        r#"<div class="docs-shell docs-{class}" data-viewport="{class}">"#
    )
    .unwrap();

    if view.menu_button_visible {
        write!(
            out,
            r#"<form class="menu-button-form" method="post" action="{control_base}/sidebar/open"><input type="hidden" name="return_to" value="{return_to}"><button type="submit" class="menu-button" aria-label="Open documentation menu">&#9776;</button></form>"#
        )
        .unwrap();
    }

    let state_class = if view.sidebar_visible {
        "sidebar-open"
    } else {
        "sidebar-closed"
    };
    write!(
        out,
        r#"<div class="docs-layout"><aside class="docs-sidebar {state_class}" aria-hidden="{}"><div class="sidebar-header"><a href="/" class="back-home">Back to Home</a>"#,
        !view.sidebar_visible
    )
    .unwrap();

    if view.menu_button_visible {
        write!(
            out,
            r#"<form method="post" action="{control_base}/sidebar/close"><input type="hidden" name="return_to" value="{return_to}"><button type="submit" class="sidebar-close" aria-label="Close documentation menu">&times;</button></form>"#
        )
        .unwrap();
    }
    out.push_str(r#"</div><nav class="sidebar-nav">"#);

    for section in &view.sections {
        render_section(section, &control_base, &return_to, &mut out);
    }

    write!(
        out,
        r#"</nav></aside><main class="docs-content">{content_html}</main></div></div>"#
    )
    .unwrap();
    out
}

fn render_section(section: &SectionView, control_base: &str, return_to: &str, out: &mut String) {
    let id = escape_html(&section.id);
    let chevron = if section.expanded { "&#9662;" } else { "&#9656;" };
    write!(
        out,
        r#"<div class="nav-section" id="section-{id}"><form method="post" action="{control_base}/toggle"><input type="hidden" name="section" value="{id}"><input type="hidden" name="return_to" value="{return_to}"><button type="submit" class="nav-section-toggle" aria-expanded="{}"><span>{}</span><span class="chevron">{chevron}</span></button></form>"#,
        section.expanded,
        escape_html(&section.title)
    )
    .unwrap();

    if section.expanded {
        out.push_str(r#"<ul class="nav-entries">"#);
        for entry in &section.entries {
            let path = escape_html(&entry.path);
            let name = escape_html(&entry.name);
            if entry.active {
                write!(
                    out,
                    r#"<li><a href="{path}?{SIDEBAR_LINK_QUERY}" class="nav-entry active" aria-current="page">{name}</a></li>"#
                )
                .unwrap();
            } else {
                write!(
                    out,
                    r#"<li><a href="{path}?{SIDEBAR_LINK_QUERY}" class="nav-entry">{name}</a></li>"#
                )
                .unwrap();
            }
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ViewportClass;
    use crate::view::EntryView;

    fn view(mobile: bool, sidebar_visible: bool) -> ShellView {
        ShellView {
            current_path: "/learn/setup".to_owned(),
            active_path: Some("/learn/setup".to_owned()),
            viewport_class: if mobile {
                ViewportClass::Mobile
            } else {
                ViewportClass::Desktop
            },
            menu_button_visible: mobile,
            has_sidebar: true,
            sidebar_visible,
            sections: vec![
                SectionView {
                    id: "getting-started".to_owned(),
                    title: "Getting Started".to_owned(),
                    expanded: true,
                    entries: vec![
                        EntryView {
                            name: "Setup Guide".to_owned(),
                            path: "/learn/setup".to_owned(),
                            active: true,
                        },
                        EntryView {
                            name: "Installation".to_owned(),
                            path: "/learn/installation".to_owned(),
                            active: false,
                        },
                    ],
                },
                SectionView {
                    id: "advanced".to_owned(),
                    title: "Advanced".to_owned(),
                    expanded: false,
                    entries: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_desktop_render() {
        let html = render_shell(&view(false, true), "/learn/_nav", "<p>body</p>");

        assert!(html.contains("docs-desktop"));
        assert!(!html.contains("menu-button"));
        assert!(html.contains("sidebar-open"));
        assert!(html.contains(
            r#"action="/learn/_nav/toggle"><input type="hidden" name="section" value="getting-started">"#
        ));
        assert!(html.contains(
            r#"<a href="/learn/setup?nav=sidebar" class="nav-entry active" aria-current="page">Setup Guide</a>"#
        ));
        assert!(html.contains(r#"class="nav-entry">Installation</a>"#));
        assert!(html.contains(r#"<main class="docs-content"><p>body</p></main>"#));
    }

    #[test]
    fn test_mobile_render_closed() {
        let html = render_shell(&view(true, false), "/learn/_nav", "");

        assert!(html.contains(r#"action="/learn/_nav/sidebar/open""#));
        assert!(html.contains(r#"action="/learn/_nav/sidebar/close""#));
        assert!(html.contains("sidebar-closed"));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_collapsed_section_has_no_entry_list() {
        let html = render_shell(&view(false, true), "/learn/_nav", "");

        let advanced = html.split(r#"id="section-advanced""#).nth(1).unwrap();
        assert!(!advanced.contains("nav-entries"));
        assert!(advanced.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_bare_render_without_sections() {
        let mut v = view(false, false);
        v.has_sidebar = false;
        v.sections.clear();

        let html = render_shell(&v, "/learn/_nav", "<p>x</p>");

        assert!(!html.contains("docs-sidebar"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn test_titles_escaped() {
        let mut v = view(false, true);
        v.sections[1].title = "<script>".to_owned();

        let html = render_shell(&v, "/learn/_nav", "");

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
