//! Documentation pages rendered inside the session's navigation shell.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use bn_content::document_title;
use bn_nav::ShellEvent;
use bn_nav::html::SIDEBAR_LINK_QUERY;
use serde::Deserialize;

use crate::handlers::client_width;
use crate::session::Session;
use crate::state::AppState;
use crate::template::Document;

/// URL prefix of the no-script sidebar controls.
pub(crate) const CONTROL_BASE: &str = "/learn/_nav";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LearnQuery {
    /// `sidebar` when the link was followed from the sidebar.
    nav: Option<String>,
    /// Viewport width override.
    vw: Option<f64>,
}

impl LearnQuery {
    fn from_sidebar(&self) -> bool {
        let expected = SIDEBAR_LINK_QUERY.trim_start_matches("nav=");
        self.nav.as_deref() == Some(expected)
    }
}

/// Handle GET /learn: send visitors to the first guide.
///
/// With an empty menu there is nothing to redirect to and the bare shell
/// renders a not-found child.
pub(crate) async fn get_learn_index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LearnQuery>,
    session: Session,
    headers: HeaderMap,
) -> Response {
    match state.learn_start() {
        Some(path) => Redirect::temporary(path).into_response(),
        None => render_learn(&state, "/learn", &query, session, &headers),
    }
}

/// Handle GET /learn/{*rest}.
pub(crate) async fn get_learn_page(
    State(state): State<Arc<AppState>>,
    Path(rest): Path<String>,
    Query(query): Query<LearnQuery>,
    session: Session,
    headers: HeaderMap,
) -> Response {
    let path = format!("/learn/{rest}");
    render_learn(&state, &path, &query, session, &headers)
}

fn render_learn(
    state: &AppState,
    path: &str,
    query: &LearnQuery,
    session: Session,
    headers: &HeaderMap,
) -> Response {
    let child = state.pages.learn_child(path, &state.menu);
    let hint = client_width(headers, query.vw);
    let content = child.html();

    let shell_html = state.sessions.with_session(
        session.id,
        hint.unwrap_or(state.default_width),
        |entry| {
            if let Some(width) = hint {
                entry.viewport.publish(width);
            }
            let shell = entry.shell(&state.menu, path, state.breakpoint);
            if query.from_sidebar() {
                shell.handle(ShellEvent::SelectEntry(path.to_owned()));
            } else if shell.current_path() != path {
                shell.handle(ShellEvent::Navigate(path.to_owned()));
            }
            shell.render(CONTROL_BASE, &content)
        },
    );

    let html = Document {
        title: &document_title(&child.title()),
        section: Some("/learn"),
        body: &shell_html,
        footer: false,
    }
    .render(&state.version);

    let status = if child.is_not_found() {
        tracing::debug!(path, "Unknown documentation path");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (
        status,
        AppendHeaders(session.set_cookie()),
        [(header::CACHE_CONTROL, "no-store")],
        Html(html),
    )
        .into_response()
}
