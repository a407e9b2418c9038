//! Marketing pages and the HTML not-found page.
//!
//! Pages come from the startup-rendered registry and carry an `ETag` so
//! repeat visits can be answered with 304.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use bn_content::{PageKind, document_title, not_found_html};
use md5::{Digest, Md5};

use crate::state::AppState;
use crate::template::Document;

/// Handle GET for any registered marketing page.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let path = uri.path();
    let Some(page) = state.pages.get(path).filter(|p| p.kind != PageKind::Learn) else {
        return not_found(&state, path);
    };

    let html = Document {
        title: &page.document_title(),
        section: Some(path),
        body: &page.html,
        footer: true,
    }
    .render(&state.version);

    let etag = compute_etag(&state.version, &html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "public, max-age=300".to_owned()),
        ],
        Html(html),
    )
        .into_response()
}

/// Fallback for paths nothing else serves.
pub(crate) async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route");
    not_found(&state, uri.path())
}

fn not_found(state: &AppState, path: &str) -> Response {
    let html = Document {
        title: &document_title("Page Not Found"),
        section: None,
        body: &not_found_html(path),
        footer: true,
    }
    .render(&state.version);
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_depends_on_version_and_content() {
        let base = compute_etag("1.0.0", "content");

        assert_ne!(base, compute_etag("1.0.1", "content"));
        assert_ne!(base, compute_etag("1.0.0", "other"));
        assert_eq!(base, compute_etag("1.0.0", "content"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }
}
