//! Sidebar controls and the navigation API.
//!
//! The controls are the form targets rendered by the shell. Each applies one
//! event to the session's shell and redirects back with 303.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use bn_nav::{ShellEvent, ShellView};
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::client_width;
use crate::session::Session;
use crate::state::AppState;

/// Form body of every sidebar control.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ControlForm {
    /// Section id, only sent by the toggle control.
    section: Option<String>,
    return_to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationQuery {
    path: Option<String>,
    vw: Option<f64>,
}

/// Handle POST /learn/_nav/toggle.
///
/// The section id travels in the form body so any id the menu accepts can be
/// toggled. A missing id only redirects back.
pub(crate) async fn toggle_section(
    State(state): State<Arc<AppState>>,
    session: Session,
    axum::Form(mut form): axum::Form<ControlForm>,
) -> Response {
    let event = form.section.take().map(ShellEvent::ToggleSection);
    if event.is_none() {
        tracing::warn!("Toggle control posted without a section");
    }
    apply_control(&state, session, form, event)
}

/// Handle POST /learn/_nav/sidebar/open.
pub(crate) async fn open_sidebar(
    State(state): State<Arc<AppState>>,
    session: Session,
    axum::Form(form): axum::Form<ControlForm>,
) -> Response {
    apply_control(&state, session, form, Some(ShellEvent::OpenSidebar))
}

/// Handle POST /learn/_nav/sidebar/close.
pub(crate) async fn close_sidebar(
    State(state): State<Arc<AppState>>,
    session: Session,
    axum::Form(form): axum::Form<ControlForm>,
) -> Response {
    apply_control(&state, session, form, Some(ShellEvent::CloseSidebar))
}

fn apply_control(
    state: &AppState,
    session: Session,
    form: ControlForm,
    event: Option<ShellEvent>,
) -> Response {
    let return_to = return_path(form.return_to);

    if let Some(event) = event {
        state
            .sessions
            .with_session(session.id, state.default_width, |entry| {
                entry
                    .shell(&state.menu, &return_to, state.breakpoint)
                    .handle(event);
            });
    }

    (AppendHeaders(session.set_cookie()), Redirect::to(&return_to)).into_response()
}

/// Redirect target for a control, confined to the documentation section.
fn return_path(requested: Option<String>) -> String {
    requested
        .filter(|path| {
            (path == "/learn" || path.starts_with("/learn/")) && !path.contains("//")
        })
        .unwrap_or_else(|| "/learn".to_owned())
}

/// Handle GET /api/navigation.
///
/// Returns the caller's shell projection. With `path` the shell navigates
/// there first; a session without a shell mounts one.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    if let Some(path) = query.path.as_deref()
        && !path.starts_with('/')
    {
        return Err(ServerError::InvalidPath(path.to_owned()));
    }

    let hint = client_width(&headers, query.vw);
    let view: ShellView = state.sessions.with_session(
        session.id,
        hint.unwrap_or(state.default_width),
        |entry| {
            if let Some(width) = hint {
                entry.viewport.publish(width);
            }
            let mount_at = query
                .path
                .as_deref()
                .or_else(|| state.learn_start())
                .unwrap_or("/learn");
            let shell = entry.shell(&state.menu, mount_at, state.breakpoint);
            if let Some(path) = &query.path
                && shell.current_path() != path
            {
                shell.handle(ShellEvent::Navigate(path.clone()));
            }
            shell.view()
        },
    );

    Ok((AppendHeaders(session.set_cookie()), Json(view)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_path_confined_to_learn() {
        assert_eq!(
            return_path(Some("/learn/setup".to_owned())),
            "/learn/setup"
        );
        assert_eq!(return_path(Some("/learn".to_owned())), "/learn");
        assert_eq!(return_path(Some("https://evil.example".to_owned())), "/learn");
        assert_eq!(return_path(Some("/learn//evil.example".to_owned())), "/learn");
        assert_eq!(return_path(Some("/learning".to_owned())), "/learn");
        assert_eq!(return_path(None), "/learn");
    }

    #[test]
    fn test_control_form_parses_urlencoded() {
        let form: ControlForm = serde_urlencoded::from_str("return_to=%2Flearn%2Fsetup").unwrap();
        assert_eq!(form.return_to.as_deref(), Some("/learn/setup"));
    }
}
