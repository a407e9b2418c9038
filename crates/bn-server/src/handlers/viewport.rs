//! WebSocket feed of viewport widths.
//!
//! The page script reports the window width on connect and after every
//! resize. Each report is published to the session's viewport signal, the
//! shell picks it up, and the resulting view goes back to the client so it
//! can re-render when the viewport class flips.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::{AppendHeaders, IntoResponse};
use bn_nav::ShellView;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::Session;
use crate::state::AppState;

/// Message from the page script.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum ClientMessage {
    Resize { width: f64 },
}

/// Message to the page script.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum ServerMessage {
    View(ShellView),
}

/// Handle WebSocket upgrade for /ws/viewport.
pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    session: Session,
) -> impl IntoResponse {
    let cookie = session.set_cookie();
    let response = ws.on_upgrade(move |socket| handle_socket(socket, state, session.id));
    (AppendHeaders(cookie), response)
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>, session: Uuid) {
    tracing::debug!(%session, "Viewport feed connected");

    while let Some(Ok(message)) = socket.recv().await {
        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let Ok(ClientMessage::Resize { width }) = serde_json::from_str(text.as_str()) else {
            tracing::warn!(%session, "Ignoring malformed viewport message");
            continue;
        };

        let Some(view) = apply_resize(&state, session, width) else {
            continue;
        };
        let Ok(payload) = serde_json::to_string(&ServerMessage::View(view)) else {
            break;
        };
        if socket.send(Message::Text(payload.into())).await.is_err() {
            break;
        }
    }

    tracing::debug!(%session, "Viewport feed closed");
}

/// Publish `width` for the session and return its updated view.
///
/// Sessions without a mounted shell only record the width; the next
/// documentation page mounts at it.
pub(crate) fn apply_resize(state: &AppState, session: Uuid, width: f64) -> Option<ShellView> {
    state.sessions.with_session(session, state.default_width, |entry| {
        entry.viewport.publish(width);
        entry.shell.as_mut().map(|shell| {
            shell.sync_viewport();
            shell.view()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bn_nav::ViewportClass;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_message_parsing() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"resize","width":640}"#).unwrap();
        assert_eq!(message, ClientMessage::Resize { width: 640.0 });

        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"scroll","y":3}"#).is_err());
    }

    #[test]
    fn test_server_message_is_tagged_view() {
        let view = ShellView {
            current_path: "/learn/setup".to_owned(),
            active_path: Some("/learn/setup".to_owned()),
            viewport_class: ViewportClass::Mobile,
            menu_button_visible: true,
            has_sidebar: true,
            sidebar_visible: false,
            sections: Vec::new(),
        };

        let json = serde_json::to_value(ServerMessage::View(view)).unwrap();

        assert_eq!(json["type"], "view");
        assert_eq!(json["viewportClass"], "mobile");
        assert_eq!(json["menuButtonVisible"], true);
    }
}
