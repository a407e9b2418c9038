//! Per-visitor navigation sessions.
//!
//! Each visitor gets a cookie-keyed [`SessionEntry`] holding its viewport
//! signal, its navigation shell (mounted on the first documentation page) and
//! a pending contact notice. Entries are only touched while the store lock is
//! held, so events for one shell never overlap.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use bn_contact::Notice;
use bn_nav::{MenuModel, NavigationShell, ViewportSignal};
use uuid::Uuid;

/// Name of the session cookie.
pub(crate) const SESSION_COOKIE: &str = "bn_session";

/// One visitor's navigation state.
#[derive(Debug)]
pub(crate) struct SessionEntry {
    pub(crate) viewport: ViewportSignal,
    pub(crate) shell: Option<NavigationShell>,
    pub(crate) notice: Option<Notice>,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(initial_width: f64, now: Instant) -> Self {
        Self {
            viewport: ViewportSignal::new(initial_width),
            shell: None,
            notice: None,
            last_seen: now,
        }
    }

    /// The session's shell, mounted at `path` on first use.
    ///
    /// An existing shell first picks up any width published since the last
    /// request. Callers navigate it themselves.
    pub(crate) fn shell(
        &mut self,
        model: &Arc<MenuModel>,
        path: &str,
        breakpoint: f64,
    ) -> &mut NavigationShell {
        let viewport = &self.viewport;
        let shell = self.shell.get_or_insert_with(|| {
            tracing::debug!(path, width = viewport.current(), "Mounting navigation shell");
            NavigationShell::mount(Arc::clone(model), path, viewport.current(), breakpoint)
                .with_viewport(viewport.subscribe())
        });
        shell.sync_viewport();
        shell
    }
}

/// All live sessions.
pub(crate) struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub(crate) fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against a session, creating it at `initial_width` if needed.
    pub(crate) fn with_session<R>(
        &self,
        id: Uuid,
        initial_width: f64,
        f: impl FnOnce(&mut SessionEntry) -> R,
    ) -> R {
        let now = Instant::now();
        let mut sessions = self.lock();
        let entry = sessions.entry(id).or_insert_with(|| {
            tracing::info!(session = %id, "Session created");
            SessionEntry::new(initial_width, now)
        });
        entry.last_seen = now;
        f(entry)
    }

    /// Drop sessions idle longer than the timeout. Returns how many went.
    pub(crate) fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now())
    }

    fn evict_idle_at(&self, now: Instant) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let keep = now.saturating_duration_since(entry.last_seen) < self.idle_timeout;
            if !keep {
                tracing::info!(session = %id, "Session evicted");
            }
            keep
        });
        before - sessions.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    fn touch_at(&self, id: Uuid, at: Instant) {
        if let Some(entry) = self.lock().get_mut(&id) {
            entry.last_seen = at;
        }
    }
}

/// Session identity of the current request.
///
/// Requests without a valid cookie get a fresh id; the handler sends it back
/// with [`Session::set_cookie`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Session {
    pub(crate) id: Uuid,
    pub(crate) is_new: bool,
}

impl Session {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        match session_cookie(headers) {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: Uuid::new_v4(),
                is_new: true,
            },
        }
    }

    /// `Set-Cookie` header for a new session, nothing otherwise.
    pub(crate) fn set_cookie(&self) -> Option<(HeaderName, String)> {
        self.is_new.then(|| {
            (
                SET_COOKIE,
                format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id),
            )
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn session_cookie(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}
