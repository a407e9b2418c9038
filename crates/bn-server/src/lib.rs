//! HTTP server for the Bootnode site.
//!
//! This crate provides an axum server serving:
//! - Marketing pages rendered once at startup
//! - Documentation pages inside a per-session navigation shell
//! - No-script sidebar controls and a JSON navigation API
//! - WebSocket endpoint feeding viewport widths to the session's shell
//! - Contact form submission
//! - Static assets from `bn-assets`
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use bn_contact::ContactDesk;
//! use bn_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let menu = Arc::new(bn_content::default_menu().unwrap());
//!     let contact = ContactDesk::new(None, Duration::from_secs(5));
//!
//!     run_server(ServerConfig::default(), menu, contact).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (bn-server)
//!                        │
//!                        ├─► /learn/* ──► SessionStore ──► NavigationShell (bn-nav)
//!                        │                     ▲
//!                        ├─► /ws/viewport ─────┘ ViewportSignal
//!                        │
//!                        ├─► pages ──► PageRegistry (bn-content)
//!                        │
//!                        └─► /contact ──► ContactDesk (bn-contact) ──► email API
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod routes;
mod session;
mod state;
mod template;

use std::sync::Arc;
use std::time::Duration;

use bn_contact::ContactDesk;
use bn_content::PageRegistry;
use bn_nav::{DEFAULT_BREAKPOINT, MenuModel};
use session::SessionStore;
use state::AppState;

pub use routes::{RouteKind, SiteRoute, site_routes};

/// How often idle sessions are swept.
const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Mobile/desktop threshold in logical pixels.
    pub breakpoint: f64,
    /// Viewport width assumed before the client reports one.
    pub default_width: f64,
    /// Sessions idle this long are dropped.
    pub session_idle_timeout: Duration,
    /// Application version (for asset URLs and `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
            breakpoint: DEFAULT_BREAKPOINT,
            default_width: 1024.0,
            session_idle_timeout: Duration::from_secs(1800),
            version: String::new(),
        }
    }
}

impl ServerConfig {
    /// Create server configuration from `bootnode.toml` settings.
    #[must_use]
    pub fn from_config(config: &bn_config::Config, version: String) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            breakpoint: config.layout.breakpoint,
            default_width: config.layout.default_width,
            session_idle_timeout: Duration::from_secs(config.sessions.idle_timeout_secs),
            version,
        }
    }
}

fn build_state(config: &ServerConfig, menu: Arc<MenuModel>, contact: ContactDesk) -> Arc<AppState> {
    let start = menu
        .entries()
        .next()
        .map_or("/learn", |entry| entry.path.as_str());
    let pages = PageRegistry::builtin(start);

    Arc::new(AppState {
        pages,
        menu,
        sessions: SessionStore::new(config.session_idle_timeout),
        contact,
        breakpoint: config.breakpoint,
        default_width: config.default_width,
        version: config.version.clone(),
    })
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(
    config: ServerConfig,
    menu: Arc<MenuModel>,
    contact: ContactDesk,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config, menu, contact);

    tracing::info!(
        pages = state.pages.len(),
        sections = state.menu.sections().len(),
        contact = state.contact.is_configured(),
        "Site loaded"
    );

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    let sweeper = tokio::spawn({
        let state = Arc::clone(&state);
        async move {
            let mut interval = tokio::time::interval(EVICTION_INTERVAL);
            loop {
                interval.tick().await;
                let evicted = state.sessions.evict_idle();
                if evicted > 0 {
                    tracing::debug!(evicted, live = state.sessions.len(), "Swept idle sessions");
                }
            }
        }
    });

    let app = app::create_router(state);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    sweeper.abort();
    served?;
    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
