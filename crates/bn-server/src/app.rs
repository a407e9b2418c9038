//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route(
            "/api/navigation",
            get(handlers::navigation::get_navigation),
        )
        .route("/api/contact", post(handlers::contact::post_contact_api));

    // Documentation shell and its no-script controls
    let learn_routes = Router::new()
        .route("/learn", get(handlers::learn::get_learn_index))
        .route("/learn/{*rest}", get(handlers::learn::get_learn_page))
        .route(
            "/learn/_nav/toggle",
            post(handlers::navigation::toggle_section),
        )
        .route(
            "/learn/_nav/sidebar/open",
            post(handlers::navigation::open_sidebar),
        )
        .route(
            "/learn/_nav/sidebar/close",
            post(handlers::navigation::close_sidebar),
        );

    // One route per static page
    let mut page_routes = Router::new();
    for page in state.pages.pages() {
        if page.kind != bn_content::PageKind::Learn {
            page_routes = page_routes.route(&page.path, get(handlers::pages::get_page));
        }
    }

    let router = Router::new()
        .merge(api_routes)
        .merge(learn_routes)
        .merge(page_routes)
        .route(
            "/contact",
            get(handlers::contact::get_contact).post(handlers::contact::post_contact),
        )
        .route("/ws/viewport", get(handlers::viewport::ws_handler))
        .route("/static/{*path}", get(handlers::assets::get_asset))
        .fallback(handlers::pages::fallback);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(security::accept_ch_layer()),
        )
        .with_state(state)
}
