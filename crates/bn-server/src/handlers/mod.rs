//! HTTP request handlers.

pub(crate) mod assets;
pub(crate) mod contact;
pub(crate) mod learn;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod viewport;

use axum::http::HeaderMap;

/// Client-hint headers carrying the layout viewport width, in priority order.
const WIDTH_HINTS: &[&str] = &["sec-ch-viewport-width", "viewport-width"];

/// Viewport width reported by the client, if any.
///
/// An explicit `vw` query parameter wins over client-hint headers. Values
/// that are not finite non-negative numbers are ignored.
pub(crate) fn client_width(headers: &HeaderMap, vw: Option<f64>) -> Option<f64> {
    vw.into_iter()
        .chain(WIDTH_HINTS.iter().filter_map(|name| {
            headers
                .get(*name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<f64>().ok())
        }))
        .find(|width| width.is_finite() && *width >= 0.0)
}
