//! Static assets under `/static/`.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;

/// Handle GET /static/{*path}.
pub(crate) async fn get_asset(
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let Some(content) = bn_assets::get(&path) else {
        return Err(ServerError::AssetNotFound(path));
    };
    let etag = bn_assets::digest(&path).map(|digest| format!("\"{digest}\""));

    if let (Some(etag), Some(if_none_match)) = (&etag, headers.get(header::IF_NONE_MATCH))
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let mut response = (
        [
            (header::CONTENT_TYPE, bn_assets::mime_for(&path)),
            (header::CACHE_CONTROL, "public, max-age=3600".to_owned()),
        ],
        content.into_owned(),
    )
        .into_response();
    if let Some(etag) = etag
        && let Ok(value) = etag.parse()
    {
        response.headers_mut().insert(header::ETAG, value);
    }
    Ok(response)
}
