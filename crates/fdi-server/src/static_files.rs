//! Embedded asset serving.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Create router for `/assets/*` and the `/images/*` shortcut.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets/{*path}", get(serve_asset))
        .route("/images/{*path}", get(serve_image))
}

async fn serve_asset(Path(path): Path<String>) -> Response {
    asset_response(&path)
}

async fn serve_image(Path(path): Path<String>) -> Response {
    asset_response(&format!("images/{path}"))
}

/// Serve an embedded asset, or 404.
fn asset_response(path: &str) -> Response {
    let Some(content) = fdi_assets::get(path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [
            (header::CONTENT_TYPE, fdi_assets::mime_for(path)),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        content.into_owned(),
    )
        .into_response()
}
