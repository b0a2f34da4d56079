//! HTML document endpoint.
//!
//! Every path outside `/api` and `/assets` is a route of the guide. Known
//! routes get the page inside the layout, unknown ones get the layout with
//! the fallback view and a 404 status.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use fdi_site::{CurrentRoute, render_document};

use crate::handlers::compute_etag;
use crate::state::AppState;

/// Handle GET for any guide route.
pub(crate) async fn get_document(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    document_response(&state, &CurrentRoute::from_request_path(uri.path()), &headers)
}

/// Render `route` as a full document, honouring `If-None-Match`.
fn document_response(state: &AppState, route: &CurrentRoute, headers: &HeaderMap) -> Response {
    let view = render_document(&state.site, route);

    if state.verbose {
        tracing::info!(path = %route, found = view.found, "Serving document");
    }

    if !view.found {
        return (StatusCode::NOT_FOUND, Html(view.html)).into_response();
    }

    let etag = compute_etag(&state.version, &view.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(view.html),
    )
        .into_response()
}
