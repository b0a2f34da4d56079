//! Pages API endpoint.
//!
//! Returns a rendered page as JSON: metadata, table of contents, snippet
//! summary and HTML content.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use fdi_site::{ContentPage, CurrentRoute, SnippetRef, TocEntry};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{compute_etag, to_route_path};
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// Table of contents entries.
    toc: Vec<TocEntry>,
    /// Code snippets shown on the page, in document order.
    snippets: Vec<SnippetResponse>,
    /// Rendered HTML content.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta {
    title: String,
    /// Route path (with leading slash).
    path: String,
}

/// Snippet summary for serialization. The source is already in `content`.
#[derive(Serialize)]
struct SnippetResponse {
    language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl From<&SnippetRef> for SnippetResponse {
    fn from(snippet: &SnippetRef) -> Self {
        Self {
            language: snippet.language.as_str(),
            title: snippet.title.clone(),
        }
    }
}

impl From<&ContentPage> for PageResponse {
    fn from(page: &ContentPage) -> Self {
        Self {
            meta: PageMeta {
                title: page.title().to_owned(),
                path: page.path().to_owned(),
            },
            toc: page.toc().to_vec(),
            snippets: page.snippets().iter().map(SnippetResponse::from).collect(),
            content: page.html().to_owned(),
        }
    }
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl("", &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(&path, &state, &headers)
}

/// Shared implementation for page lookup.
fn get_page_impl(
    path: &str,
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let route = CurrentRoute::new(to_route_path(path));
    let page = state
        .site
        .resolve(&route)
        .page()
        .ok_or_else(|| ServerError::PageNotFound(route.to_string()))?;

    if state.verbose {
        tracing::info!(path = %route, "Serving page");
    }

    let etag = compute_etag(&state.version, page.html());

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(PageResponse::from(page)),
    )
        .into_response())
}
