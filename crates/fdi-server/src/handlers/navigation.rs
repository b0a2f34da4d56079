//! Navigation API endpoint.
//!
//! Returns the sidebar entries with the active flag resolved against the
//! optional `current` query parameter.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use fdi_site::{CurrentRoute, SidebarItem};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Query for GET /api/navigation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationQuery {
    /// Route to mark as active. Defaults to `/`.
    current: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Site title shown in the sidebar header.
    title: String,
    /// Author line under the title.
    author: String,
    /// Sidebar entries in display order.
    items: Vec<SidebarItem>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let current = query
        .current
        .as_deref()
        .map_or_else(CurrentRoute::root, CurrentRoute::from_request_path);

    let info = state.site.info();
    Json(NavigationResponse {
        title: info.title.clone(),
        author: info.author.clone(),
        items: state.site.navigation().sidebar(&current),
    })
}
