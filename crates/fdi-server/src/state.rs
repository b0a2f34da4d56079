//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use fdi_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation and pre-rendered pages.
    pub(crate) site: Arc<Site>,
    /// Enable verbose output (per-request debug logs).
    pub(crate) verbose: bool,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
