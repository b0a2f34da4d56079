//! HTTP server for the fraud detection integration guide.
//!
//! Serves:
//! - Full HTML documents for every route (sidebar plus content pane)
//! - JSON API endpoints for navigation and rendered pages
//! - Embedded static assets (stylesheet, diagram)
//!
//! # Quick Start
//!
//! ```ignore
//! use fdi_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         ..Default::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (fdi-server)
//!                        │
//!                        ├─► /api/* (JSON handlers) ──► Site
//!                        ├─► /assets/*, /images/* ──► fdi-assets
//!                        └─► everything else ──► layout (HTML document or fallback view)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use fdi_site::{Site, SiteInfo};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Sidebar header.
    pub site_info: SiteInfo,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            site_info: SiteInfo::default(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let site = Arc::new(Site::guide(config.site_info.clone())?);

    let state = Arc::new(AppState {
        site,
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded config file.
#[must_use]
pub fn server_config_from_config(
    config: &fdi_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site_info: SiteInfo {
            title: config.site.title.clone(),
            author: config.site.author.clone(),
        },
        verbose,
        version,
    }
}
