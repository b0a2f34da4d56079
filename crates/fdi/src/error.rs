//! CLI error types.

use fdi_config::ConfigError;
use fdi_server::ServerError;
use fdi_site::SiteError;

use crate::exporter::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
