//! `fdi serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use fdi_config::{CliSettings, Config};
use fdi_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover fdi.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "FDI_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "FDI_PORT")]
    port: Option<u16>,

    /// Enable verbose output (request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Serving \"{}\" on http://{}:{}",
            config.site.title, config.server.host, config.server.port
        ));
        if let Some(path) = &config.config_path {
            output.detail(&format!("Config: {}", path.display()));
        }

        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config).await?;

        Ok(())
    }
}
