//! `fdi build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use fdi_config::{CliSettings, Config};
use fdi_site::{Site, SiteInfo};

use crate::error::CliError;
use crate::exporter::StaticExporter;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover fdi.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output (one line per written file).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.build_resolved.output_dir;

        output.info(&format!("Output: {}", output_dir.display()));

        let site = Arc::new(Site::guide(SiteInfo {
            title: config.site.title.clone(),
            author: config.site.author.clone(),
        })?);

        let written = StaticExporter::new(site).export(output_dir)?;
        if self.verbose {
            for path in &written {
                output.detail(&path.display().to_string());
            }
        }

        output.success(&format!(
            "Site built successfully to {} ({} files)",
            output_dir.display(),
            written.len()
        ));
        Ok(())
    }
}
