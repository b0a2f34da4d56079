//! Configuration management for the fraud detection integration guide.
//!
//! Parses `fdi.toml` with serde and discovers it in the current directory or
//! any parent. CLI flags are layered on top via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`. Expanded fields:
//! - `server.host`
//! - `site.title`
//! - `site.author`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "fdi.toml";

/// Title shown in the sidebar header when none is configured.
const DEFAULT_TITLE: &str = "Secure AI Fraud Detection Integration";

/// Author line shown under the sidebar title when none is configured.
const DEFAULT_AUTHOR: &str = "Vladyslav Davydenko";

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override static export directory.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Site presentation settings.
    pub site: SiteConfig,
    /// Static export settings as written in TOML.
    build: BuildConfigRaw,

    /// Resolved static export settings (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file, if one was loaded.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title rendered in the sidebar header and the document `<title>`.
    pub title: String,
    /// Author line rendered under the title.
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            author: DEFAULT_AUTHOR.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Resolved static export configuration.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Directory the static site is written to.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicit config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`FDI_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration, then apply CLI settings on top.
    ///
    /// Loads `config_path` when given, otherwise searches for `fdi.toml` in
    /// the current directory and its parents, otherwise uses defaults.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// reading, parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        require_non_empty(&self.site.title, "site.title")?;
        Ok(())
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            build: BuildConfigRaw::default(),
            build_resolved: BuildConfig {
                output_dir: base.join("dist"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.author = expand::expand_env(&self.site.author, "site.author")?;
        Ok(())
    }

    /// Resolve relative paths against the directory holding the config file.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.build_resolved = BuildConfig {
            output_dir: config_dir.join(self.build.output_dir.as_deref().unwrap_or("dist")),
        };
    }
}
