use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::config::FileConfig;
use crate::settings::{Overrides, Settings};

const CONFIG_FILE_NAME: &str = "config.toml";

/// `config.toml` inside the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "vshop", "vshop").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// What [`load_dotenv`] found
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    Failed(dotenv::Error),
}

impl DotenvOutcome {
    /// Log the outcome; call once a subscriber is installed
    pub fn report(&self) {
        match self {
            Self::Loaded(path) => debug!("Loaded environment from {}", path.display()),
            Self::NotFound => debug!("No .env file found"),
            Self::Failed(e) => warn!("Failed to load .env file: {}", e),
        }
    }
}

/// Load `.env` from the working directory; variables already set in the
/// process environment are kept
///
/// Runs before logging is set up so `RUST_LOG` may come from `.env`.
pub fn load_dotenv() -> DotenvOutcome {
    match dotenv::dotenv() {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Failed(e),
    }
}

/// Assembles [`Settings`] from the config file, the environment and the
/// command line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsLoader {
    config_path: Option<PathBuf>,
    overrides: Overrides,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit config file; unlike the default location it must exist
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve settings against the process environment
    #[instrument(skip(self), level = "debug")]
    pub async fn load(self) -> Result<Settings, ConfigError> {
        self.load_with_env(|key| std::env::var(key).ok()).await
    }

    pub async fn load_with_env<F>(self, env: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &self.config_path {
            Some(path) => Self::read_file(path).await?,
            None => match default_config_path() {
                Some(path) if tokio::fs::try_exists(&path).await.unwrap_or(false) => {
                    Self::read_file(&path).await?
                }
                Some(path) => {
                    debug!("No config file at {}, using defaults", path.display());
                    FileConfig::default()
                }
                None => {
                    debug!("Project directories unavailable, skipping config file");
                    FileConfig::default()
                }
            },
        };

        Ok(Settings::resolve(file, env, self.overrides))
    }

    #[instrument(level = "debug")]
    async fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            warn!("Config file does not exist: {}", path.display());
            return Err(ConfigError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ConfigFileReadFailed {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            error!("Failed to parse config file {}: {}", path.display(), e);
            ConfigError::ConfigParsingFailed {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        info!("Loaded config file {}", path.display());
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SSID is not set - put the session cookie in .env, the environment or config.toml")]
    MissingCredential,

    #[error("Config file not found: '{path}'")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigFileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParsingFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
