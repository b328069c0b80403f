//! Site configuration.

use super::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable consulted when the config file has no token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_API_TOKEN";

/// Concurrency used when the config file does not set one.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Parsed site configuration from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// GitHub personal access token (optional).
    #[serde(alias = "GITHUB_API_TOKEN")]
    pub github_api_token: Option<String>,

    /// Custom widget template, relative to the config file (optional).
    pub widget_template: Option<PathBuf>,

    /// Maximum concurrent API requests (optional).
    pub concurrency: Option<usize>,

    /// Directory containing the config file.
    #[serde(skip)]
    base_dir: PathBuf,
}

impl SiteConfig {
    /// Loads and validates a site configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading site config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(token) = &self.github_api_token {
            if token.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: "github-api-token cannot be empty".to_string(),
                });
            }
        }

        if self.concurrency == Some(0) {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "concurrency must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the configured token, or the non-empty `GITHUB_API_TOKEN`
    /// environment variable.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.github_api_token.clone().or_else(|| {
            std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.trim().is_empty())
        })
    }

    /// Returns the maximum concurrent API requests.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(DEFAULT_CONCURRENCY)
    }

    /// Returns the widget template path, resolved against the config file's directory.
    #[must_use]
    pub fn widget_template_path(&self) -> Option<PathBuf> {
        self.widget_template
            .as_ref()
            .map(|template| self.base_dir.join(template))
    }
}
