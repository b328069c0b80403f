//! Site configuration loading.
//!
//! This module parses the site's TOML configuration: the GitHub token, an
//! optional custom widget template, and the request concurrency.

mod error;
mod site;

pub use error::ConfigError;
pub use site::{SiteConfig, DEFAULT_CONCURRENCY, TOKEN_ENV_VAR};

use std::path::Path;
use tracing::info;

/// Reads a widget template file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or is empty.
pub fn load_widget_template(path: &Path) -> Result<String, ConfigError> {
    info!(path = %path.display(), "Loading custom widget template");

    let template = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    if template.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: "widget template is empty".to_string(),
        });
    }

    Ok(template)
}
