//! Runner error types.

/// Errors that abort an expansion run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration and template loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Invalid widget options.
    #[error(transparent)]
    Options(#[from] crate::options::OptionsError),

    /// Widget template registration errors.
    #[error(transparent)]
    Template(#[from] crate::render::TemplateError),

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
