//! Widget option error types.

use thiserror::Error;

/// Errors that can occur while reading widget options from shortcode arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// No repository identifier was given.
    #[error("No repository given; expected 'owner/name' as shortcode data")]
    MissingRepository,

    /// A boolean option had an unrecognised value.
    #[error("Invalid value '{value}' for '{key}'; expected true or false")]
    InvalidBool { key: String, value: String },

    /// The `max_width` option is not usable as an inline CSS length.
    #[error("Invalid max_width '{value}': {message}")]
    InvalidMaxWidth { value: String, message: String },

    /// The repository identifier is malformed.
    #[error("Invalid repository '{value}': {message}")]
    InvalidRepository { value: String, message: String },
}
