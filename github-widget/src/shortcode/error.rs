//! Shortcode error types.

use crate::options::OptionsError;
use crate::render::TemplateError;
use thiserror::Error;

/// Errors that can occur while parsing shortcodes in a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An opening `{{%` without a matching `%}}`.
    #[error("Unterminated shortcode starting at byte {offset}")]
    UnterminatedTag { offset: usize },

    /// A quoted argument without a closing quote.
    #[error("Unterminated quote in shortcode starting at byte {offset}")]
    UnterminatedQuote { offset: usize },

    /// A shortcode without a name.
    #[error("Shortcode without a name at byte {offset}")]
    MissingName { offset: usize },

    /// A closing tag with no opening tag before it.
    #[error("Closing tag for '{name}' at byte {offset} has no opening tag")]
    UnexpectedClosingTag { name: String, offset: usize },
}

/// Errors a shortcode handler can return to the host.
#[derive(Debug, Error)]
pub enum ShortcodeError {
    /// The shortcode arguments are invalid.
    #[error(transparent)]
    Options(#[from] OptionsError),

    /// The widget template failed to render.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
