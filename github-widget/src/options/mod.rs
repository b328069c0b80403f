//! Widget options.
//!
//! This module turns the untyped key/value arguments of a `github_widget`
//! shortcode into validated [`WidgetOptions`].

mod display;
mod error;
mod repo_id;

pub use display::{DisplayOptions, DEFAULT_MAX_WIDTH};
pub use error::OptionsError;
pub use repo_id::RepoId;

use crate::shortcode::ShortcodeArgs;
use tracing::warn;

/// Option keys understood by the widget.
const KNOWN_KEYS: &[&str] = &[
    "data",
    "avatar",
    "max_width",
    "latest_release",
    "latest_commit",
];

/// Characters that would let a `max_width` value escape the inline style.
const FORBIDDEN_WIDTH_CHARS: &[char] = &[';', '"', '\'', '<', '>', '{', '}', '\\'];

/// Options for a single widget: which repository, and how to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Repository identifier exactly as the author wrote it.
    pub repository: String,

    /// Display options.
    pub display: DisplayOptions,
}

impl WidgetOptions {
    /// Reads widget options from shortcode arguments.
    ///
    /// The repository is the first whitespace-delimited token of the shortcode
    /// data. Unknown keys are logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] if the repository is missing or an option
    /// value cannot be parsed.
    pub fn from_args(args: &ShortcodeArgs) -> Result<Self, OptionsError> {
        let data = args.data();
        let repository = data
            .split_whitespace()
            .next()
            .ok_or(OptionsError::MissingRepository)?
            .to_string();

        for (key, _) in args.named() {
            if !KNOWN_KEYS.contains(&key) {
                warn!(key, "Ignoring unknown github_widget option");
            }
        }

        let max_width = match args.get("max_width") {
            Some(value) => validate_max_width(value)?,
            None => DEFAULT_MAX_WIDTH.to_string(),
        };

        Ok(Self {
            repository,
            display: DisplayOptions {
                show_avatar: bool_option(args, "avatar")?,
                max_width,
                include_latest_release: bool_option(args, "latest_release")?,
                include_latest_commit: bool_option(args, "latest_commit")?,
            },
        })
    }
}

/// Reads a boolean option, defaulting to `false` when absent.
fn bool_option(args: &ShortcodeArgs, key: &str) -> Result<bool, OptionsError> {
    args.get(key).map_or(Ok(false), |value| parse_bool(key, value))
}

/// Parses the boolean spellings accepted in shortcode arguments.
fn parse_bool(key: &str, value: &str) -> Result<bool, OptionsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(OptionsError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn validate_max_width(value: &str) -> Result<String, OptionsError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(OptionsError::InvalidMaxWidth {
            value: value.to_string(),
            message: "value is empty".to_string(),
        });
    }

    if let Some(c) = trimmed.chars().find(|c| FORBIDDEN_WIDTH_CHARS.contains(c)) {
        return Err(OptionsError::InvalidMaxWidth {
            value: value.to_string(),
            message: format!("character '{c}' is not allowed"),
        });
    }

    Ok(trimmed.to_string())
}
