//! Display options for a single widget.

use serde::Serialize;

/// Default CSS `max-width` of the widget container.
pub const DEFAULT_MAX_WIDTH: &str = "100%";

/// How a widget should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOptions {
    /// Show the owner's avatar instead of the GitHub logo.
    pub show_avatar: bool,

    /// CSS length applied as the container's `max-width`.
    pub max_width: String,

    /// Append the latest release to the widget.
    pub include_latest_release: bool,

    /// Append the latest commit to the widget.
    pub include_latest_commit: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_avatar: false,
            max_width: DEFAULT_MAX_WIDTH.to_string(),
            include_latest_release: false,
            include_latest_commit: false,
        }
    }
}
