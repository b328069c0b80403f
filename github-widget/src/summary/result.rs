//! Shortcode expansion result types.

/// Outcome of expanding a single shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionResult {
    /// The shortcode was replaced by its handler's output.
    Rendered {
        /// Shortcode name.
        shortcode: String,
    },

    /// No handler is registered for the shortcode; it was left as is.
    Unknown {
        /// Shortcode name.
        shortcode: String,
    },

    /// The handler failed; the shortcode was left as is.
    Failed {
        /// Shortcode name.
        shortcode: String,
        /// Error message.
        error: String,
    },
}
