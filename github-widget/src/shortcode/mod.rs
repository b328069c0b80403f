//! Shortcodes.
//!
//! Parsing of `{{% name ... %}}` directives, the handler registry, the
//! `github_widget` handler, and document expansion.

mod args;
mod error;
mod expand;
mod parser;
mod registry;
mod widget;

pub use args::ShortcodeArgs;
pub use error::{ParseError, ShortcodeError};
pub use expand::{expand_shortcodes, Expansion};
pub use parser::{parse_shortcodes, ShortcodeCall};
pub use registry::{ShortcodeHandler, ShortcodeOutput, ShortcodeRegistry};
pub use widget::{not_found_message, GitHubWidget};
