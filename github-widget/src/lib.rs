#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod options;
pub mod provider;
pub mod rate_limit;
pub mod render;
pub mod runner;
pub mod shortcode;
pub mod snapshot;
pub mod summary;

pub use config::{load_widget_template, ConfigError, SiteConfig};
pub use options::{DisplayOptions, OptionsError, RepoId, WidgetOptions, DEFAULT_MAX_WIDTH};
pub use provider::{GitHubProvider, InMemoryProvider, ProviderError, SnapshotProvider};
pub use rate_limit::{check_budget, check_core_rate_limit, RateLimitInfo};
pub use render::{TemplateError, WidgetRenderer, FALLBACK_LOGO_URL};
pub use runner::{build_renderer, Runner, RunnerConfig, RunnerError};
pub use shortcode::{
    expand_shortcodes, not_found_message, parse_shortcodes, Expansion, GitHubWidget, ParseError,
    ShortcodeArgs, ShortcodeCall, ShortcodeError, ShortcodeHandler, ShortcodeOutput,
    ShortcodeRegistry,
};
pub use snapshot::{LatestCommit, LatestRelease, RepositoryOwner, RepositorySnapshot};
pub use summary::{ExpansionResult, ExpansionSummary};
