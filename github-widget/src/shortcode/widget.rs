//! The `github_widget` shortcode.

use super::{ShortcodeArgs, ShortcodeError, ShortcodeHandler, ShortcodeOutput};
use crate::options::{RepoId, WidgetOptions};
use crate::provider::SnapshotProvider;
use crate::render::{TemplateError, WidgetRenderer};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info_span, warn, Instrument};

/// Renders a GitHub repository card for `{{% github_widget %}}owner/name{{% /github_widget %}}`.
pub struct GitHubWidget {
    provider: Arc<dyn SnapshotProvider>,
    renderer: Arc<WidgetRenderer>,
}

impl GitHubWidget {
    /// Shortcode name.
    pub const NAME: &'static str = "github_widget";

    /// Creates the widget from a snapshot provider and a renderer.
    pub fn new(provider: Arc<dyn SnapshotProvider>, renderer: Arc<WidgetRenderer>) -> Self {
        Self { provider, renderer }
    }

    /// Renders the widget for already-parsed options.
    ///
    /// A repository that cannot be resolved (malformed identifier, not
    /// found, or any API failure) yields [`not_found_message`] instead of
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if a custom widget template fails to render.
    pub async fn render(&self, options: &WidgetOptions) -> Result<String, TemplateError> {
        let span = info_span!("github_widget", repo = %options.repository);

        async {
            let repo = match options.repository.parse::<RepoId>() {
                Ok(repo) => repo,
                Err(e) => {
                    warn!(error = %e, "Invalid repository identifier");
                    return Ok(not_found_message(&options.repository));
                }
            };

            match self.provider.fetch(&repo, &options.display).await {
                Ok(snapshot) => self.renderer.render(&snapshot, &options.display),
                Err(e) => {
                    warn!(error = %e, "Failed to fetch repository");
                    Ok(not_found_message(&options.repository))
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl ShortcodeHandler for GitHubWidget {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn handle(&self, args: &ShortcodeArgs) -> Result<ShortcodeOutput, ShortcodeError> {
        let options = WidgetOptions::from_args(args)?;
        let html = self.render(&options).await?;
        Ok(ShortcodeOutput::new(html))
    }
}

/// Message shown in place of a widget whose repository could not be resolved.
#[must_use]
pub fn not_found_message(repository: &str) -> String {
    format!(
        "<p>Repository '{}' not found or an error occurred.</p>",
        handlebars::html_escape(repository)
    )
}
