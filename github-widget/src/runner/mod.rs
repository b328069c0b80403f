//! Orchestrates shortcode expansion over content files.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::load_widget_template;
use crate::provider::{GitHubProvider, SnapshotProvider};
use crate::rate_limit::{check_budget, check_core_rate_limit};
use crate::render::WidgetRenderer;
use crate::shortcode::{
    expand_shortcodes, parse_shortcodes, GitHubWidget, ShortcodeCall, ShortcodeRegistry,
};
use crate::summary::ExpansionSummary;
use octocrab::Octocrab;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Builds the widget renderer, using a custom template when one is configured.
///
/// # Errors
///
/// Returns an error if the template cannot be read or does not parse.
pub fn build_renderer(template_path: Option<&Path>) -> Result<WidgetRenderer, RunnerError> {
    match template_path {
        Some(path) => Ok(WidgetRenderer::with_template(&load_widget_template(path)?)?),
        None => Ok(WidgetRenderer::new()?),
    }
}

/// Orchestrates a full expansion run.
pub struct Runner {
    config: RunnerConfig,
    registry: ShortcodeRegistry,
    octocrab: Option<Octocrab>,
}

impl Runner {
    /// Builds a runner that fetches snapshots from GitHub.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let provider = GitHubProvider::new(config.token())?;
        let octocrab = provider.octocrab().clone();
        let renderer = build_renderer(config.template_path())?;

        let mut runner = Self::with_provider(config, Arc::new(provider), renderer);
        runner.octocrab = Some(octocrab);
        Ok(runner)
    }

    /// Builds a runner around any snapshot provider.
    ///
    /// No rate limit check is performed for such runners.
    pub fn with_provider(
        config: RunnerConfig,
        provider: Arc<dyn SnapshotProvider>,
        renderer: WidgetRenderer,
    ) -> Self {
        let mut registry = ShortcodeRegistry::new();
        registry.register(Arc::new(GitHubWidget::new(provider, Arc::new(renderer))));
        Self {
            config,
            registry,
            octocrab: None,
        }
    }

    /// Returns the shortcode registry used for expansion.
    pub fn registry(&self) -> &ShortcodeRegistry {
        &self.registry
    }

    /// Executes the full expansion flow.
    pub async fn run(&self) -> Result<ExpansionSummary, RunnerError> {
        let mut summary = ExpansionSummary::new(self.config.dry_run());

        if self.config.inputs().is_empty() {
            warn!("No input files given");
            return Ok(summary);
        }

        let documents = self.read_documents(&mut summary);
        info!(count = documents.len(), "Loaded content files");

        if self.config.dry_run() {
            for (path, source) in &documents {
                preview_file(path, source, &mut summary);
            }
            return Ok(summary);
        }

        let out_dir = self.config.out_dir();
        std::fs::create_dir_all(out_dir).map_err(|e| RunnerError::OutputDir {
            path: out_dir.display().to_string(),
            source: e,
        })?;

        self.check_rate_limit(&documents).await;

        for (path, source) in &documents {
            self.process_file(path, source, &mut summary).await;
        }

        Ok(summary)
    }

    fn read_documents(&self, summary: &mut ExpansionSummary) -> Vec<(PathBuf, String)> {
        let mut documents = Vec::new();
        for path in self.config.inputs() {
            match std::fs::read_to_string(path) {
                Ok(source) => documents.push((path.clone(), source)),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to read content file");
                    summary.files_failed += 1;
                }
            }
        }
        documents
    }

    async fn check_rate_limit(&self, documents: &[(PathBuf, String)]) {
        let Some(octocrab) = &self.octocrab else {
            return;
        };

        let widgets: usize = documents
            .iter()
            .filter_map(|(_, source)| parse_shortcodes(source).ok())
            .flatten()
            .filter(|call| call.name == GitHubWidget::NAME)
            .count();

        match check_core_rate_limit(octocrab).await {
            Ok(info) => {
                check_budget(&info, widgets);
            }
            Err(e) => warn!(error = %e, "Failed to check GitHub rate limit"),
        }
    }

    async fn process_file(&self, path: &Path, source: &str, summary: &mut ExpansionSummary) {
        let span = info_span!("expand_file", path = %path.display());

        async {
            let Some(file_name) = path.file_name() else {
                error!("Input path has no file name");
                summary.files_failed += 1;
                return;
            };

            let expansion =
                match expand_shortcodes(&self.registry, source, self.config.concurrency()).await {
                    Ok(expansion) => expansion,
                    Err(e) => {
                        error!(error = %e, "Failed to parse shortcodes");
                        summary.files_failed += 1;
                        return;
                    }
                };

            for result in &expansion.results {
                summary.record_result(result);
            }

            let out_path = self.config.out_dir().join(file_name);
            match std::fs::write(&out_path, &expansion.output) {
                Ok(()) => {
                    info!(
                        out = %out_path.display(),
                        shortcodes = expansion.results.len(),
                        "Wrote expanded file"
                    );
                    summary.files_processed += 1;
                }
                Err(e) => {
                    error!(out = %out_path.display(), error = %e, "Failed to write expanded file");
                    summary.files_failed += 1;
                }
            }
        }
        .instrument(span)
        .await;
    }
}

fn preview_file(path: &Path, source: &str, summary: &mut ExpansionSummary) {
    println!("\n[DRY RUN] {}", path.display());

    let calls = match parse_shortcodes(source) {
        Ok(calls) => calls,
        Err(e) => {
            println!("  Invalid shortcodes: {e}");
            summary.files_failed += 1;
            return;
        }
    };

    summary.files_processed += 1;
    summary.shortcodes_found += calls.len();

    if calls.is_empty() {
        println!("  No shortcodes");
        return;
    }

    for (i, call) in calls.iter().enumerate() {
        println!("  [{}/{}] {}", i + 1, calls.len(), describe_call(call));
    }
}

fn describe_call(call: &ShortcodeCall) -> String {
    let data = call.args.data();
    let mut description = format!("{} {}", call.name, data.trim());
    let options: Vec<String> = call
        .args
        .named()
        .filter(|(key, _)| *key != "data")
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    if !options.is_empty() {
        description.push_str(&format!(" ({})", options.join(", ")));
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcode::ShortcodeArgs;

    #[test]
    fn describes_call() {
        let call = ShortcodeCall {
            name: "github_widget".to_string(),
            args: ShortcodeArgs::new()
                .with_body("octo/demo")
                .with_named("avatar", "true")
                .with_named("max_width", "400px"),
            span: 0..0,
        };

        assert_eq!(
            describe_call(&call),
            "github_widget octo/demo (avatar=true, max_width=400px)"
        );
    }

    #[test]
    fn builds_default_renderer() {
        assert!(build_renderer(None).is_ok());
    }

    #[test]
    fn missing_template_is_a_config_error() {
        let result = build_renderer(Some(Path::new("/nonexistent/widget.hbs")));
        assert!(matches!(result, Err(RunnerError::Config(_))));
    }
}
