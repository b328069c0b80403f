//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for an expansion run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Content files to expand.
    inputs: Vec<PathBuf>,
    /// Directory expanded files are written to.
    out_dir: PathBuf,
    /// GitHub token used for API calls.
    token: Option<String>,
    /// Whether to list shortcodes without fetching or writing anything.
    dry_run: bool,
    /// Maximum concurrent API requests.
    concurrency: usize,
    /// Path to a custom widget template.
    template_path: Option<PathBuf>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        inputs: Vec<PathBuf>,
        out_dir: PathBuf,
        token: Option<String>,
        dry_run: bool,
        concurrency: usize,
    ) -> Self {
        Self {
            inputs,
            out_dir,
            token,
            dry_run,
            concurrency,
            template_path: None,
        }
    }

    /// Sets a custom widget template path.
    pub fn with_template_path(mut self, template_path: PathBuf) -> Self {
        self.template_path = Some(template_path);
        self
    }

    /// Returns the input files.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the max concurrent API requests.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the custom widget template path.
    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }
}
