//! CLI for the GitHub repository widget.
//!
//! Renders single widgets, expands `github_widget` shortcodes in content
//! files, and reports the GitHub API quota.

use clap::{Parser, Subcommand};
use github_widget::{
    build_renderer, check_core_rate_limit, ConfigError, ExpansionSummary, GitHubProvider,
    GitHubWidget, RepositorySnapshot, Runner, RunnerConfig, RunnerError, ShortcodeArgs,
    SiteConfig, WidgetOptions, DEFAULT_MAX_WIDTH,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub Widget - Render GitHub repository cards for static sites.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the site config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token (overrides the site config and GITHUB_API_TOKEN).
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single widget to stdout.
    Render {
        /// Repository as 'owner/name' or a GitHub URL.
        repository: String,

        /// Show the owner's avatar instead of the GitHub logo.
        #[arg(long)]
        avatar: bool,

        /// CSS max-width of the widget.
        #[arg(long, default_value = DEFAULT_MAX_WIDTH)]
        max_width: String,

        /// Include the latest release.
        #[arg(long)]
        latest_release: bool,

        /// Include the latest commit.
        #[arg(long)]
        latest_commit: bool,

        /// Render from a saved snapshot JSON file instead of the GitHub API.
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Expand github_widget shortcodes in content files.
    Expand {
        /// Content files to expand.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directory the expanded files are written to.
        #[arg(long)]
        out_dir: PathBuf,

        /// List shortcodes without calling the API or writing files.
        #[arg(long)]
        dry_run: bool,

        /// Maximum concurrent API requests (defaults to the site config, then 4).
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Show the remaining GitHub core API quota.
    RateLimit,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Use aws-lc-rs for TLS; another provider may already be installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<ExitCode, RunnerError> {
    let site = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let token = args.token.clone().or_else(|| site.resolve_token());

    match args.command {
        Command::Render {
            repository,
            avatar,
            max_width,
            latest_release,
            latest_commit,
            snapshot,
        } => {
            let mut shortcode_args = ShortcodeArgs::new()
                .with_body(repository)
                .with_named("max_width", max_width);
            for (key, enabled) in [
                ("avatar", avatar),
                ("latest_release", latest_release),
                ("latest_commit", latest_commit),
            ] {
                if enabled {
                    shortcode_args = shortcode_args.with_named(key, "true");
                }
            }
            let options = WidgetOptions::from_args(&shortcode_args)?;

            let html = match snapshot {
                Some(path) => render_snapshot(&path, &site, &options)?,
                None => {
                    let renderer = build_renderer(site.widget_template_path().as_deref())?;
                    let provider = GitHubProvider::new(token.as_deref())?;
                    let widget = GitHubWidget::new(Arc::new(provider), Arc::new(renderer));
                    widget.render(&options).await?
                }
            };
            println!("{html}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Expand {
            files,
            out_dir,
            dry_run,
            concurrency,
        } => {
            let concurrency = concurrency.unwrap_or_else(|| site.concurrency()).max(1);
            let mut config = RunnerConfig::new(files, out_dir, token, dry_run, concurrency);
            if let Some(path) = site.widget_template_path() {
                config = config.with_template_path(path);
            }

            let runner = Runner::new(config)?;
            let summary = runner.run().await?;
            print_summary(&summary);

            if summary.all_success() {
                Ok(ExitCode::from(0))
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Command::RateLimit => {
            let provider = GitHubProvider::new(token.as_deref())?;
            let info = check_core_rate_limit(provider.octocrab()).await?;
            println!("Core API quota: {}/{}", info.remaining, info.limit);
            println!("  Resets at (unix): {}", info.reset);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Renders a widget from a snapshot file without calling the API.
fn render_snapshot(
    path: &Path,
    site: &SiteConfig,
    options: &WidgetOptions,
) -> Result<String, RunnerError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RunnerError::Config(ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })
    })?;
    let snapshot: RepositorySnapshot = serde_json::from_str(&content).map_err(|e| {
        RunnerError::Config(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    let renderer = build_renderer(site.widget_template_path().as_deref())?;
    Ok(renderer.render(&snapshot, &options.display)?)
}

/// Prints the final run summary.
fn print_summary(summary: &ExpansionSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Files processed: {}", summary.files_processed);
    println!("  Files failed: {}", summary.files_failed);
    println!("  Shortcodes found: {}", summary.shortcodes_found);

    if !summary.dry_run {
        println!("  Widgets rendered: {}", summary.shortcodes_rendered);
        println!("  Unknown shortcodes: {}", summary.shortcodes_unknown);
        println!("  Failed shortcodes: {}", summary.shortcodes_failed);
    }
}
