use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use github_widget::{
    build_renderer, expand_shortcodes, ExpansionResult, GitHubWidget, InMemoryProvider, RepoId,
    RepositorySnapshot, Runner, RunnerConfig, ShortcodeRegistry, SiteConfig, WidgetRenderer,
    FALLBACK_LOGO_URL,
};
use tempfile::TempDir;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn demo_snapshot() -> RepositorySnapshot {
    let json = fs::read_to_string(fixtures_root().join("snapshots/octo-demo.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn provider() -> Arc<InMemoryProvider> {
    let repo: RepoId = "octo/demo".parse().unwrap();
    Arc::new(InMemoryProvider::new().with_snapshot(&repo, demo_snapshot()))
}

fn registry(renderer: WidgetRenderer) -> ShortcodeRegistry {
    let mut registry = ShortcodeRegistry::new();
    registry.register(Arc::new(GitHubWidget::new(provider(), Arc::new(renderer))));
    registry
}

#[tokio::test]
async fn expands_widget_in_document() {
    let source = fs::read_to_string(fixtures_root().join("pages/projects.md")).unwrap();

    let expansion = expand_shortcodes(&registry(WidgetRenderer::new().unwrap()), &source, 4)
        .await
        .unwrap();
    let output = &expansion.output;

    assert!(output.starts_with("# Projects\n\n<div class=\"github-widget\" style=\"max-width: 480px;\">"));
    assert!(output.contains(r#"src="https://avatars.githubusercontent.com/u/583231""#));
    assert!(output.contains("<p>Tiny &lt;demo&gt; project</p>"));
    assert!(output.contains("<strong>Latest Commit:</strong> Fix widget spacing (2024-05-01T12:00:00Z)"));
    assert!(!output.contains("Latest Release"));
    assert!(output.contains("<p>Repository 'octo/gone' not found or an error occurred.</p>"));
    assert!(output.contains("{{% gallery holidays %}}"));
    assert!(!output.contains("{{% github_widget"));

    assert_eq!(
        expansion.results,
        [
            ExpansionResult::Rendered {
                shortcode: "github_widget".to_string()
            },
            ExpansionResult::Rendered {
                shortcode: "github_widget".to_string()
            },
            ExpansionResult::Unknown {
                shortcode: "gallery".to_string()
            },
        ]
    );
    assert!(expansion.dependencies.is_empty());
}

#[tokio::test]
async fn default_options_use_fallback_logo() {
    let source = "{{% github_widget octo/demo %}}";

    let expansion = expand_shortcodes(&registry(WidgetRenderer::new().unwrap()), source, 1)
        .await
        .unwrap();

    assert!(expansion.output.contains(FALLBACK_LOGO_URL));
    assert!(expansion.output.contains(r#"style="max-width: 100%;""#));
    assert!(!expansion.output.contains("Latest Commit"));
}

#[tokio::test]
async fn site_config_template_is_used() {
    let config = SiteConfig::load(&fixtures_root().join("site.toml")).unwrap();
    assert_eq!(config.concurrency(), 2);

    let template_path = config.widget_template_path().unwrap();
    let renderer = build_renderer(Some(&template_path)).unwrap();

    let expansion = expand_shortcodes(
        &registry(renderer),
        "See {{% github_widget octo/demo %}}.",
        config.concurrency(),
    )
    .await
    .unwrap();

    assert_eq!(
        expansion.output,
        "See <a class=\"gh-compact\" href=\"https://github.com/octo/demo\">demo ★5</a>\n."
    );
}

#[tokio::test]
async fn runner_writes_expanded_files() {
    let out = TempDir::new().unwrap();
    let config = RunnerConfig::new(
        vec![
            fixtures_root().join("pages/projects.md"),
            fixtures_root().join("pages/broken.md"),
            fixtures_root().join("pages/missing.md"),
        ],
        out.path().to_path_buf(),
        None,
        false,
        2,
    );
    let runner = Runner::with_provider(config, provider(), WidgetRenderer::new().unwrap());

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_failed, 2);
    assert_eq!(summary.shortcodes_found, 3);
    assert_eq!(summary.shortcodes_rendered, 2);
    assert_eq!(summary.shortcodes_unknown, 1);
    assert_eq!(summary.shortcodes_failed, 0);
    assert!(summary.has_failures());

    let written = fs::read_to_string(out.path().join("projects.md")).unwrap();
    assert!(written.contains("<h3>demo</h3>"));
    assert!(!out.path().join("broken.md").exists());
}

#[tokio::test]
async fn dry_run_writes_nothing() {
    let out = TempDir::new().unwrap();
    let out_dir = out.path().join("site");
    let config = RunnerConfig::new(
        vec![fixtures_root().join("pages/projects.md")],
        out_dir.clone(),
        None,
        true,
        2,
    );
    let runner = Runner::with_provider(config, provider(), WidgetRenderer::new().unwrap());

    let summary = runner.run().await.unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.shortcodes_found, 3);
    assert_eq!(summary.shortcodes_rendered, 0);
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn runner_registers_github_widget() {
    let out = TempDir::new().unwrap();
    let config = RunnerConfig::new(Vec::new(), out.path().to_path_buf(), None, false, 1);
    let runner = Runner::with_provider(config, provider(), WidgetRenderer::new().unwrap());

    assert_eq!(runner.registry().names(), ["github_widget"]);

    let summary = runner.run().await.unwrap();
    assert_eq!(summary.files_processed, 0);
    assert!(summary.all_success());
}
