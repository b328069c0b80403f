//! Widget rendering using Handlebars.
//!
//! Maps a [`RepositorySnapshot`] and [`DisplayOptions`] to the HTML of a
//! repository card. Rendering is pure: no network or disk access, and
//! identical inputs always produce identical output.

mod error;

pub use error::TemplateError;

use crate::options::DisplayOptions;
use crate::snapshot::RepositorySnapshot;
use handlebars::Handlebars;
use serde_json::{json, Value};

/// Logo shown in place of the owner's avatar when avatars are disabled.
pub const FALLBACK_LOGO_URL: &str =
    "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";

/// Built-in widget template.
pub const WIDGET_TEMPLATE: &str = include_str!("widget.hbs");

/// Name the widget template is registered under.
const WIDGET_TEMPLATE_NAME: &str = "github_widget";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - The default `html_escape` for every interpolated value
/// - Strict mode (catches misspelled variables in custom templates)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs
}

/// Renders repository cards.
pub struct WidgetRenderer {
    handlebars: Handlebars<'static>,
}

impl WidgetRenderer {
    /// Creates a renderer using the built-in widget template.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to register.
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_template(WIDGET_TEMPLATE)
    }

    /// Creates a renderer using a custom widget template.
    ///
    /// The template sees the same variables as the built-in one:
    /// `max_width`, `image_url`, `html_url`, `owner_login`, `name`,
    /// `description`, `language`, `stars`, `forks`, `watchers`,
    /// `open_issues`, `latest_commit` and `latest_release`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not parse.
    pub fn with_template(template: &str) -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(WIDGET_TEMPLATE_NAME, template)?;
        Ok(Self { handlebars })
    }

    /// Renders the widget for a repository snapshot.
    ///
    /// The latest commit and release only appear when both requested by
    /// `options` and present in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom template references unknown variables.
    /// The built-in template always renders.
    pub fn render(
        &self,
        snapshot: &RepositorySnapshot,
        options: &DisplayOptions,
    ) -> Result<String, TemplateError> {
        let data = widget_data(snapshot, options);
        Ok(self.handlebars.render(WIDGET_TEMPLATE_NAME, &data)?)
    }
}

/// Builds the template data for a widget.
fn widget_data(snapshot: &RepositorySnapshot, options: &DisplayOptions) -> Value {
    let image_url = if options.show_avatar {
        snapshot.owner.avatar_url.as_str()
    } else {
        FALLBACK_LOGO_URL
    };

    let latest_commit = snapshot
        .latest_commit
        .as_ref()
        .filter(|_| options.include_latest_commit);
    let latest_release = snapshot
        .latest_release
        .as_ref()
        .filter(|_| options.include_latest_release);

    json!({
        "max_width": options.max_width,
        "image_url": image_url,
        "html_url": snapshot.html_url.as_str(),
        "owner_login": snapshot.owner.login,
        "name": snapshot.name,
        "description": snapshot.description,
        "language": snapshot.language,
        "stars": snapshot.stargazers_count,
        "forks": snapshot.forks_count,
        "watchers": snapshot.subscribers_count,
        "open_issues": snapshot.open_issues_count,
        "latest_commit": latest_commit,
        "latest_release": latest_release
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{LatestCommit, LatestRelease, RepositoryOwner};
    use url::Url;

    fn sample_snapshot() -> RepositorySnapshot {
        RepositorySnapshot {
            name: "demo".to_string(),
            description: Some("A demo repository".to_string()),
            html_url: Url::parse("https://github.com/octo/demo").unwrap(),
            language: Some("Rust".to_string()),
            owner: RepositoryOwner {
                login: "octo".to_string(),
                avatar_url: Url::parse("https://avatars.githubusercontent.com/u/583231")
                    .unwrap(),
            },
            stargazers_count: 5,
            forks_count: 2,
            subscribers_count: 1,
            open_issues_count: 0,
            latest_commit: Some(LatestCommit {
                message: "Fix parser".to_string(),
                author_date: Some("2024-05-01T12:00:00Z".to_string()),
            }),
            latest_release: Some(LatestRelease {
                title: "v1.2.0".to_string(),
                body: "Bug fixes".to_string(),
                created_at: "2024-04-20T08:30:00Z".to_string(),
            }),
        }
    }

    fn render(snapshot: &RepositorySnapshot, options: &DisplayOptions) -> String {
        WidgetRenderer::new().unwrap().render(snapshot, options).unwrap()
    }

    #[test]
    fn renders_stats_and_heading() {
        let html = render(&sample_snapshot(), &DisplayOptions::default());

        assert!(html.contains("<h3>demo</h3>"));
        assert!(html.contains("⭐ Stars: 5"));
        assert!(html.contains("Forks: 2"));
        assert!(html.contains("Watchers: 1"));
        assert!(html.contains("Open Issues: 0"));
        assert!(html.contains("<p>A demo repository</p>"));
        assert!(html.contains("<strong>Languages:</strong> Rust"));
        assert!(html.contains(r#"href="https://github.com/octo/demo""#));
    }

    #[test]
    fn no_activity_without_flags() {
        let html = render(&sample_snapshot(), &DisplayOptions::default());

        assert!(!html.contains("Latest Commit"));
        assert!(!html.contains("Latest Release"));
    }

    #[test]
    fn renders_latest_commit_and_release() {
        let options = DisplayOptions {
            include_latest_commit: true,
            include_latest_release: true,
            ..DisplayOptions::default()
        };

        let html = render(&sample_snapshot(), &options);

        assert!(html
            .contains("<p><strong>Latest Commit:</strong> Fix parser (2024-05-01T12:00:00Z)</p>"));
        assert!(html.contains(
            "<p><strong>Latest Release:</strong> v1.2.0 - Bug fixes (2024-04-20T08:30:00Z)</p>"
        ));
    }

    #[test]
    fn commit_without_date_omits_parentheses() {
        let mut snapshot = sample_snapshot();
        snapshot.latest_commit = Some(LatestCommit {
            message: "Initial commit".to_string(),
            author_date: None,
        });
        let options = DisplayOptions {
            include_latest_commit: true,
            ..DisplayOptions::default()
        };

        let html = render(&snapshot, &options);
        assert!(html.contains("<p><strong>Latest Commit:</strong> Initial commit</p>"));
    }

    #[test]
    fn missing_release_renders_nothing() {
        let mut snapshot = sample_snapshot();
        snapshot.latest_release = None;
        let options = DisplayOptions {
            include_latest_release: true,
            ..DisplayOptions::default()
        };

        let html = render(&snapshot, &options);
        assert!(!html.contains("Latest Release"));
    }

    #[test]
    fn fallback_logo_without_avatar() {
        let html = render(&sample_snapshot(), &DisplayOptions::default());

        assert!(html.contains(&format!(r#"src="{FALLBACK_LOGO_URL}""#)));
        assert!(!html.contains("avatars.githubusercontent.com"));
    }

    #[test]
    fn avatar_when_requested() {
        let options = DisplayOptions {
            show_avatar: true,
            ..DisplayOptions::default()
        };

        let html = render(&sample_snapshot(), &options);

        assert!(html.contains(r#"src="https://avatars.githubusercontent.com/u/583231""#));
        assert!(!html.contains(FALLBACK_LOGO_URL));
    }

    #[test]
    fn max_width_appears_verbatim() {
        let options = DisplayOptions {
            max_width: "42rem".to_string(),
            ..DisplayOptions::default()
        };

        let html = render(&sample_snapshot(), &options);
        assert!(html.contains(r#"style="max-width: 42rem;""#));
    }

    #[test]
    fn default_max_width() {
        let html = render(&sample_snapshot(), &DisplayOptions::default());
        assert!(html.contains(r#"style="max-width: 100%;""#));
    }

    #[test]
    fn escapes_repository_text() {
        let mut snapshot = sample_snapshot();
        snapshot.description = Some("<script>alert('xss')</script>".to_string());
        snapshot.latest_commit = Some(LatestCommit {
            message: "Use <b> & \"quotes\"".to_string(),
            author_date: None,
        });
        let options = DisplayOptions {
            include_latest_commit: true,
            ..DisplayOptions::default()
        };

        let html = render(&snapshot, &options);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"));
        assert!(html.contains("Use &lt;b&gt; &amp; &quot;quotes&quot;"));
    }

    #[test]
    fn omits_absent_description_and_language() {
        let mut snapshot = sample_snapshot();
        snapshot.description = None;
        snapshot.language = None;

        let html = render(&snapshot, &DisplayOptions::default());

        assert!(!html.contains("Languages:"));
        assert!(!html.contains("None"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = WidgetRenderer::new().unwrap();
        let snapshot = sample_snapshot();
        let options = DisplayOptions {
            show_avatar: true,
            include_latest_commit: true,
            include_latest_release: true,
            ..DisplayOptions::default()
        };

        let first = renderer.render(&snapshot, &options).unwrap();
        let second = renderer.render(&snapshot, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_template() {
        let renderer =
            WidgetRenderer::with_template("{{name}} has {{stars}} stars").unwrap();

        let html = renderer
            .render(&sample_snapshot(), &DisplayOptions::default())
            .unwrap();
        assert_eq!(html, "demo has 5 stars");
    }

    #[test]
    fn custom_template_with_unknown_variable_fails() {
        let renderer = WidgetRenderer::with_template("{{homepage}}").unwrap();

        let result = renderer.render(&sample_snapshot(), &DisplayOptions::default());
        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }

    #[test]
    fn invalid_custom_template_is_rejected() {
        let result = WidgetRenderer::with_template("{{#if name}}unclosed");
        assert!(matches!(result, Err(TemplateError::RegistrationError(_))));
    }

    #[test]
    fn escapes_attribute_breaking_characters() {
        let mut snapshot = sample_snapshot();
        snapshot.description = Some("a=b `tick`".to_string());

        let html = render(&snapshot, &DisplayOptions::default());

        assert!(html.contains("<p>a&#x3D;b &#x60;tick&#x60;</p>"));
    }
}
