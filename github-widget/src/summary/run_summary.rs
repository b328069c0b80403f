//! Run summary types.

use super::result::ExpansionResult;

/// Summary of a complete expansion run.
#[derive(Debug, Clone, Default)]
pub struct ExpansionSummary {
    /// Number of files expanded and written.
    pub files_processed: usize,

    /// Number of files that could not be read, parsed or written.
    pub files_failed: usize,

    /// Number of shortcodes found.
    pub shortcodes_found: usize,

    /// Number of shortcodes replaced by rendered HTML.
    pub shortcodes_rendered: usize,

    /// Number of shortcodes without a registered handler.
    pub shortcodes_unknown: usize,

    /// Number of shortcodes whose handler failed.
    pub shortcodes_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl ExpansionSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a shortcode result.
    pub fn record_result(&mut self, result: &ExpansionResult) {
        self.shortcodes_found += 1;
        match result {
            ExpansionResult::Rendered { .. } => self.shortcodes_rendered += 1,
            ExpansionResult::Unknown { .. } => self.shortcodes_unknown += 1,
            ExpansionResult::Failed { .. } => self.shortcodes_failed += 1,
        }
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0 || self.shortcodes_failed > 0
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_results() {
        let mut summary = ExpansionSummary::new(false);

        summary.record_result(&ExpansionResult::Rendered {
            shortcode: "github_widget".to_string(),
        });
        summary.record_result(&ExpansionResult::Unknown {
            shortcode: "gallery".to_string(),
        });

        assert_eq!(summary.shortcodes_found, 2);
        assert_eq!(summary.shortcodes_rendered, 1);
        assert_eq!(summary.shortcodes_unknown, 1);
        assert!(summary.all_success());
    }

    #[test]
    fn failures_are_reported() {
        let mut summary = ExpansionSummary::new(false);

        summary.record_result(&ExpansionResult::Failed {
            shortcode: "github_widget".to_string(),
            error: "No repository given".to_string(),
        });

        assert!(summary.has_failures());
        assert!(!summary.all_success());
    }

    #[test]
    fn file_failures_are_reported() {
        let summary = ExpansionSummary {
            files_failed: 1,
            ..ExpansionSummary::new(true)
        };
        assert!(summary.has_failures());
    }
}
