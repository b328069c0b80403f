//! Shortcode expansion.

use super::{parse_shortcodes, ParseError, ShortcodeRegistry};
use crate::summary::ExpansionResult;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// A document with its shortcodes expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// The expanded document.
    pub output: String,

    /// Outcome of every shortcode, in document order.
    pub results: Vec<ExpansionResult>,

    /// Dependencies reported by the handlers.
    pub dependencies: Vec<String>,
}

/// Expands every registered shortcode in `source`.
///
/// Handlers run with at most `concurrency` in flight; the output keeps
/// document order. Unknown shortcodes and failed handlers leave the original
/// directive text in place.
///
/// # Errors
///
/// Returns [`ParseError`] if the document's shortcodes are malformed. Nothing
/// is expanded in that case.
pub async fn expand_shortcodes(
    registry: &ShortcodeRegistry,
    source: &str,
    concurrency: usize,
) -> Result<Expansion, ParseError> {
    let calls = parse_shortcodes(source)?;
    debug!(count = calls.len(), "Found shortcodes");

    let outcomes: Vec<_> = stream::iter(&calls)
        .map(|call| async move {
            match registry.get(&call.name) {
                Some(handler) => Some(handler.handle(&call.args).await),
                None => None,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut expansion = Expansion {
        output: String::with_capacity(source.len()),
        ..Expansion::default()
    };
    let mut last = 0;

    for (call, outcome) in calls.iter().zip(outcomes) {
        expansion.output.push_str(&source[last..call.span.start]);
        let original = &source[call.span.clone()];

        let result = match outcome {
            Some(Ok(rendered)) => {
                expansion.output.push_str(&rendered.html);
                expansion.dependencies.extend(rendered.dependencies);
                ExpansionResult::Rendered {
                    shortcode: call.name.clone(),
                }
            }
            Some(Err(e)) => {
                warn!(shortcode = %call.name, error = %e, "Shortcode failed, leaving it unexpanded");
                expansion.output.push_str(original);
                ExpansionResult::Failed {
                    shortcode: call.name.clone(),
                    error: e.to_string(),
                }
            }
            None => {
                debug!(shortcode = %call.name, "No handler registered, leaving shortcode unexpanded");
                expansion.output.push_str(original);
                ExpansionResult::Unknown {
                    shortcode: call.name.clone(),
                }
            }
        };

        expansion.results.push(result);
        last = call.span.end;
    }

    expansion.output.push_str(&source[last..]);
    Ok(expansion)
}
