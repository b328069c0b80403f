//! Shortcode arguments.

use std::collections::BTreeMap;

/// Arguments of a single shortcode invocation.
///
/// `{{% name first key=value %}}body{{% /name %}}` yields the positional
/// argument `first`, the named argument `key`, and the body `body`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
    body: Option<String>,
}

impl ShortcodeArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named argument, replacing any previous value.
    #[must_use]
    pub fn with_named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// Sets the body of a paired shortcode.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Positional arguments in order.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Looks up a named argument.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    /// Iterates over named arguments, sorted by key.
    pub fn named(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Body of a paired shortcode.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The shortcode's data: its body, an explicit `data` argument, or the
    /// positional arguments joined by spaces, in that order of preference.
    #[must_use]
    pub fn data(&self) -> String {
        if let Some(body) = self.body.as_deref().filter(|b| !b.trim().is_empty()) {
            return body.to_string();
        }
        if let Some(data) = self.get("data") {
            return data.to_string();
        }
        self.positional.join(" ")
    }
}
