//! Shortcode handlers and their registry.

use super::{ShortcodeArgs, ShortcodeError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Output of a shortcode handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeOutput {
    /// HTML replacing the shortcode.
    pub html: String,

    /// Files the output depends on, for hosts that track rebuild dependencies.
    pub dependencies: Vec<String>,
}

impl ShortcodeOutput {
    /// Creates output without dependencies.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            dependencies: Vec::new(),
        }
    }
}

/// A named shortcode callback.
#[async_trait]
pub trait ShortcodeHandler: Send + Sync {
    /// Name the shortcode is invoked by.
    fn name(&self) -> &str;

    /// Expands one invocation.
    async fn handle(&self, args: &ShortcodeArgs) -> Result<ShortcodeOutput, ShortcodeError>;
}

/// Shortcode handlers by name.
#[derive(Clone, Default)]
pub struct ShortcodeRegistry {
    handlers: HashMap<String, Arc<dyn ShortcodeHandler>>,
}

impl ShortcodeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under its name, returning the handler it replaced.
    pub fn register(
        &mut self,
        handler: Arc<dyn ShortcodeHandler>,
    ) -> Option<Arc<dyn ShortcodeHandler>> {
        self.handlers.insert(handler.name().to_string(), handler)
    }

    /// Looks up a handler.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ShortcodeHandler>> {
        self.handlers.get(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ShortcodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcodeRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}
