//! Repository snapshot providers.
//!
//! A [`SnapshotProvider`] resolves an `owner/name` identifier into a
//! [`RepositorySnapshot`]. [`GitHubProvider`] talks to the GitHub REST API;
//! [`InMemoryProvider`] serves fixed snapshots and never touches the network.

mod api;
mod error;
mod github;

pub use error::ProviderError;
pub use github::GitHubProvider;

use crate::options::{DisplayOptions, RepoId};
use crate::snapshot::RepositorySnapshot;
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of repository snapshots.
///
/// Implementations must be thread-safe (Send + Sync) so a single provider can
/// serve concurrently expanding shortcodes via `Arc<dyn SnapshotProvider>`.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetches a snapshot of `repo`.
    ///
    /// The latest commit and release are only looked up when `options`
    /// asks for them; their absence is not an error.
    async fn fetch(
        &self,
        repo: &RepoId,
        options: &DisplayOptions,
    ) -> Result<RepositorySnapshot, ProviderError>;
}

/// Serves snapshots from memory, keyed by `owner/name`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    snapshots: HashMap<String, RepositorySnapshot>,
}

impl InMemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a snapshot served for `repo`.
    #[must_use]
    pub fn with_snapshot(mut self, repo: &RepoId, snapshot: RepositorySnapshot) -> Self {
        self.snapshots.insert(repo.to_string(), snapshot);
        self
    }
}

#[async_trait]
impl SnapshotProvider for InMemoryProvider {
    async fn fetch(
        &self,
        repo: &RepoId,
        options: &DisplayOptions,
    ) -> Result<RepositorySnapshot, ProviderError> {
        let mut snapshot =
            self.snapshots
                .get(&repo.to_string())
                .cloned()
                .ok_or_else(|| ProviderError::NotFound {
                    repo: repo.to_string(),
                })?;

        if !options.include_latest_commit {
            snapshot.latest_commit = None;
        }
        if !options.include_latest_release {
            snapshot.latest_release = None;
        }
        Ok(snapshot)
    }
}
