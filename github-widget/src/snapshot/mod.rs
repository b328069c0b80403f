//! Repository snapshot types.
//!
//! A snapshot is the read-only view of a repository that the widget renderer
//! consumes. It is built once per render by a
//! [`SnapshotProvider`](crate::provider::SnapshotProvider) and discarded after.

use serde::{Deserialize, Serialize};
use url::Url;

/// Repository metadata needed to render a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// Repository name (without the owner).
    pub name: String,

    /// Repository description, if one is set.
    pub description: Option<String>,

    /// Link to the repository on GitHub.
    pub html_url: Url,

    /// Primary language detected by GitHub.
    pub language: Option<String>,

    /// Repository owner.
    pub owner: RepositoryOwner,

    /// Number of stargazers.
    pub stargazers_count: u64,

    /// Number of forks.
    pub forks_count: u64,

    /// Number of watchers (subscribers).
    pub subscribers_count: u64,

    /// Number of open issues (GitHub includes pull requests here).
    pub open_issues_count: u64,

    /// Most recent commit on the default branch, if fetched and present.
    pub latest_commit: Option<LatestCommit>,

    /// Latest published release, if fetched and present.
    pub latest_release: Option<LatestRelease>,
}

/// Owner (user or organization) of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// Login name.
    pub login: String,

    /// Avatar image URL.
    pub avatar_url: Url,
}

/// The most recent commit of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestCommit {
    /// Full commit message.
    pub message: String,

    /// Author date as reported by GitHub (ISO 8601).
    pub author_date: Option<String>,
}

/// The latest published release of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestRelease {
    /// Release title (falls back to the tag name when untitled).
    pub title: String,

    /// Release notes.
    pub body: String,

    /// Creation timestamp as reported by GitHub (ISO 8601).
    pub created_at: String,
}
