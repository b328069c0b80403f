//! GitHub REST API response shapes.
//!
//! Only the fields the widget needs are deserialized.

use crate::snapshot::{LatestCommit, LatestRelease, RepositoryOwner, RepositorySnapshot};
use serde::Deserialize;
use url::Url;

/// Response of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryResponse {
    pub name: String,
    pub description: Option<String>,
    pub html_url: Url,
    pub language: Option<String>,
    pub owner: OwnerResponse,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub subscribers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerResponse {
    pub login: String,
    pub avatar_url: Url,
}

/// An entry of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitResponse {
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitDetail {
    pub message: String,
    pub author: Option<GitActor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitActor {
    pub date: Option<String>,
}

/// Response of `GET /repos/{owner}/{repo}/releases/latest`.
#[derive(Debug, Deserialize)]
pub(crate) struct ReleaseResponse {
    pub name: Option<String>,
    pub tag_name: String,
    pub body: Option<String>,
    pub created_at: String,
}

impl RepositoryResponse {
    /// Converts the response into a snapshot without commit or release data.
    pub(crate) fn into_snapshot(self) -> RepositorySnapshot {
        RepositorySnapshot {
            name: self.name,
            description: self.description.filter(|d| !d.is_empty()),
            html_url: self.html_url,
            language: self.language,
            owner: RepositoryOwner {
                login: self.owner.login,
                avatar_url: self.owner.avatar_url,
            },
            stargazers_count: self.stargazers_count,
            forks_count: self.forks_count,
            subscribers_count: self.subscribers_count,
            open_issues_count: self.open_issues_count,
            latest_commit: None,
            latest_release: None,
        }
    }
}

impl From<CommitResponse> for LatestCommit {
    fn from(response: CommitResponse) -> Self {
        Self {
            message: response.commit.message,
            author_date: response.commit.author.and_then(|a| a.date),
        }
    }
}

impl From<ReleaseResponse> for LatestRelease {
    fn from(response: ReleaseResponse) -> Self {
        let title = response
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(response.tag_name);
        Self {
            title,
            body: response.body.unwrap_or_default(),
            created_at: response.created_at,
        }
    }
}
