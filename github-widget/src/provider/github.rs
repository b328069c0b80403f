//! Snapshot provider backed by the GitHub REST API.

use super::api::{CommitResponse, ReleaseResponse, RepositoryResponse};
use super::error::status_of;
use super::{ProviderError, SnapshotProvider};
use crate::options::{DisplayOptions, RepoId};
use crate::snapshot::{LatestCommit, LatestRelease, RepositorySnapshot};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

/// GitHub answers the commit list of an empty repository with 409 Conflict.
const EMPTY_REPOSITORY_STATUS: u16 = 409;

/// Query parameters for a single-item page.
#[derive(Serialize)]
struct PerPage {
    per_page: u8,
}

/// Fetches repository snapshots from GitHub using octocrab.
#[derive(Clone)]
pub struct GitHubProvider {
    octocrab: Octocrab,
}

impl GitHubProvider {
    /// Creates a provider, authenticated with a personal access token if given.
    ///
    /// Without a token, requests are subject to GitHub's anonymous rate limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: Option<&str>) -> Result<Self, octocrab::Error> {
        let builder = Octocrab::builder();
        let octocrab = match token {
            Some(token) => builder.personal_token(token.to_string()).build()?,
            None => {
                info!("No GitHub token configured, using anonymous API access");
                builder.build()?
            }
        };
        Ok(Self { octocrab })
    }

    /// Wraps an existing octocrab client.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Returns the underlying octocrab client.
    #[must_use]
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    async fn repository(&self, repo: &RepoId) -> Result<RepositorySnapshot, ProviderError> {
        let route = format!("/repos/{}/{}", repo.owner(), repo.name());
        let response: RepositoryResponse = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| ProviderError::from_octocrab(repo, e))?;
        Ok(response.into_snapshot())
    }

    async fn latest_commit(&self, repo: &RepoId) -> Result<Option<LatestCommit>, ProviderError> {
        let route = format!("/repos/{}/{}/commits", repo.owner(), repo.name());
        let result: Result<Vec<CommitResponse>, _> = self
            .octocrab
            .get(route, Some(&PerPage { per_page: 1 }))
            .await;

        match result {
            Ok(commits) => Ok(commits.into_iter().next().map(LatestCommit::from)),
            Err(e) if matches!(status_of(&e), Some((EMPTY_REPOSITORY_STATUS, _))) => {
                debug!("Repository has no commits");
                Ok(None)
            }
            Err(e) => Err(ProviderError::from_octocrab(repo, e)),
        }
    }

    async fn latest_release(
        &self,
        repo: &RepoId,
    ) -> Result<Option<LatestRelease>, ProviderError> {
        let route = format!("/repos/{}/{}/releases/latest", repo.owner(), repo.name());
        let result: Result<ReleaseResponse, _> = self.octocrab.get(route, None::<&()>).await;

        match result {
            Ok(release) => Ok(Some(release.into())),
            Err(e) => match ProviderError::from_octocrab(repo, e) {
                ProviderError::NotFound { .. } => {
                    debug!("Repository has no releases");
                    Ok(None)
                }
                other => Err(other),
            },
        }
    }
}

#[async_trait]
impl SnapshotProvider for GitHubProvider {
    async fn fetch(
        &self,
        repo: &RepoId,
        options: &DisplayOptions,
    ) -> Result<RepositorySnapshot, ProviderError> {
        let span = info_span!("fetch_snapshot", repo = %repo);

        async {
            debug!("Fetching repository");
            let mut snapshot = self.repository(repo).await?;

            if options.include_latest_commit {
                snapshot.latest_commit = self.latest_commit(repo).await?;
            }

            if options.include_latest_release {
                snapshot.latest_release = self.latest_release(repo).await?;
            }

            debug!(
                stars = snapshot.stargazers_count,
                has_commit = snapshot.latest_commit.is_some(),
                has_release = snapshot.latest_release.is_some(),
                "Fetched repository snapshot"
            );
            Ok(snapshot)
        }
        .instrument(span)
        .await
    }
}
