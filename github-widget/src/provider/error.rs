//! Snapshot provider error types.

use crate::options::RepoId;
use thiserror::Error;

/// Errors that can occur while fetching a repository snapshot.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The repository does not exist or is not visible with the current credentials.
    #[error("Repository '{repo}' not found")]
    NotFound { repo: String },

    /// The configured token was rejected.
    #[error("GitHub rejected the configured token while fetching '{repo}'")]
    Unauthorized { repo: String },

    /// The API rate limit is exhausted.
    #[error("GitHub API rate limit exceeded while fetching '{repo}'")]
    RateLimited { repo: String },

    /// Any other GitHub API or transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}

impl ProviderError {
    /// Classifies an octocrab error for a repository request.
    pub(crate) fn from_octocrab(repo: &RepoId, error: octocrab::Error) -> Self {
        match status_of(&error) {
            Some((status, message)) => {
                classify(repo, status, &message).unwrap_or(Self::GitHubError(error))
            }
            None => Self::GitHubError(error),
        }
    }
}

/// Returns the HTTP status and message of a GitHub API error response.
pub(crate) fn status_of(error: &octocrab::Error) -> Option<(u16, String)> {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            Some((source.status_code.as_u16(), source.message.clone()))
        }
        _ => None,
    }
}

/// Maps a GitHub error status to a provider error, if it has a dedicated variant.
fn classify(repo: &RepoId, status: u16, message: &str) -> Option<ProviderError> {
    let repo = repo.to_string();
    match status {
        404 => Some(ProviderError::NotFound { repo }),
        401 => Some(ProviderError::Unauthorized { repo }),
        429 => Some(ProviderError::RateLimited { repo }),
        403 if message.to_lowercase().contains("rate limit") => {
            Some(ProviderError::RateLimited { repo })
        }
        _ => None,
    }
}
