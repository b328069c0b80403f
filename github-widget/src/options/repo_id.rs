//! Repository identifiers.

use super::OptionsError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Longest user or organization name GitHub accepts.
const MAX_OWNER_LEN: usize = 39;

/// Longest repository name GitHub accepts.
const MAX_NAME_LEN: usize = 100;

/// A validated `owner/name` repository identifier.
///
/// Parses either the short form (`rust-lang/rust`) or a GitHub URL
/// (`https://github.com/rust-lang/rust/tree/master`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn from_parts(value: &str, owner: &str, name: &str) -> Result<Self, OptionsError> {
        let name = name.strip_suffix(".git").unwrap_or(name);
        let invalid = |message: &str| OptionsError::InvalidRepository {
            value: value.to_string(),
            message: message.to_string(),
        };

        if owner.is_empty() || owner.len() > MAX_OWNER_LEN {
            return Err(invalid("owner must be 1 to 39 characters"));
        }
        if owner.starts_with('-') || owner.ends_with('-') {
            return Err(invalid("owner cannot start or end with '-'"));
        }
        if !owner.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("owner may only contain letters, digits and '-'"));
        }

        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(invalid("name must be 1 to 100 characters"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot be '.' or '..'"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(invalid(
                "name may only contain letters, digits, '-', '_' and '.'",
            ));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    fn from_url(value: &str, url: &Url) -> Result<Self, OptionsError> {
        let host = url.host_str().unwrap_or_default();
        if host != "github.com" && host != "www.github.com" {
            return Err(OptionsError::InvalidRepository {
                value: value.to_string(),
                message: format!("'{host}' is not a GitHub host"),
            });
        }

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) => Self::from_parts(value, owner, name),
            _ => Err(OptionsError::InvalidRepository {
                value: value.to_string(),
                message: "URL does not point at a repository".to_string(),
            }),
        }
    }
}

impl FromStr for RepoId {
    type Err = OptionsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        if trimmed.contains("://") {
            let url = Url::parse(trimmed).map_err(|e| OptionsError::InvalidRepository {
                value: value.to_string(),
                message: e.to_string(),
            })?;
            return Self::from_url(value, &url);
        }

        match trimmed.split_once('/') {
            Some((owner, name)) if !name.contains('/') => Self::from_parts(value, owner, name),
            _ => Err(OptionsError::InvalidRepository {
                value: value.to_string(),
                message: "expected 'owner/name'".to_string(),
            }),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_form() {
        let id: RepoId = "rust-lang/rust".parse().unwrap();
        assert_eq!(id.owner(), "rust-lang");
        assert_eq!(id.name(), "rust");
        assert_eq!(id.to_string(), "rust-lang/rust");
    }

    #[test]
    fn parses_github_url() {
        let id: RepoId = "https://github.com/tokio-rs/tokio/tree/master/tokio"
            .parse()
            .unwrap();
        assert_eq!(id.to_string(), "tokio-rs/tokio");
    }

    #[test]
    fn strips_git_suffix() {
        let id: RepoId = "https://github.com/serde-rs/serde.git".parse().unwrap();
        assert_eq!(id.name(), "serde");
    }

    #[test]
    fn accepts_dots_and_underscores_in_name() {
        let id: RepoId = "getnikola/plugins_v8.x".parse().unwrap();
        assert_eq!(id.name(), "plugins_v8.x");
    }

    #[test]
    fn rejects_missing_slash() {
        let result = "just-a-name".parse::<RepoId>();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidRepository { .. })
        ));
    }

    #[test]
    fn rejects_extra_segments() {
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[test]
    fn rejects_invalid_owner() {
        assert!("-bad/repo".parse::<RepoId>().is_err());
        assert!("bad_owner/repo".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
    }

    #[test]
    fn rejects_invalid_name() {
        assert!("owner/..".parse::<RepoId>().is_err());
        assert!("owner/<script>".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
    }

    #[test]
    fn rejects_non_github_url() {
        let result = "https://gitlab.com/owner/repo".parse::<RepoId>();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidRepository { message, .. }) if message.contains("gitlab.com")
        ));
    }
}
