use std::{fmt::Display, ops::Deref};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The login of a profile (user or organization) on the hosting provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileName(pub String);

impl Deref for ProfileName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ProfileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of a remote profile, as resolved by the fetcher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileIdentity {
    /// The display name of the profile.
    pub name: String,

    /// The canonical URL of the profile.
    pub url: String,
}

impl ProfileIdentity {
    /// Creates a new `ProfileIdentity` instance.
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Metadata of a repository owned by a profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// The short name of the repository.
    pub name: String,

    /// The name of the repository prefixed with its owner.
    pub full_name: String,

    /// The description of the repository, if any.
    pub description: Option<String>,

    /// The primary language of the repository, if detected.
    pub language: Option<String>,

    /// The URL of the repository.
    pub url: String,

    /// The last time the repository was updated.
    pub updated_at: DateTime<Utc>,
}

impl RepositoryInfo {
    /// Creates a dummy `RepositoryInfo` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(owner: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            full_name: format!("{owner}/{name}"),
            description: Some(format!("The {name} repository")),
            language: Some("Rust".to_string()),
            url: format!("https://github.com/{owner}/{name}"),
            updated_at: DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }
}

impl Display for RepositoryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Language: {}, Updated: {}",
            self.full_name,
            self.language.as_deref().unwrap_or("unknown"),
            self.updated_at.to_rfc3339()
        )
    }
}

/// A snapshot of a remote profile and its repositories.
///
/// A profile is never mutated once built: each refresh produces a new one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// The display name of the profile.
    name: String,

    /// The canonical URL of the profile.
    url: String,

    /// The repositories of the profile, in the order returned by the fetcher.
    repositories: Vec<RepositoryInfo>,
}

impl Profile {
    /// Creates a new `Profile` from a resolved identity and its repositories.
    pub fn new(identity: ProfileIdentity, repositories: Vec<RepositoryInfo>) -> Self {
        Self {
            name: identity.name,
            url: identity.url,
            repositories,
        }
    }

    /// Retrieves the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the canonical URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieves the repositories.
    pub fn repositories(&self) -> &[RepositoryInfo] {
        &self.repositories
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Profile: {} ({}), Repositories: {}",
            self.name,
            self.url,
            self.repositories.len()
        )
    }
}
