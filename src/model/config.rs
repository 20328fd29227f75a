use std::fmt::Debug;

use serde::Deserialize;

use super::{ConfigurationError, ProfileName};

/// The configuration of the source repository provider.
///
/// Every field is optional: validity is only checked when a profile is
/// about to be fetched (see [`SourceRepositoryConfig::resolve_target`]).
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SourceRepositoryConfig {
    /// The user name, also used as the profile when `profile` is absent.
    pub user: Option<String>,

    /// The password of the user.
    pub password: Option<String>,

    /// The API token.
    pub token: Option<String>,

    /// The profile (user or organization) to fetch.
    pub profile: Option<String>,
}

impl SourceRepositoryConfig {
    /// Validates the configuration and extracts the credentials and the profile name to fetch.
    ///
    /// User and password take precedence over the token. An explicit profile takes
    /// precedence over the user.
    pub fn resolve_target(&self) -> Result<ProfileTarget, ConfigurationError> {
        let credentials = match (
            non_empty(&self.user),
            non_empty(&self.password),
            non_empty(&self.token),
        ) {
            (Some(user), Some(password), _) => Credentials::Basic {
                user: user.to_string(),
                password: password.to_string(),
            },
            (_, _, Some(token)) => Credentials::Token(token.to_string()),
            _ => return Err(ConfigurationError::MissingCredentials),
        };
        let profile_name = non_empty(&self.profile)
            .or_else(|| non_empty(&self.user))
            .ok_or(ConfigurationError::MissingProfile)?;

        Ok(ProfileTarget {
            credentials,
            profile_name: ProfileName(profile_name.to_string()),
        })
    }
}

impl Debug for SourceRepositoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRepositoryConfig")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("token", &self.token.as_ref().map(|_| REDACTED))
            .field("profile", &self.profile)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

const REDACTED: &str = "<redacted>";

/// Credentials used to authenticate against the provider API.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Basic authentication with a user and a password.
    Basic {
        /// The user name.
        user: String,
        /// The password.
        password: String,
    },

    /// Token authentication.
    Token(String),
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("password", &REDACTED)
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&REDACTED).finish(),
        }
    }
}

/// A validated configuration: who to authenticate as and which profile to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTarget {
    /// The credentials to authenticate with.
    pub credentials: Credentials,

    /// The name of the profile to fetch.
    pub profile_name: ProfileName,
}
