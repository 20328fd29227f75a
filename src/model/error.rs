use thiserror::Error;

use super::ProfileName;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Configuration error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Neither user and password nor token are configured
    #[error("Invalid configuration: missing credentials, expected `user` and `password`, or `token`")]
    MissingCredentials,
    /// No profile to fetch is configured
    #[error("Invalid configuration: missing profile name, expected `profile` or `user`")]
    MissingProfile,
}

/// Profile cache error
#[derive(Error, Debug)]
pub enum ProfileCacheError {
    /// The configuration does not allow fetching a profile
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The remote fetch failed, the cache is left unchanged
    #[error("Failed to fetch profile {profile_name}: {source}")]
    Fetch {
        /// The profile that was being fetched.
        profile_name: ProfileName,
        /// The underlying fetcher error.
        #[source]
        source: anyhow::Error,
    },
}
