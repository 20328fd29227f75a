use crate::{Credentials, ProfileIdentity, RepositoryInfo, StdResult};

/// A trait for fetching profile data from the source repository provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RemoteFetcher: Sync + Send {
    /// Resolves the display name and URL of a profile.
    async fn resolve_identity(
        &self,
        credentials: &Credentials,
        profile_name: &str,
    ) -> StdResult<ProfileIdentity>;

    /// Lists the repositories owned by a profile.
    async fn list_repositories(
        &self,
        credentials: &Credentials,
        profile_name: &str,
    ) -> StdResult<Vec<RepositoryInfo>>;
}
