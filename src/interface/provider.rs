use std::sync::Arc;

use crate::{Profile, ProfileCacheError};

/// A trait for serving the configured profile.
#[async_trait::async_trait]
pub trait ProfileProvider: Sync + Send {
    /// Gets the profile, fetching it from the provider when required.
    async fn get_profile(&self) -> Result<Arc<Profile>, ProfileCacheError>;
}
