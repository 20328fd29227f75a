use std::{sync::Arc, time::Duration};

use arc_swap::ArcSwapOption;
use log::{debug, info, warn};
use tokio::{sync::Mutex, time::Instant};

use crate::{
    Profile, ProfileCacheError, ProfileProvider, ProfileTarget, RemoteFetcher,
    SourceRepositoryConfig, StdResult,
};

/// The interval after which a fetched profile must be refreshed.
pub const PROFILE_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// A profile along with the time at which it was fetched.
///
/// Both are always swapped together so that readers never see a timestamp
/// that does not belong to the profile.
#[derive(Debug)]
struct CachedProfile {
    profile: Arc<Profile>,
    refreshed_at: Instant,
}

impl CachedProfile {
    fn is_stale(&self, now: Instant, refresh_interval: Duration) -> bool {
        now.saturating_duration_since(self.refreshed_at) > refresh_interval
    }
}

/// A single slot cache of the configured profile.
///
/// Fresh profiles are served without locking. Stale or missing profiles are
/// refreshed under an async lock, so that concurrent callers wait for a single
/// fetch instead of starting their own.
pub struct ProfileCache {
    /// The fetcher used to refresh the profile.
    fetcher: Arc<dyn RemoteFetcher>,

    /// The configuration of the provider.
    config: SourceRepositoryConfig,

    /// The interval after which the cached profile is stale.
    refresh_interval: Duration,

    /// The last successfully fetched profile.
    cached: ArcSwapOption<CachedProfile>,

    /// Serializes refreshes.
    refresh_lock: Mutex<()>,
}

impl ProfileCache {
    /// Creates a new empty `ProfileCache` refreshed every [`PROFILE_REFRESH_INTERVAL`].
    pub fn new(fetcher: Arc<dyn RemoteFetcher>, config: SourceRepositoryConfig) -> Self {
        Self::with_refresh_interval(fetcher, config, PROFILE_REFRESH_INTERVAL)
    }

    /// Creates a new empty `ProfileCache` with a custom refresh interval.
    pub fn with_refresh_interval(
        fetcher: Arc<dyn RemoteFetcher>,
        config: SourceRepositoryConfig,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            config,
            refresh_interval,
            cached: ArcSwapOption::empty(),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Retrieves the refresh interval.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Retrieves the last successfully fetched profile, even if it is stale.
    pub fn cached_profile(&self) -> Option<Arc<Profile>> {
        self.cached.load_full().map(|cached| cached.profile.clone())
    }

    /// Retrieves the time of the last successful refresh.
    pub fn last_refreshed_at(&self) -> Option<Instant> {
        self.cached.load_full().map(|cached| cached.refreshed_at)
    }

    /// Gets the profile, refreshing it if it is missing or stale.
    pub async fn get_profile(&self) -> Result<Arc<Profile>, ProfileCacheError> {
        if let Some(profile) = self.fresh_profile() {
            debug!("Serving cached {profile}");
            return Ok(profile);
        }

        let _refresh_guard = self.refresh_lock.lock().await;
        if let Some(profile) = self.fresh_profile() {
            debug!("Serving {profile} refreshed while waiting for the lock");
            return Ok(profile);
        }

        let target = self.config.resolve_target()?;
        info!("Refreshing profile {}", target.profile_name);
        let profile = match self.fetch_profile(&target).await {
            Ok(profile) => Arc::new(profile),
            Err(e) => {
                warn!("Failed to refresh profile {}: {e}", target.profile_name);
                return Err(ProfileCacheError::Fetch {
                    profile_name: target.profile_name,
                    source: e,
                });
            }
        };
        self.cached.store(Some(Arc::new(CachedProfile {
            profile: profile.clone(),
            refreshed_at: Instant::now(),
        })));
        info!("Refreshed {profile}");

        Ok(profile)
    }

    fn fresh_profile(&self) -> Option<Arc<Profile>> {
        self.cached
            .load_full()
            .filter(|cached| !cached.is_stale(Instant::now(), self.refresh_interval))
            .map(|cached| cached.profile.clone())
    }

    async fn fetch_profile(&self, target: &ProfileTarget) -> StdResult<Profile> {
        let identity = self
            .fetcher
            .resolve_identity(&target.credentials, &target.profile_name)
            .await?;
        let repositories = self
            .fetcher
            .list_repositories(&target.credentials, &target.profile_name)
            .await?;
        for repository in &repositories {
            debug!("Fetched {repository}");
        }

        Ok(Profile::new(identity, repositories))
    }
}

#[async_trait::async_trait]
impl ProfileProvider for ProfileCache {
    async fn get_profile(&self) -> Result<Arc<Profile>, ProfileCacheError> {
        ProfileCache::get_profile(self).await
    }
}
