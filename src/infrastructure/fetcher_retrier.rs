use std::{future::Future, sync::Arc, time::Duration};

use anyhow::anyhow;
use log::warn;
use tokio::time::sleep;

use crate::{Credentials, ProfileIdentity, RemoteFetcher, RepositoryInfo, StdResult};

/// A struct that retries a RemoteFetcher a specified number of times in case of failure with exponential backoff strategy.
pub struct FetcherRetrier {
    /// The fetcher to be retried.
    fetcher: Arc<dyn RemoteFetcher>,

    /// The maximum number of attempts for a call.
    max_retries: u32,

    /// The base delay for exponential backoff.
    base_delay: Duration,
}

impl FetcherRetrier {
    /// Creates a new `FetcherRetrier` instance with the given maximum number of retries.
    pub fn new(fetcher: Arc<dyn RemoteFetcher>, max_retries: u32, base_delay: Duration) -> Self {
        Self {
            fetcher,
            max_retries,
            base_delay,
        }
    }

    fn calculate_exponential_backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * (2u32.pow(attempt.min(31)))
    }

    async fn retry<T, F, Fut>(&self, operation: &str, call: F) -> StdResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = StdResult<T>>,
    {
        let mut attempts = 0;

        loop {
            match call().await {
                Ok(res) => return Ok(res),
                Err(e) => {
                    warn!("{operation} attempt #{} failed: {}", attempts + 1, e);
                    attempts += 1;
                    if attempts >= self.max_retries {
                        return Err(anyhow!("Failed after {} attempts: {}", attempts, e));
                    }
                    sleep(self.calculate_exponential_backoff_delay(attempts)).await;
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl RemoteFetcher for FetcherRetrier {
    /// Retries the identity resolution if it fails, up to the maximum number of retries.
    async fn resolve_identity(
        &self,
        credentials: &Credentials,
        profile_name: &str,
    ) -> StdResult<ProfileIdentity> {
        self.retry("Resolve identity", move || {
            self.fetcher.resolve_identity(credentials, profile_name)
        })
        .await
    }

    /// Retries the repositories listing if it fails, up to the maximum number of retries.
    async fn list_repositories(
        &self,
        credentials: &Credentials,
        profile_name: &str,
    ) -> StdResult<Vec<RepositoryInfo>> {
        self.retry("List repositories", move || {
            self.fetcher.list_repositories(credentials, profile_name)
        })
        .await
    }
}
