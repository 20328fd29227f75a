use std::{sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use github_profile_cache::{
    FetcherRetrier, GITHUB_GRAPHQL_ENDPOINT, GraphQlFetcher, ProfileCache, ProfileProvider,
    SourceRepositoryConfig, StdResult,
};

/// Command line arguments for the GitHub profile cache
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// User to authenticate as, also the fetched profile when no profile is given
    #[arg(short, long, env = "GITHUB_USER")]
    user: Option<String>,

    /// Password of the user
    #[arg(long, env = "GITHUB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// API token, used when no user and password are given
    #[arg(short, long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Profile (user or organization) to fetch
    #[arg(short, long, env = "GITHUB_PROFILE")]
    profile: Option<String>,

    /// GraphQL endpoint of the provider
    #[arg(short, long, default_value = GITHUB_GRAPHQL_ENDPOINT)]
    endpoint: String,

    /// Maximum number of attempts for each fetcher call
    #[arg(short, long, default_value_t = 3)]
    max_retries: u32,

    /// Base delay of the exponential backoff between fetcher attempts, in milliseconds
    #[arg(long, default_value_t = 500)]
    retry_base_delay_ms: u64,

    /// Number of concurrent profile requests to issue
    #[arg(short, long, default_value_t = 1)]
    concurrent_requests: u16,
}

impl Args {
    fn source_repository_config(&self) -> SourceRepositoryConfig {
        SourceRepositoryConfig {
            user: self.user.clone(),
            password: self.password.clone(),
            token: self.token.clone(),
            profile: self.profile.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting GitHub profile fetch");
    let args = Args::parse();
    let config = args.source_repository_config();
    debug!("Configuration: {config:?}");

    let provider = build_profile_provider(&args, config);
    let handles = (0..args.concurrent_requests.max(1))
        .map(|_| {
            let provider = Arc::clone(&provider);
            tokio::spawn(async move { provider.get_profile().await })
        })
        .collect::<Vec<_>>();
    let mut profile = None;
    for handle in handles {
        profile = Some(handle.await??);
    }
    let profile = profile.with_context(|| "No profile request completed")?;
    info!("Fetched {profile}");
    println!("{}", serde_json::to_string_pretty(&*profile)?);

    Ok(())
}

fn build_profile_provider(
    args: &Args,
    config: SourceRepositoryConfig,
) -> Arc<dyn ProfileProvider> {
    let fetcher = Arc::new(FetcherRetrier::new(
        Arc::new(GraphQlFetcher::new(&args.endpoint)),
        args.max_retries,
        Duration::from_millis(args.retry_base_delay_ms),
    ));

    Arc::new(ProfileCache::new(fetcher, config))
}
