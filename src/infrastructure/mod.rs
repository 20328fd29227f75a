mod fetcher_graphql;
mod fetcher_retrier;
mod profile_cache;

pub use fetcher_graphql::*;
pub use fetcher_retrier::*;
pub use profile_cache::*;
