mod fetcher;
mod provider;

pub use fetcher::*;
pub use provider::*;
