//! Fetches a GitHub profile and its repositories, and caches the result for a
//! fixed interval with single-flight refreshes.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
