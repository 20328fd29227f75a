mod config;
mod entities;
mod error;

pub use config::*;
pub use entities::*;
pub use error::*;
