pub mod commands;
pub mod config;
pub mod github;
pub mod http;
pub mod listing;
pub mod manifest;
pub mod search;

pub use listing::ModListing;
pub use search::{GitHubModSearchEngine, ModSearchEngine};
