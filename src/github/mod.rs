//! GitHub repositories as mod distribution units.
//!
//! [`GitHubApi`] is the seam between the discovery pipeline and the platform:
//! [`ApiClient`](crate::http::ApiClient) implements it over HTTP and tests
//! substitute a mock. [`Repository`] wraps one repository's metadata and
//! fetches its manifest, readme and latest release on demand.

mod client;
mod repo;
mod repository;
mod types;

use anyhow::Result;
use async_trait::async_trait;

pub use repo::RepoId;
pub use repository::{MANIFEST_PATH, README_PATH, Repository};
pub use types::{ReleaseAsset, RepositoryMetadata};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Runs a repository search and returns the first page of results.
    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryMetadata>>;

    async fn get_repository(&self, repo: &RepoId) -> Result<RepositoryMetadata>;

    /// Fetches a file from the default branch; `Ok(None)` if it does not exist.
    async fn get_file(&self, repo: &RepoId, path: &str) -> Result<Option<String>>;

    /// Fetches the latest release. A repository without releases yields a 404 `ApiError`.
    async fn get_latest_release(&self, repo: &RepoId) -> Result<ReleaseAsset>;
}
