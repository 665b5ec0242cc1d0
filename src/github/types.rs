use chrono::{DateTime, Utc};
use reqwest::Url;

use super::repo::RepoId;

/// Metadata of one repository, as returned by search or repository lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryMetadata {
    pub name: String,
    pub owner: String,
    pub repository_url: Url,
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Absent when the homepage field is blank or not an absolute URL
    pub project_url: Option<Url>,
}

impl RepositoryMetadata {
    pub fn id(&self) -> RepoId {
        RepoId::new(self.owner.clone(), self.name.clone())
    }
}

/// Download information of a repository's latest release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAsset {
    /// Download link of the first asset, if any
    pub download_url: Option<Url>,
    /// Raw tag name, e.g. "v1.2.0"
    pub version: String,
    pub published_at: Option<DateTime<Utc>>,
    pub download_count: Option<u64>,
}
