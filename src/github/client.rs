use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;

use crate::http::ApiClient;

use super::GitHubApi;
use super::repo::RepoId;
use super::types::{ReleaseAsset, RepositoryMetadata};

/// GitHub API response types (internal).
mod api {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    /// Items stay undecoded so one malformed repository cannot fail the page.
    #[derive(Deserialize, Debug)]
    pub struct SearchResults {
        pub items: Vec<serde_json::Value>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Repository {
        pub name: String,
        pub owner: Owner,
        pub html_url: String,
        pub description: Option<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
        pub homepage: Option<String>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Owner {
        pub login: String,
    }

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        pub published_at: Option<DateTime<Utc>>,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub browser_download_url: Option<String>,
        pub download_count: Option<u64>,
    }
}

impl TryFrom<api::Repository> for RepositoryMetadata {
    type Error = anyhow::Error;

    fn try_from(repo: api::Repository) -> Result<Self> {
        if repo.name.is_empty() || repo.owner.login.is_empty() {
            return Err(anyhow!("Repository is missing its name or owner"));
        }

        let repository_url = Url::parse(&repo.html_url)
            .with_context(|| format!("Invalid repository URL '{}'", repo.html_url))?;

        let project_url = repo
            .homepage
            .as_deref()
            .map(str::trim)
            .filter(|homepage| !homepage.is_empty())
            .and_then(|homepage| Url::parse(homepage).ok());

        Ok(Self {
            name: repo.name,
            owner: repo.owner.login,
            repository_url,
            description: repo.description,
            created: repo.created_at,
            updated: repo.updated_at,
            project_url,
        })
    }
}

impl From<api::Release> for ReleaseAsset {
    fn from(release: api::Release) -> Self {
        let first = release.assets.into_iter().next();

        let download_url = first
            .as_ref()
            .and_then(|asset| asset.browser_download_url.as_deref())
            .and_then(|url| Url::parse(url).ok());

        Self {
            download_url,
            version: release.tag_name,
            published_at: release.published_at,
            download_count: first.and_then(|asset| asset.download_count),
        }
    }
}

fn decode_repository(item: serde_json::Value) -> Result<RepositoryMetadata> {
    let repository: api::Repository =
        serde_json::from_value(item).context("Malformed repository in search results")?;
    RepositoryMetadata::try_from(repository)
}

#[async_trait]
impl GitHubApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryMetadata>> {
        let results: api::SearchResults = self
            .get_json("search/repositories", &[("q", query)])
            .await?;

        debug!("Search returned {} repositories", results.items.len());

        let repositories = results
            .items
            .into_iter()
            .filter_map(|item| match decode_repository(item) {
                Ok(repository) => Some(repository),
                Err(e) => {
                    warn!("Skipping search result: {:#}", e);
                    None
                }
            })
            .collect();

        Ok(repositories)
    }

    #[tracing::instrument(skip(self))]
    async fn get_repository(&self, repo: &RepoId) -> Result<RepositoryMetadata> {
        let repository: api::Repository = self.get_json(&repo.endpoint(), &[]).await?;
        RepositoryMetadata::try_from(repository)
    }

    #[tracing::instrument(skip(self))]
    async fn get_file(&self, repo: &RepoId, path: &str) -> Result<Option<String>> {
        self.get_raw_file(&repo.contents_endpoint(path)).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_latest_release(&self, repo: &RepoId) -> Result<ReleaseAsset> {
        let release: api::Release = self
            .get_json(&repo.latest_release_endpoint(), &[])
            .await?;
        Ok(ReleaseAsset::from(release))
    }
}
