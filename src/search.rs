//! Mod discovery: repository search fanned out into listing assembly.

use anyhow::Result;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::debug;

use crate::github::{GitHubApi, RepoId, Repository};
use crate::listing::{ModListing, assemble_listing};

/// Search qualifier every mod repository is tagged with.
pub const MOD_TOPIC_FILTER: &str = "topic:spore-mod";

#[async_trait]
pub trait ModSearchEngine: Send + Sync {
    /// Searches for mods matching `term`. An empty term lists every mod.
    async fn search_mods(&self, term: &str) -> Result<Vec<ModListing>>;
}

/// Discovers mods in GitHub repositories carrying the mod topic.
pub struct GitHubModSearchEngine<A: GitHubApi> {
    api: A,
}

impl<A: GitHubApi> GitHubModSearchEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Builds the listing of a single repository.
    ///
    /// Returns `Ok(None)` if the repository has no valid manifest.
    #[tracing::instrument(skip(self))]
    pub async fn find_mod(&self, repo: &RepoId) -> Result<Option<ModListing>> {
        let metadata = self.api.get_repository(repo).await?;
        let repository = Repository::new(&self.api, metadata);
        Ok(assemble_listing(&repository).await)
    }
}

/// Appends the topic filter to a user search term.
pub fn build_query(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        MOD_TOPIC_FILTER.to_string()
    } else {
        format!("{} {}", term, MOD_TOPIC_FILTER)
    }
}

#[async_trait]
impl<A: GitHubApi> ModSearchEngine for GitHubModSearchEngine<A> {
    #[tracing::instrument(skip(self))]
    async fn search_mods(&self, term: &str) -> Result<Vec<ModListing>> {
        let query = build_query(term);
        let repositories = self.api.search_repositories(&query).await?;
        let total = repositories.len();

        let listings = join_all(repositories.into_iter().map(|metadata| async move {
            let repository = Repository::new(&self.api, metadata);
            assemble_listing(&repository).await
        }))
        .await;

        let listings: Vec<ModListing> = listings.into_iter().flatten().collect();
        debug!(
            "{} of {} repositories provided a mod listing",
            listings.len(),
            total
        );

        Ok(listings)
    }
}
