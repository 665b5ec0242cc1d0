use anyhow::{Context, Result};
use log::{debug, warn};

use crate::manifest::ModIdentity;

use super::GitHubApi;
use super::repo::RepoId;
use super::types::{ReleaseAsset, RepositoryMetadata};

/// Location of the mod manifest in a repository.
pub const MANIFEST_PATH: &str = "ModInfo.xml";

pub const README_PATH: &str = "README.md";

/// A repository found on the platform, with lazy access to its remote content.
///
/// The handle borrows the API client; it never owns remote state.
pub struct Repository<'a> {
    api: &'a dyn GitHubApi,
    metadata: RepositoryMetadata,
}

impl<'a> Repository<'a> {
    pub fn new(api: &'a dyn GitHubApi, metadata: RepositoryMetadata) -> Self {
        Self { api, metadata }
    }

    pub fn metadata(&self) -> &RepositoryMetadata {
        &self.metadata
    }

    pub fn id(&self) -> RepoId {
        self.metadata.id()
    }

    /// Fetches and validates the mod manifest.
    ///
    /// Any failure (missing file, transport error, malformed XML, invalid
    /// attributes) yields `None` so one broken repository cannot fail a batch.
    pub async fn get_manifest(&self) -> Option<ModIdentity> {
        let repo = self.id();

        let content = match self.api.get_file(&repo, MANIFEST_PATH).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!("{} has no {}", repo, MANIFEST_PATH);
                return None;
            }
            Err(e) => {
                warn!("Failed to fetch {} from {}: {:#}", MANIFEST_PATH, repo, e);
                return None;
            }
        };

        match ModIdentity::from_xml(&content) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Ignoring invalid {} in {}: {}", MANIFEST_PATH, repo, e);
                None
            }
        }
    }

    /// Fetches the README; `Ok(None)` if the repository has none.
    ///
    /// Unlike the manifest, failures are returned so callers can report them.
    pub async fn get_readme(&self) -> Result<Option<String>> {
        let repo = self.id();
        self.api
            .get_file(&repo, README_PATH)
            .await
            .with_context(|| format!("Failed to fetch {} from {}", README_PATH, repo))
    }

    /// Fetches the latest release, or `None` if there is none or the lookup fails.
    pub async fn get_latest_release_asset(&self) -> Option<ReleaseAsset> {
        let repo = self.id();
        match self.api.get_latest_release(&repo).await {
            Ok(release) => Some(release),
            Err(e) => {
                let not_found = e
                    .downcast_ref::<crate::http::ApiError>()
                    .is_some_and(|api_error| api_error.is_not_found());
                if not_found {
                    debug!("{} has no releases", repo);
                } else {
                    warn!("Failed to fetch latest release of {}: {:#}", repo, e);
                }
                None
            }
        }
    }
}
