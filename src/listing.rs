//! Mod listings: the merged view of a manifest, its repository and its latest release.

use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Url;

use crate::github::{ReleaseAsset, Repository, RepositoryMetadata};
use crate::manifest::ModIdentity;

/// File extensions a release asset must have to be offered as a download.
pub const PACKAGE_EXTENSIONS: [&str; 2] = [".sporemod", ".package"];

/// One discoverable mod.
#[derive(Debug, Clone, PartialEq)]
pub struct ModListing {
    pub display_name: String,
    pub unique_name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: String,
    pub is_experimental: bool,
    pub requires_galaxy_reset: bool,
    pub causes_save_data_dependency: bool,
    pub repository_url: Url,
    pub project_url: Option<Url>,
    pub download_url: Option<Url>,
    pub last_updated_date: Option<DateTime<Utc>>,
    pub download_count: Option<u64>,
}

impl ModListing {
    /// Merges the three sources. Manifest values win over repository and release values.
    pub fn new(
        identity: &ModIdentity,
        repository: &RepositoryMetadata,
        release: Option<&ReleaseAsset>,
    ) -> Self {
        let version = identity
            .mod_version
            .map(|version| version.to_string())
            .or_else(|| release.and_then(|release| normalize_release_version(&release.version)));

        let description = identity
            .description
            .clone()
            .or_else(|| repository.description.clone());

        let download_url = release
            .and_then(|release| release.download_url.as_ref())
            .filter(|url| is_package_url(url))
            .cloned();

        Self {
            display_name: identity.display_name.clone(),
            unique_name: identity.unique.clone(),
            version,
            description,
            author: repository.owner.clone(),
            is_experimental: identity.is_experimental,
            requires_galaxy_reset: identity.requires_galaxy_reset,
            causes_save_data_dependency: identity.causes_save_data_dependency,
            repository_url: repository.repository_url.clone(),
            project_url: repository.project_url.clone(),
            download_url,
            last_updated_date: release.and_then(|release| release.published_at),
            download_count: release.and_then(|release| release.download_count),
        }
    }
}

/// Turns a release tag such as `"v1.2.3"` or `" 1.0 "` into a bare version string.
///
/// Returns `None` if nothing is left.
pub fn normalize_release_version(tag: &str) -> Option<String> {
    let tag = tag.trim();
    let tag = match tag.chars().next() {
        Some('v' | 'V') => &tag[1..],
        _ => tag,
    };
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Whether the URL path ends in one of [`PACKAGE_EXTENSIONS`].
pub fn is_package_url(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    PACKAGE_EXTENSIONS
        .iter()
        .any(|extension| path.ends_with(extension))
}

/// Builds the listing of one repository, or `None` if it has no valid manifest.
///
/// The manifest and the latest release are fetched concurrently.
pub async fn assemble_listing(repository: &Repository<'_>) -> Option<ModListing> {
    let (identity, release) = futures_util::join!(
        repository.get_manifest(),
        repository.get_latest_release_asset()
    );

    let Some(identity) = identity else {
        debug!("Skipping {}: no valid manifest", repository.id());
        return None;
    };

    Some(ModListing::new(
        &identity,
        repository.metadata(),
        release.as_ref(),
    ))
}
