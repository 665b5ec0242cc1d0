use anyhow::{Result, bail};

use crate::config::{Config, build_api_client};
use crate::github::RepoId;
use crate::search::GitHubModSearchEngine;

use super::format::listing_details;

/// Show the full listing of the mod in one repository
#[tracing::instrument(skip(config))]
pub async fn show(config: &Config, repo_str: &str) -> Result<()> {
    let repo = repo_str.parse::<RepoId>()?;

    let engine = GitHubModSearchEngine::new(build_api_client(config)?);
    match engine.find_mod(&repo).await? {
        Some(listing) => {
            println!("{}", listing_details(&listing));
            Ok(())
        }
        None => bail!("{} does not contain a valid ModInfo.xml", repo),
    }
}
