use anyhow::{Result, bail};

use crate::config::{Config, build_api_client};
use crate::github::{GitHubApi, RepoId, Repository};

/// Print the README of a repository
#[tracing::instrument(skip(config))]
pub async fn readme(config: &Config, repo_str: &str) -> Result<()> {
    let repo = repo_str.parse::<RepoId>()?;

    let api = build_api_client(config)?;
    let metadata = api.get_repository(&repo).await?;
    let repository = Repository::new(&api, metadata);

    match repository.get_readme().await? {
        Some(readme) => {
            println!("{}", readme.trim_end());
            Ok(())
        }
        None => bail!("{} has no README", repo),
    }
}
