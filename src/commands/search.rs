use anyhow::Result;
use log::debug;

use crate::config::{Config, build_api_client};
use crate::search::{GitHubModSearchEngine, ModSearchEngine};

use super::format::listing_summary;

/// Search for mods and print one line per listing
#[tracing::instrument(skip(config))]
pub async fn search(config: &Config, terms: &[String]) -> Result<()> {
    let term = terms.join(" ");
    debug!("Searching for mods matching {:?}", term);

    let engine = GitHubModSearchEngine::new(build_api_client(config)?);
    let listings = engine.search_mods(&term).await?;

    println!("Found {} mods.", listings.len());
    for listing in &listings {
        println!("{}", listing_summary(listing));
    }

    Ok(())
}
