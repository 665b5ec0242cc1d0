use crate::listing::ModListing;

/// One-line summary used by `search`.
pub fn listing_summary(listing: &ModListing) -> String {
    let mut line = listing.display_name.clone();
    if let Some(version) = &listing.version {
        line.push_str(&format!(" {}", version));
    }
    line.push_str(&format!(" by {}", listing.author));

    let flags = warning_flags(listing);
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

/// Multi-line description used by `show`.
pub fn listing_details(listing: &ModListing) -> String {
    let mut lines = vec![
        format!("Name: {}", listing.display_name),
        format!("Unique name: {}", listing.unique_name),
        format!(
            "Version: {}",
            listing.version.as_deref().unwrap_or("(unknown)")
        ),
        format!("Author: {}", listing.author),
    ];

    if let Some(description) = &listing.description {
        lines.push(format!("Description: {}", description));
    }

    lines.push(format!("Repository: {}", listing.repository_url));
    if let Some(project_url) = &listing.project_url {
        lines.push(format!("Website: {}", project_url));
    }
    match &listing.download_url {
        Some(url) => lines.push(format!("Download: {}", url)),
        None => lines.push("Download: (not available)".to_string()),
    }
    if let Some(date) = listing.last_updated_date {
        lines.push(format!("Updated: {}", date.format("%Y-%m-%d")));
    }
    if let Some(count) = listing.download_count {
        lines.push(format!("Downloads: {}", count));
    }

    let flags = warning_flags(listing);
    if !flags.is_empty() {
        lines.push(format!("Warnings: {}", flags.join(", ")));
    }

    lines.join("\n")
}

fn warning_flags(listing: &ModListing) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if listing.is_experimental {
        flags.push("experimental");
    }
    if listing.requires_galaxy_reset {
        flags.push("requires galaxy reset");
    }
    if listing.causes_save_data_dependency {
        flags.push("save data dependency");
    }
    flags
}
