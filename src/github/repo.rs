use anyhow::{Result, anyhow};
use std::str::FromStr;

/// Repository identifier in `owner/name` form.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// API endpoint of the repository itself, without leading slash.
    pub fn endpoint(&self) -> String {
        format!("repos/{}/{}", self.owner, self.name)
    }

    /// API endpoint of a file in the repository's default branch.
    pub fn contents_endpoint(&self, path: &str) -> String {
        format!("{}/contents/{}", self.endpoint(), path.trim_start_matches('/'))
    }

    pub fn latest_release_endpoint(&self) -> String {
        format!("{}/releases/latest", self.endpoint())
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(RepoId::new(parts[0], parts[1]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_id_valid() {
        let repo = RepoId::from_str("Spore-Community/ModBrowser").unwrap();
        assert_eq!(repo, RepoId::new("Spore-Community", "ModBrowser"));
        assert_eq!(repo.to_string(), "Spore-Community/ModBrowser");
    }

    #[test]
    fn test_parse_repo_id_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
        assert!("owner/repo/extra".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_endpoints() {
        let repo = RepoId::new("owner", "repo");
        assert_eq!(repo.endpoint(), "repos/owner/repo");
        assert_eq!(
            repo.contents_endpoint("ModInfo.xml"),
            "repos/owner/repo/contents/ModInfo.xml"
        );
        assert_eq!(
            repo.latest_release_endpoint(),
            "repos/owner/repo/releases/latest"
        );
    }
}
