//! Client configuration and construction of the shared HTTP client.

use anyhow::{Result, bail};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::http::{ApiClient, JSON_MEDIA_TYPE, TOPICS_MEDIA_TYPE};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Contact string sent as User-Agent; GitHub asks for an app or user name.
pub const DEFAULT_USER_AGENT: &str = "Spore-Community/ModBrowser";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub user_agent: String,
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Builds a configuration, falling back to defaults for unset values.
    pub fn new(
        api_url: Option<String>,
        user_agent: Option<String>,
        token: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url.unwrap_or(defaults.api_url),
            user_agent: user_agent.unwrap_or(defaults.user_agent),
            token: token.filter(|token| !token.is_empty()),
        }
    }
}

/// Build the reqwest client shared by all API requests.
pub fn build_http_client(config: &Config) -> Result<Client> {
    if config.user_agent.trim().is_empty() {
        bail!("A User-Agent contact string is required by the GitHub API");
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_str(&format!("{}, {}", JSON_MEDIA_TYPE, TOPICS_MEDIA_TYPE))?,
    );

    if let Some(token) = &config.token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Build the platform API client from configuration
pub fn build_api_client(config: &Config) -> Result<ApiClient> {
    let client = build_http_client(config)?;
    debug!("Using API at {}", config.api_url);
    Ok(ApiClient::new(client, &config.api_url))
}
