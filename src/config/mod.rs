use crate::error::{Result, SonarrError};
use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::info;

static API_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{32}$").expect("failed to compile api key regex"));

/// Top-level layout of the YAML configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Configuration {
    pub sonarr: ClientConfig,
}

impl Configuration {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file: {path}"))?;
        let config: Configuration = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse configuration file: {path}"))?;
        Ok(config)
    }
}

/// Connection settings for a Sonarr instance.
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub hostname: String,
    pub port: u16,
    #[serde(default)]
    pub ssl: bool,
    #[serde(rename = "urlBase", default)]
    pub url_base: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "maxResults")]
    pub max_results: usize,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("url_base", &self.url_base)
            .field("api_key", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl ClientConfig {
    /// Checks the hostname and API key format. No network access.
    pub fn validate(&self) -> Result<()> {
        if self.hostname.is_empty() {
            return Err(SonarrError::InvalidConfiguration(
                "hostname is empty".to_string(),
            ));
        }

        if self.bare_hostname().is_empty() {
            return Err(SonarrError::InvalidConfiguration(format!(
                "hostname has no host after the scheme: {}",
                self.hostname
            )));
        }

        if !API_KEY_PATTERN.is_match(&self.api_key) {
            return Err(SonarrError::InvalidApiKey);
        }

        Ok(())
    }

    /// The hostname with an accidental `http://` or `https://` removed.
    fn bare_hostname(&self) -> &str {
        let hostname = self
            .hostname
            .strip_prefix("http://")
            .unwrap_or(&self.hostname);
        hostname.strip_prefix("https://").unwrap_or(hostname)
    }

    /// Whether basic auth should be attached to requests.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Composes `scheme://host[:port]/[prefix/]api`.
    ///
    /// Port 80 is always omitted, regardless of scheme. No other port is
    /// treated specially, so `https` on 443 keeps its explicit port.
    pub fn api_url(&self) -> String {
        let hostname = self.bare_hostname();
        let url_base = self.url_base.strip_prefix('/').unwrap_or(&self.url_base);

        let scheme = if self.ssl { "https" } else { "http" };

        let host = if self.port == 80 {
            hostname.to_string()
        } else {
            format!("{}:{}", hostname, self.port)
        };

        let path = if url_base.is_empty() {
            "/api".to_string()
        } else {
            format!("/{}/api", url_base)
        };

        let url = format!("{}://{}{}", scheme, host, path);
        info!("The URL for Sonarr is {}", url);
        url
    }
}
