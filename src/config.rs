// src/config.rs
// =============================================================================
// Runtime configuration for talking to GitHub.
//
// Sources, later ones overriding earlier ones:
//   1. Built-in defaults
//   2. ./repoflat.toml if it exists, or the file passed with --config
//   3. Environment variables with the REPOFLAT_ prefix
//      (e.g. REPOFLAT_MAX_CONCURRENT_REQUESTS=4)
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::RepoError;

const LOCAL_CONFIG: &str = "repoflat.toml";
const ENV_PREFIX: &str = "REPOFLAT_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the GitHub REST API
    pub api_base_url: String,
    /// Sent as User-Agent; GitHub rejects requests without one
    pub user_agent: String,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Upper bound on outstanding requests to GitHub at any moment
    pub max_concurrent_requests: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            user_agent: concat!("repoflat/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: 30,
            max_concurrent_requests: 8,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects values the HTTP layer cannot work with
    pub fn validate(&self) -> std::result::Result<(), RepoError> {
        if self.max_concurrent_requests == 0 {
            return Err(RepoError::Config(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(RepoError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        url::Url::parse(&self.api_base_url).map_err(|e| {
            RepoError::Config(format!("api_base_url '{}': {}", self.api_base_url, e))
        })?;
        Ok(())
    }
}

/// Load configuration from defaults, an optional TOML file and the environment
///
/// An explicit `path` must exist; the implicit ./repoflat.toml is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
            figment = figment.merge(Toml::file(path));
        }
        None => {
            let local = PathBuf::from(LOCAL_CONFIG);
            if local.exists() {
                figment = figment.merge(Toml::file(local));
            }
        }
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX));

    let config: Config = figment
        .extract()
        .context("Failed to load configuration")?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("repoflat/"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                "api_base_url = \"http://localhost:8080\"\nmax_concurrent_requests = 2\n",
            ))
            .extract()
            .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent_requests, 2);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = Config {
            max_concurrent_requests: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(RepoError::Config(_))));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let config = Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here/repoflat.toml")));
        assert!(result.is_err());
    }
}
