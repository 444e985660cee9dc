//! # Catalog Configuration
//!
//! Configuration for the catalog client and the screens that use it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MEDIGO_API_URL=https://api.medigo.example/v1/                      │
//! │     MEDIGO_PER_PAGE=40                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/medigo-storefront/storefront.toml (Linux)                │
//! │     ~/Library/Application Support/com.medigo.storefront/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     localhost API, page size 20, 5s slide interval                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! base_url = "https://api.medigo.example/v1/"
//! per_page = 20
//! featured_limit = 8
//! request_timeout_secs = 10
//! slide_interval_ms = 5000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use medigo_core::{DEFAULT_PAGE_SIZE, DEFAULT_SLIDE_INTERVAL_MS, FEATURED_PAGE_SIZE};

use crate::error::{CatalogError, CatalogResult};

/// Storefront catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the catalog API. Always normalized to end with `/` so
    /// endpoint joins resolve under the base path instead of replacing it.
    pub base_url: String,

    /// Page size for product list queries.
    pub per_page: u32,

    /// Page size for the featured-products strip.
    pub featured_limit: u32,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Hero banner auto-advance interval in milliseconds.
    pub slide_interval_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            per_page: DEFAULT_PAGE_SIZE,
            featured_limit: FEATURED_PAGE_SIZE,
            request_timeout_secs: 10,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration with the documented priority:
    /// defaults, overlaid by the TOML file if present, overlaid by env vars.
    pub fn load() -> CatalogResult<Self> {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading catalog config file");
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| CatalogError::ConfigLoadFailed(e.to_string()))?;
                toml::from_str(&raw).map_err(|e| CatalogError::ConfigLoadFailed(e.to_string()))?
            }
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                CatalogConfig::default()
            }
            None => {
                warn!("Could not determine config directory, using defaults");
                CatalogConfig::default()
            }
        };

        config.apply_env();
        config.normalize_and_validate()?;

        info!(
            base_url = %config.base_url,
            per_page = config.per_page,
            "Catalog config loaded"
        );
        Ok(config)
    }

    /// Platform config file location via the `directories` crate.
    fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "medigo", "medigo-storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Applies environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("MEDIGO_API_URL") {
            self.base_url = url;
        }
        if let Some(per_page) = env_u32("MEDIGO_PER_PAGE") {
            self.per_page = per_page;
        }
        if let Some(limit) = env_u32("MEDIGO_FEATURED_LIMIT") {
            self.featured_limit = limit;
        }
        if let Some(secs) = env_u64("MEDIGO_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = secs;
        }
        if let Some(ms) = env_u64("MEDIGO_SLIDE_INTERVAL_MS") {
            self.slide_interval_ms = ms;
        }
    }

    /// Normalizes the base URL (trailing slash) and checks it parses.
    pub fn normalize_and_validate(&mut self) -> CatalogResult<()> {
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
        Url::parse(&self.base_url)
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;
        Ok(())
    }
}

fn env_u32(name: &str) -> Option<u32> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "Ignoring unparseable env override");
            None
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "Ignoring unparseable env override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let mut config = CatalogConfig::default();
        assert!(config.normalize_and_validate().is_ok());
        assert!(config.base_url.ends_with('/'));
    }

    #[test]
    fn test_normalize_appends_trailing_slash() {
        let mut config = CatalogConfig {
            base_url: "https://api.medigo.example/v1".to_string(),
            ..Default::default()
        };
        config.normalize_and_validate().unwrap();
        assert_eq!(config.base_url, "https://api.medigo.example/v1/");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = CatalogConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.normalize_and_validate(),
            Err(CatalogError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CatalogConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: CatalogConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.per_page, config.per_page);
        assert_eq!(parsed.base_url, config.base_url);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: CatalogConfig = toml::from_str("per_page = 50").unwrap();
        assert_eq!(parsed.per_page, 50);
        assert_eq!(parsed.slide_interval_ms, DEFAULT_SLIDE_INTERVAL_MS);
    }
}
