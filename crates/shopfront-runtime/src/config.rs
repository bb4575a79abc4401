use crate::{Error, Result};
use serde::Deserialize;
use shopfront_providers::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the catalog base URL
pub const BASE_URL_ENV: &str = "SHOPFRONT_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout; `0` disables it
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Route the browser opens on, e.g. `/products`
    #[serde(default)]
    pub default_route: Option<String>,
}

/// Contents of `<data_dir>/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Base URL by priority:
    /// 1. Explicit value (CLI flag)
    /// 2. SHOPFRONT_BASE_URL environment variable
    /// 3. `[catalog] base_url` from the config file
    /// 4. The public FakeStore deployment
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        if let Some(url) = explicit.filter(|u| !u.trim().is_empty()) {
            return url.trim().to_string();
        }

        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            return url.trim().to_string();
        }

        self.catalog
            .base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim().to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Request timeout; an explicit value wins over the config file
    pub fn resolve_timeout(&self, explicit_secs: Option<u64>) -> Option<Duration> {
        match explicit_secs.or(self.catalog.timeout_secs) {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn default_route(&self) -> Option<&str> {
        self.ui.default_route.as_deref()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.catalog.base_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(Error::Config(format!(
                "catalog.base_url must be an http(s) URL, got {:?}",
                url
            )));
        }
        Ok(())
    }
}
