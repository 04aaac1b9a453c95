use crate::constants::{DEFAULT_RELEASE_YEAR, catalog, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const API_KEY_ENV: &str = "MOVIEFIX_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub catalog: CatalogConfig,

    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Number of tokio worker threads (default: 1)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,

    /// Overridden by the `MOVIEFIX_API_KEY` environment variable when set.
    pub api_key: String,

    /// Sent as `language=` on every request; omitted when empty.
    pub language: String,

    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,

    /// Discover results below this vote count are excluded.
    pub min_vote_count: u32,

    pub image_base_url: String,

    pub poster_size: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: catalog::TMDB_API.to_string(),
            api_key: String::new(),
            language: catalog::DEFAULT_LANGUAGE.to_string(),
            request_timeout_seconds: limits::REQUEST_TIMEOUT_SECONDS,
            min_vote_count: catalog::MIN_VOTE_COUNT,
            image_base_url: catalog::TMDB_IMAGE_BASE.to_string(),
            poster_size: catalog::POSTER_SIZE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enrichment {
    #[default]
    On,
    Off,
}

impl Enrichment {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub default_year: i32,

    /// Resolve genres, cast and director for every listed movie.
    pub enrichment: Enrichment,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_RELEASE_YEAR,
            enrichment: Enrichment::On,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        let mut config = paths
            .iter()
            .find(|path| path.exists())
            .map_or_else(
                || {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                },
                |path| {
                    info!("Loading config from: {}", path.display());
                    Self::load_from_path(path)
                },
            )?;

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            self.catalog.api_key = key.trim().to_string();
        }
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![Self::default_config_path()];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("moviefix").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".moviefix").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("moviefix.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !matches!(self.general.log_format.as_str(), "pretty" | "json") {
            anyhow::bail!(
                "Unknown log format '{}': expected \"pretty\" or \"json\"",
                self.general.log_format
            );
        }

        if self.catalog.api_key.trim().is_empty() {
            anyhow::bail!(
                "Catalog API key is missing: set catalog.api_key or {API_KEY_ENV}"
            );
        }

        url::Url::parse(&self.catalog.base_url)
            .with_context(|| format!("Invalid catalog base URL: {}", self.catalog.base_url))?;

        if self.catalog.request_timeout_seconds == 0 {
            anyhow::bail!("Catalog request timeout must be > 0");
        }

        let year = self.listing.default_year;
        if !(limits::MIN_RELEASE_YEAR..=limits::MAX_RELEASE_YEAR).contains(&year) {
            anyhow::bail!(
                "Default year {year} is outside {}..={}",
                limits::MIN_RELEASE_YEAR,
                limits::MAX_RELEASE_YEAR
            );
        }

        Ok(())
    }
}
