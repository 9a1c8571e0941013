use crate::error::ConfigError;
use crate::search::SortKey;
use crate::testimonials::DEFAULT_RECENT_MONTHS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Listings per results page
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Runtime configuration, read from an optional JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub page_size: usize,
    pub default_sort: SortKey,
    /// Directory holding `properties.json` / `testimonials.json`;
    /// the built-in fixtures are used when unset
    pub data_dir: Option<PathBuf>,
    pub recent_testimonial_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::Newest,
            data_dir: None,
            recent_testimonial_months: DEFAULT_RECENT_MONTHS,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.page_size()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when no path is given
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.page_size).ok_or(ConfigError::ZeroPageSize)
    }
}
