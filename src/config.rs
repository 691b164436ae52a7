use crate::error::{FinderError, FinderResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Ranking API
    pub base_url: String,
    pub page_id: u32,
    pub page_size: u32,
    pub month: String,
    pub request_timeout_secs: u64,
    pub max_retries: usize,

    // Dataset
    pub dataset_path: PathBuf,
    pub link_domain: String,

    // Report
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://playlet-applet.dataeye.com/playlet/listHotRanking".to_string(),
            page_id: 1,
            page_size: 30,
            month: "2025-01".to_string(),
            request_timeout_secs: 15,
            max_retries: 2,
            dataset_path: PathBuf::from("./短剧.csv"),
            link_domain: "pan.quark.cn".to_string(),
            output_path: PathBuf::from("matching_results.json"),
        }
    }
}

impl Config {
    /// Load config from a JSON file; missing keys fall back to defaults
    pub fn load(path: &Path) -> FinderResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FinderError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| FinderError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Load the per-user config file if one exists, otherwise defaults
    pub fn load_or_default() -> FinderResult<Self> {
        let path = config_path();
        if path.exists() {
            tracing::debug!("Using config file {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a JSON file
    pub fn save(&self, path: &Path) -> FinderResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the ranking API or the dataset reader cannot use
    pub fn validate(&self) -> FinderResult<()> {
        if self.page_id == 0 {
            return Err(FinderError::Config("page_id must be at least 1".into()));
        }
        if self.page_size == 0 {
            return Err(FinderError::Config("page_size must be at least 1".into()));
        }
        let month_ok = self.month.len() == 7
            && NaiveDate::parse_from_str(&format!("{}-01", self.month), "%Y-%m-%d").is_ok();
        if !month_ok {
            return Err(FinderError::Config(format!(
                "month must look like YYYY-MM, got '{}'",
                self.month
            )));
        }
        if reqwest::Url::parse(&self.base_url).is_err() {
            return Err(FinderError::Config(format!(
                "base_url is not a valid URL: '{}'",
                self.base_url
            )));
        }
        if self.link_domain.trim().is_empty() {
            return Err(FinderError::Config("link_domain must not be empty".into()));
        }
        Ok(())
    }
}

/// Default per-user config location
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("playlet-finder")
        .join("config.json")
}
