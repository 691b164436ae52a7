//! Match Report
//!
//! Collects one result per ranked title and writes them as a JSON array.

use crate::error::{FinderError, FinderResult};
use serde::{Serialize, Serializer};
use std::path::Path;
use tracing::info;

/// Literal written in place of a link when nothing matched
pub const NOT_FOUND_TOKEN: &str = "未找到";

/// Link lookup outcome for one ranked title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Found(String),
    NotFound,
}

impl LinkStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, LinkStatus::Found(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            LinkStatus::Found(link) => link,
            LinkStatus::NotFound => NOT_FOUND_TOKEN,
        }
    }
}

impl From<Option<&str>> for LinkStatus {
    fn from(link: Option<&str>) -> Self {
        match link {
            Some(link) => LinkStatus::Found(link.to_string()),
            None => LinkStatus::NotFound,
        }
    }
}

impl Serialize for LinkStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(rename = "ranking")]
    pub rank: i64,
    #[serde(rename = "playletName")]
    pub target: String,
    #[serde(rename = "quarkUrl")]
    pub link: LinkStatus,
}

/// Ordered results of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub results: Vec<MatchResult>,
}

impl Report {
    pub fn new(results: Vec<MatchResult>) -> Self {
        Self { results }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|r| r.link.is_found()).count()
    }

    /// Percentage of titles with a link, 0.0 for an empty report
    pub fn match_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.found_count() as f64 * 100.0 / self.total() as f64
    }

    pub fn log_summary(&self) {
        info!("📊 Summary");
        info!("   Queried: {} playlets", self.total());
        info!("   Found:   {} links", self.found_count());
        info!("   Rate:    {:.1}%", self.match_rate());
    }

    pub fn to_json(&self) -> FinderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report, creating parent directories as needed
    pub fn write(&self, path: &Path) -> FinderResult<()> {
        let report_err = |message: String| FinderError::Report {
            path: path.to_path_buf(),
            message,
        };

        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| report_err(e.to_string()))?;
        }
        std::fs::write(path, json).map_err(|e| report_err(e.to_string()))?;

        info!("💾 Results saved to {}", path.display());
        Ok(())
    }
}
