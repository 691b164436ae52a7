//! Hot Ranking Client
//!
//! Fetches one page of the monthly playlet hot ranking over HTTP.

use crate::config::Config;
use crate::error::{FinderError, FinderResult};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;
use tracing::{debug, info, warn};

/// One ranked title as returned by the ranking API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankingEntry {
    #[serde(rename = "ranking")]
    pub rank: i64,
    #[serde(rename = "playletName")]
    pub title: String,
}

/// Build the ranking request URL with its paging query
pub fn ranking_url(config: &Config) -> FinderResult<Url> {
    let page_id = config.page_id.to_string();
    let page_size = config.page_size.to_string();
    Url::parse_with_params(
        &config.base_url,
        &[
            ("pageId", page_id.as_str()),
            ("pageSize", page_size.as_str()),
            ("month", config.month.as_str()),
        ],
    )
    .map_err(|e| FinderError::Config(format!("bad base_url '{}': {}", config.base_url, e)))
}

/// Parse a ranking response body. The body must carry a `content` array.
pub fn parse_ranking(body: &str) -> FinderResult<Vec<RankingEntry>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FinderError::Payload(format!("invalid JSON: {}", e)))?;

    let content = match value.get("content") {
        Some(content) if content.is_array() => content.clone(),
        Some(_) => return Err(FinderError::Payload("'content' is not an array".into())),
        None => return Err(FinderError::Payload("response has no 'content'".into())),
    };

    serde_json::from_value(content)
        .map_err(|e| FinderError::Payload(format!("malformed ranking entry: {}", e)))
}

/// HTTP client for the ranking API
pub struct RankingClient {
    client: Client,
    max_retries: usize,
}

impl RankingClient {
    pub fn new(config: &Config) -> FinderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            max_retries: config.max_retries,
        })
    }

    /// Fetch and parse the ranking page described by `config`
    pub async fn fetch(&self, config: &Config) -> FinderResult<Vec<RankingEntry>> {
        let url = ranking_url(config)?;
        info!("🌐 Requesting ranking: {}", url);

        let body = self.get_with_retry(url).await?;
        debug!("Ranking body: {} bytes", body.len());

        let entries = parse_ranking(&body)?;
        info!("   -> Got {} ranked playlets.", entries.len());
        Ok(entries)
    }

    async fn get_with_retry(&self, url: Url) -> FinderResult<String> {
        // 500ms, 1s, 2s, ... capped at 5s
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(250)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(self.max_retries);

        let mut attempt = 0;
        Retry::start(strategy, || {
            attempt += 1;
            let current = attempt;
            let request = self.client.get(url.clone());
            async move {
                let result = Self::send(request).await;
                if let Err(e) = &result {
                    warn!("⚠️ Ranking request attempt {} failed: {}", current, e);
                }
                result
            }
        })
        .await?
    }

    /// Send one request. The outer error is transient and retried
    /// (transport failure, 5xx, 429); the inner one is final (other 4xx).
    async fn send(request: reqwest::RequestBuilder) -> FinderResult<FinderResult<String>> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_client_error() && status != StatusCode::TOO_MANY_REQUESTS {
            return Ok(Err(FinderError::Network(format!("HTTP {}", status))));
        }
        if !status.is_success() {
            return Err(FinderError::Network(format!("HTTP {}", status)));
        }
        Ok(Ok(response.text().await?))
    }
}
