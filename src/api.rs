//! News API client.
//!
//! Fetches top headlines for a category/country pair from a
//! NewsAPI-compatible endpoint. When no API key is configured the client
//! serves a small built-in demo set instead of touching the network, so the
//! rest of the pipeline behaves identically with or without credentials.
//!
//! Failures surface as [`FetchError`]; the orchestrating caller logs them
//! and degrades to an empty article list, so a fetch problem never reaches
//! the summarizer.

use crate::config::NewsConfig;
use crate::models::{Article, HeadlinesResponse};
use crate::utils::truncate_for_log;
use chrono::Utc;
use itertools::Itertools;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Errors that can occur while fetching headlines.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, timeout).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with a non-2xx status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// The API answered with `status != "ok"` in the envelope.
    #[error("News API error ({code}): {message}")]
    Api { code: String, message: String },
    /// The configured base URL could not be parsed.
    #[error("Invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// The response body was not a valid headlines envelope.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the top-headlines endpoint.
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl NewsApiClient {
    /// Build a client from configuration.
    ///
    /// The underlying HTTP client carries the request timeout and a
    /// versioned User-Agent; both apply to every request this client makes.
    pub fn new(config: &NewsConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("daily-news-digest/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch top headlines for a category and country.
    ///
    /// `category` must already be resolved to an API category name (see
    /// [`NewsConfig::resolve_category`]). Results are deduplicated by URL
    /// (falling back to title) in fetch order. Without an API key the
    /// built-in demo headlines are returned and no request is made.
    ///
    /// The key travels in the `X-Api-Key` header, keeping request URLs safe
    /// to log.
    #[instrument(level = "info", skip(self))]
    pub async fn top_headlines(
        &self,
        category: &str,
        country: &str,
        page_size: usize,
    ) -> Result<Vec<Article>, FetchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            info!("No API key configured; serving built-in demo headlines");
            return Ok(demo_headlines());
        };

        let mut endpoint = self.base_url.join("v2/top-headlines")?;
        endpoint
            .query_pairs_mut()
            .append_pair("category", category)
            .append_pair("country", country)
            .append_pair("pageSize", &page_size.to_string());

        debug!(url = %endpoint, "Requesting top headlines");
        let response = self
            .http
            .get(endpoint)
            .header("X-Api-Key", api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: HeadlinesResponse = serde_json::from_str(&body).inspect_err(|e| {
            warn!(
                error = %e,
                response_preview = %truncate_for_log(&body, 300),
                "News API returned a malformed body"
            );
        })?;

        if envelope.status != "ok" {
            return Err(FetchError::Api {
                code: envelope.code.unwrap_or_else(|| "unknown".to_string()),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let total_results = envelope.total_results;
        let articles: Vec<Article> = envelope
            .articles
            .into_iter()
            .unique_by(|a| a.url.clone().unwrap_or_else(|| a.title.clone()))
            .collect();

        info!(count = articles.len(), ?total_results, "Fetched top headlines");
        Ok(articles)
    }
}

/// The fixed demo set served when no API key is configured.
fn demo_headlines() -> Vec<Article> {
    let now = Utc::now();
    vec![
        Article {
            title: "🚀 Demo: AI Breakthrough in Healthcare".to_string(),
            description: Some(
                "Researchers develop new AI system that can diagnose diseases with 95% accuracy, \
                 potentially revolutionizing medical diagnosis worldwide."
                    .to_string(),
            ),
            url: Some("https://example.com/ai-healthcare".to_string()),
            published_at: Some(now),
        },
        Article {
            title: "⚡ Demo: Renewable Energy Milestone Reached".to_string(),
            description: Some(
                "Solar and wind power now account for over 50% of electricity generation in \
                 several countries, marking a historic shift toward clean energy."
                    .to_string(),
            ),
            url: Some("https://example.com/renewable-energy".to_string()),
            published_at: Some(now),
        },
        Article {
            title: "🌍 Demo: Climate Summit Reaches Historic Agreement".to_string(),
            description: Some(
                "World leaders agree on ambitious new climate targets, including carbon \
                 neutrality by 2050 and massive investment in green technology."
                    .to_string(),
            ),
            url: Some("https://example.com/climate-summit".to_string()),
            published_at: Some(now),
        },
    ]
}
