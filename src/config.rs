//! Application configuration.
//!
//! Configuration is an explicit value constructed at startup and passed to
//! the components that need it, never read from process-wide state at the
//! point of use. An optional YAML file (`--config`) can override any subset
//! of the defaults; a missing file simply yields [`NewsConfig::default`].
//! The API key itself usually arrives via the CLI/environment and is
//! applied on top of the file.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML in config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Speech engine tuning, used when `--voice` is enabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Speaking rate in words per minute.
    pub rate: u32,
    /// Output volume in `0.0..=1.0`.
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            rate: 180,
            volume: 0.8,
        }
    }
}

/// Top-level configuration for a digest run.
///
/// All fields use `#[serde(default)]`, so a config file may specify any
/// subset of keys. The `Debug` impl masks the API key so configuration can
/// be logged without leaking the secret.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// News API key. Without one, the fetcher serves built-in demo
    /// headlines instead of touching the network.
    pub api_key: Option<String>,

    /// Base URL of the news API. Overridable for tests.
    pub base_url: String,

    /// Maximum number of headlines to request per run.
    pub max_articles: usize,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,

    /// Category used when the CLI does not specify one.
    pub default_category: String,

    /// Country used when the CLI does not specify one.
    pub default_country: String,

    /// Category aliases mapped to the API's category names.
    pub categories: HashMap<String, String>,

    /// Country codes mapped to display names.
    pub countries: HashMap<String, String>,

    /// Speech engine tuning.
    pub speech: SpeechConfig,
}

impl Default for NewsConfig {
    fn default() -> Self {
        let categories = HashMap::from(
            [
                ("tech", "technology"),
                ("sports", "sports"),
                ("politics", "general"),
                ("entertainment", "entertainment"),
                ("business", "business"),
                ("health", "health"),
                ("science", "science"),
            ]
            .map(|(alias, api_name)| (alias.to_string(), api_name.to_string())),
        );

        let countries = HashMap::from(
            [
                ("us", "United States"),
                ("in", "India"),
                ("uk", "United Kingdom"),
                ("ca", "Canada"),
                ("au", "Australia"),
            ]
            .map(|(code, name)| (code.to_string(), name.to_string())),
        );

        Self {
            api_key: None,
            base_url: "https://newsapi.org".to_string(),
            max_articles: 10,
            timeout_secs: 15,
            default_category: "tech".to_string(),
            default_country: "us".to_string(),
            categories,
            countries,
            speech: SpeechConfig::default(),
        }
    }
}

/// Mask the API key in Debug output so configs can be logged safely.
impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("max_articles", &self.max_articles)
            .field("timeout_secs", &self.timeout_secs)
            .field("default_category", &self.default_category)
            .field("default_country", &self.default_country)
            .field("categories", &self.categories)
            .field("countries", &self.countries)
            .field("speech", &self.speech)
            .finish()
    }
}

impl NewsConfig {
    /// Load configuration from a YAML file.
    ///
    /// - Missing file → `Ok(NewsConfig::default())`
    /// - Empty file → `Ok(NewsConfig::default())`
    /// - Invalid YAML → `Err(ConfigError::Parse)`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        let config: NewsConfig = serde_yaml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve a category alias to the API's category name.
    ///
    /// Unknown aliases pass through unchanged so callers can use any
    /// category the API itself understands.
    pub fn resolve_category(&self, alias: &str) -> String {
        self.categories
            .get(alias)
            .cloned()
            .unwrap_or_else(|| alias.to_string())
    }

    /// Display name for a country code, falling back to the raw code.
    pub fn country_label(&self, code: &str) -> String {
        self.countries
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_uppercase())
    }
}
