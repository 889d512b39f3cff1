//! Command-line interface definitions.
//!
//! All options have sensible defaults; the API key may also arrive through
//! the `NEWSAPI_KEY` environment variable.

use clap::Parser;

/// Command-line arguments for the digest run.
///
/// # Examples
///
/// ```sh
/// # Demo headlines, no key required
/// daily_news_digest
///
/// # Real headlines for a category and country
/// daily_news_digest -c business --country uk --api-key YOUR_KEY
///
/// # Read the digest aloud and keep a JSON copy
/// daily_news_digest -c tech -v -j ./digests
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News category alias (tech, sports, politics, ...) or a raw API
    /// category name
    #[arg(short, long, default_value = "tech")]
    pub category: String,

    /// Two-letter country code for headlines
    #[arg(long, default_value = "us")]
    pub country: String,

    /// Read the digest aloud through a local speech engine
    #[arg(short, long)]
    pub voice: bool,

    /// Maximum number of headlines to fetch (overrides config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// News API key
    #[arg(long, env = "NEWSAPI_KEY")]
    pub api_key: Option<String>,

    /// Optional path to a YAML config file
    #[arg(long)]
    pub config: Option<String>,

    /// Output directory for a JSON copy of the digest
    #[arg(short = 'j', long)]
    pub json_output_dir: Option<String>,

    /// Print setup instructions and exit
    #[arg(long)]
    pub setup: bool,
}
