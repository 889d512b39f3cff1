//! # Daily News Digest
//!
//! A news digest CLI that fetches top headlines from a NewsAPI-compatible
//! endpoint, reduces each article to a short extractive bullet summary,
//! and presents the result on the console, optionally reading it aloud
//! and/or writing it to a JSON edition file.
//!
//! ## Features
//!
//! - Fetches top headlines by category and country (built-in demo
//!   headlines when no API key is configured)
//! - Deterministic first/middle/last sentence summarization, at most three
//!   bullets per article
//! - Optional voice output through a local speech engine (espeak-ng or
//!   macOS `say`), degrading to silence when neither is installed
//! - Optional JSON digest output, one file per date/category/edition
//!
//! ## Usage
//!
//! ```sh
//! daily_news_digest -c tech --country us -v -j ./digests
//! ```
//!
//! ## Architecture
//!
//! The application is a straight pipeline:
//! 1. **Fetch**: request headlines (or serve the demo set)
//! 2. **Summarize**: reduce each article to 1-3 bullets
//! 3. **Present**: print, optionally speak, optionally write JSON

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod config;
mod display;
mod models;
mod outputs;
mod speech;
mod summarizer;
mod utils;

use api::NewsApiClient;
use cli::Cli;
use config::NewsConfig;
use models::{Digest, DigestItem};
use speech::Speaker;
use utils::{ensure_writable_dir, time_of_day};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_news_digest starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(
        category = %args.category,
        country = %args.country,
        voice = args.voice,
        "Parsed CLI arguments"
    );

    if args.setup {
        println!("{}", display::setup_instructions());
        return Ok(());
    }

    // --- Configuration: optional file, then CLI overrides ---
    let mut config = match args.config.as_deref() {
        Some(path) => NewsConfig::load(Path::new(path))?,
        None => NewsConfig::default(),
    };
    if args.api_key.is_some() {
        config.api_key = args.api_key.clone();
    }
    if let Some(limit) = args.limit {
        config.max_articles = limit;
    }
    debug!(?config, "Effective configuration");

    // Early check: ensure the digest output dir is writable
    if let Some(dir) = args.json_output_dir.as_deref() {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Digest output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let client = NewsApiClient::new(&config)?;
    let api_category = config.resolve_category(&args.category);

    // ---- Fetch headlines ----
    let date_line = Local::now().format("%B %d, %Y").to_string();
    print!(
        "{}",
        display::header(&args.category, &config.country_label(&args.country), &date_line)
    );
    println!("🔄 Fetching news...");

    let articles = match client
        .top_headlines(&api_category, &args.country, config.max_articles)
        .await
    {
        Ok(articles) => articles,
        Err(e) => {
            // Fetch failures degrade to an empty digest rather than abort.
            error!(error = %e, "Headline fetch failed");
            Vec::new()
        }
    };

    if articles.is_empty() {
        println!("❌ No news articles found.");
        return Ok(());
    }
    println!("✅ Found {} articles", articles.len());
    info!(count = articles.len(), "Headlines ready for summarization");

    let speaker = if args.voice {
        Speaker::detect(&config.speech)
    } else {
        Speaker::Disabled
    };

    // ---- Build the digest ----
    let mut digest = Digest {
        local_date: Local::now().date_naive().to_string(),
        time_of_day: time_of_day(),
        category: args.category.clone(),
        country: args.country.clone(),
        items: Vec::new(),
    };

    for (i, article) in articles.iter().enumerate() {
        let index = i + 1;
        let summary = summarizer::summarize(article);
        print!("{}", display::article(index, article, &summary));

        if speaker.is_enabled() {
            if let Err(e) = speaker
                .speak(&format!("Article {index}: {}", article.title))
                .await
            {
                warn!(index, error = %e, "Voice output failed; continuing silently");
            }
            for bullet in summary.bullets() {
                if let Err(e) = speaker.speak(bullet).await {
                    warn!(index, error = %e, "Voice output failed; continuing silently");
                }
            }
            // Brief pause between spoken articles.
            tokio::time::sleep(Duration::from_millis(500)).await;
        }

        digest.items.push(DigestItem {
            article: article.clone(),
            bullets: summary.bullets().to_vec(),
        });
    }

    // ---- JSON output ----
    if let Some(dir) = args.json_output_dir.as_deref() {
        if let Err(e) = outputs::write_digest(&digest, dir).await {
            error!(error = %e, "Failed to write digest JSON");
        }
    }

    print!("{}", display::footer(speaker.is_enabled()));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
