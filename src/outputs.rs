//! JSON digest output.
//!
//! Serializes one run's [`Digest`] to a date-based directory structure:
//!
//! ```text
//! json_output_dir/
//! └── 2026-08-06/
//!     ├── tech_morning.json
//!     ├── tech_evening.json
//!     └── sports_evening.json
//! ```
//!
//! The category and edition name are both part of the filename, so runs
//! for different categories or at different times of day never overwrite
//! each other.

use crate::models::Digest;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`Digest`] to `{dir}/{date}/{category}_{time_of_day}.json`.
///
/// Creates the date directory if needed. Fails on directory-creation,
/// serialization, or write errors; the caller decides whether that aborts
/// the run.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_digest(digest: &Digest, json_output_dir: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(digest)?;

    let date_dir = format!(
        "{}/{}",
        json_output_dir.trim_end_matches('/'),
        digest.local_date
    );
    if let Err(e) = fs::create_dir_all(&date_dir).await {
        error!(%date_dir, error = %e, "Failed to create digest output dir");
        return Err(e.into());
    }

    let output_path = format!(
        "{}/{}_{}.json",
        date_dir, digest.category, digest.time_of_day
    );
    info!(path = %output_path, "Writing digest JSON");
    fs::write(&output_path, json).await?;
    info!(path = %output_path, articles = digest.items.len(), "Wrote digest JSON file");

    Ok(())
}
