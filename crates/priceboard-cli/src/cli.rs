//! CLI argument definitions for priceboard.

use std::path::PathBuf;

use clap::Parser;

/// Update the tracked-stock price artifacts.
///
/// Fetches daily closes from Alpha Vantage for the configured ticker set,
/// derives year-to-date changes, rewrites the canonical JSON snapshot,
/// and regenerates the embedded price block on the tracker page.
///
/// Requires the AV_API_KEY environment variable; a `.env` file next to
/// the working directory is honored.
#[derive(Debug, Parser)]
#[command(name = "priceboard", version, about = "YTD price tracker updater")]
pub struct Cli {
    /// Path of the canonical JSON snapshot.
    #[arg(long, default_value = "data/prices.json")]
    pub data_file: PathBuf,

    /// Path of the tracker page holding the embedded price block.
    #[arg(long, default_value = "index.html")]
    pub page: PathBuf,

    /// Skip regenerating the page block; only write the JSON snapshot.
    #[arg(long, default_value_t = false)]
    pub skip_page: bool,

    /// Minimum seconds between provider calls (free tier: 5 calls/min).
    #[arg(long, default_value_t = 13)]
    pub pace_secs: u64,

    /// Override the YTD start boundary (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,
}
