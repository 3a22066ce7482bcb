mod cli;
mod error;

use std::env;
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use priceboard_core::{
    default_start_day, pipeline, prices_block, tracked_instruments, AlphaVantageClient, DayStamp,
    ReqwestTransport, Snapshot, SnapshotStore, PRICES_REGION,
};

use crate::cli::Cli;
use crate::error::CliError;

const API_KEY_VAR: &str = "AV_API_KEY";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    // Credential preflight happens before any other work.
    let api_key = env::var(API_KEY_VAR).map_err(|_| CliError::MissingApiKey)?;

    let instruments = tracked_instruments()?;
    let start = match &cli.start_date {
        Some(raw) => DayStamp::parse(raw)?,
        None => default_start_day(),
    };

    let client = AlphaVantageClient::new(Arc::new(ReqwestTransport::new()), api_key);
    let store = SnapshotStore::new(&cli.data_file);
    let previous = store.load();

    println!("priceboard: updating {} instruments from {start}", instruments.len());

    let snapshot = pipeline::run(
        &instruments,
        start,
        &client,
        previous.as_ref(),
        Duration::from_secs(cli.pace_secs),
    )
    .await;

    for (ticker, entry) in &snapshot.stocks {
        match (&entry.error, entry.ytd) {
            (Some(reason), _) => println!("  {ticker}: {reason}"),
            (None, Some(ytd)) => println!(
                "  {ticker}: {} -> {} ({ytd:+.1}%) [{} days]",
                entry.p0,
                entry.p1,
                entry.daily.len()
            ),
            (None, None) => println!("  {ticker}: {} (no YTD data)", entry.p1),
        }
    }

    store.save(&snapshot)?;
    println!("Written {}", cli.data_file.display());

    if !cli.skip_page {
        update_page(&cli, &snapshot)?;
    }

    println!("Done. Updated: {}", snapshot.updated);
    Ok(ExitCode::SUCCESS)
}

/// Regenerate the embedded price block, leaving the rest of the page
/// untouched. A page without the managed block is a warning, not a
/// failure: the JSON artifact has already been written.
fn update_page(cli: &Cli, snapshot: &Snapshot) -> Result<(), CliError> {
    let document = match fs::read_to_string(&cli.page) {
        Ok(document) => document,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            log::warn!(
                "page {} not found; skipping embedded update",
                cli.page.display()
            );
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    let block = prices_block(&snapshot.stocks);
    match PRICES_REGION.replace(&document, &block) {
        Some(updated) => {
            fs::write(&cli.page, updated)?;
            println!("Updated embedded prices in {}", cli.page.display());
        }
        None => log::warn!(
            "no managed price block found in {}; page left untouched",
            cli.page.display()
        ),
    }

    Ok(())
}
