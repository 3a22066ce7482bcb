//! Behavior tests for the orchestrating loop and pacing.

use std::sync::Arc;
use std::time::Duration;

use priceboard_core::{pipeline, AlphaVantageClient, Instrument, RequestPacer};

use priceboard_tests::{cached_entry, daily_payload, day, instrument, snapshot_with, ScriptedTransport};

fn universe() -> Vec<Instrument> {
    vec![
        instrument("HOOD", 115.48),
        instrument("TTD", 38.19),
        instrument("GMAB", 31.18),
        instrument("XXI", 8.85),
        instrument("FOUR", 63.31),
        instrument("DFEN", 52.49),
    ]
}

#[tokio::test]
async fn every_instrument_appears_exactly_once_even_when_all_fetches_fail() {
    // Given: a provider that refuses every call and no prior snapshot
    let transport = Arc::new(ScriptedTransport::failing("connection refused"));
    let client = AlphaVantageClient::new(transport, "test-key");
    let instruments = universe();

    // When: a full run completes
    let snapshot = pipeline::run(
        &instruments,
        day("2026-01-02"),
        &client,
        None,
        Duration::ZERO,
    )
    .await;

    // Then: one placeholder per configured ticker, nothing dropped
    assert_eq!(snapshot.stocks.len(), instruments.len());
    for instrument in &instruments {
        let entry = snapshot
            .stocks
            .get(instrument.ticker.as_str())
            .expect("every ticker must be present");
        assert_eq!(entry.p1, instrument.baseline_price);
        assert!(entry.error.is_some());
    }
}

#[tokio::test]
async fn cached_entries_survive_a_failed_run() {
    let transport = Arc::new(ScriptedTransport::failing("timeout"));
    let client = AlphaVantageClient::new(transport, "test-key");
    let cached = cached_entry(115.48, 118.2);
    let previous = snapshot_with("HOOD", cached.clone());
    let instruments = vec![instrument("HOOD", 115.48), instrument("TTD", 38.19)];

    let snapshot = pipeline::run(
        &instruments,
        day("2026-01-02"),
        &client,
        Some(&previous),
        Duration::ZERO,
    )
    .await;

    // Stale data is preferred over losing history.
    assert_eq!(snapshot.stocks["HOOD"], cached);
    assert!(snapshot.stocks["TTD"].error.is_some());
}

#[tokio::test]
async fn fresh_data_yields_metrics_for_every_ticker() {
    let transport = Arc::new(ScriptedTransport::ok(daily_payload(&[
        ("2026-01-02", 100.0),
        ("2026-01-05", 110.0),
    ])));
    let client = AlphaVantageClient::new(transport, "test-key");
    let instruments = vec![instrument("HOOD", 100.0), instrument("TTD", 50.0)];

    let snapshot = pipeline::run(
        &instruments,
        day("2026-01-02"),
        &client,
        None,
        Duration::ZERO,
    )
    .await;

    assert_eq!(snapshot.start_date, day("2026-01-02"));
    assert_eq!(snapshot.stocks["HOOD"].ytd, Some(10.0));
    assert_eq!(snapshot.stocks["TTD"].ytd, Some(120.0));
    assert!(!snapshot.updated.is_empty());
}

#[tokio::test]
async fn six_acquisitions_incur_exactly_five_waits() {
    // Given: a pacer spacing calls 60ms apart
    let pacer = RequestPacer::new(Duration::from_millis(60));

    // When: six sequential calls are paced
    let mut waits = 0;
    for _ in 0..6 {
        let waited = pacer.pace().await;
        if waited >= Duration::from_millis(10) {
            waits += 1;
        }
    }

    // Then: only the gaps between calls wait — one fewer than the calls
    assert_eq!(waits, 5);
}
