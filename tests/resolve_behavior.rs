//! Behavior tests for the fresh/cached/placeholder merge policy.

use priceboard_core::provider::{DailyBar, RawSeries};
use priceboard_core::resolve::resolve;

use priceboard_tests::{cached_entry, day, instrument};

fn bar(close: f64) -> DailyBar {
    DailyBar {
        open: close,
        high: close,
        low: close,
        close,
    }
}

fn series(entries: &[(&str, f64)]) -> RawSeries {
    entries
        .iter()
        .map(|(stamp, close)| (day(stamp), bar(*close)))
        .collect()
}

#[test]
fn when_fresh_data_exists_metrics_follow_the_baseline() {
    // Given: a baseline of 100.00 and two closes after the boundary
    let instrument = instrument("HOOD", 100.0);
    let fetched = series(&[("2026-01-02", 100.0), ("2026-01-05", 110.0)]);

    // When: the instrument is resolved
    let entry = resolve(&instrument, Some(fetched), None, day("2026-01-02"));

    // Then: the latest close and the signed YTD change are derived
    assert_eq!(entry.p1, 110.0);
    assert_eq!(entry.ytd, Some(10.0));
    assert_eq!(entry.daily.len(), 2);
    assert!(entry.error.is_none());
}

#[test]
fn when_series_predates_the_boundary_it_is_filtered_out() {
    let instrument = instrument("TTD", 38.19);
    let fetched = series(&[("2025-12-31", 90.0), ("2026-01-02", 100.0)]);

    let entry = resolve(&instrument, Some(fetched), None, day("2026-01-02"));

    // The boundary is a hard filter, not a display concern.
    assert_eq!(entry.daily.len(), 1);
    assert!(entry.daily.contains_key(&day("2026-01-02")));
    assert!(!entry.daily.contains_key(&day("2025-12-31")));
}

#[test]
fn when_the_filtered_series_is_empty_the_baseline_carries_with_zero_change() {
    let instrument = instrument("GMAB", 31.18);
    let fetched = series(&[("2025-12-30", 29.5)]);

    let entry = resolve(&instrument, Some(fetched), None, day("2026-01-02"));

    assert_eq!(entry.p1, 31.18);
    assert_eq!(entry.ytd, Some(0.0));
    assert!(entry.daily.is_empty());
    // Not an error: the provider answered, just with nothing in range.
    assert!(entry.error.is_none());
}

#[test]
fn when_the_fetch_fails_a_cached_entry_survives_verbatim() {
    let instrument = instrument("XXI", 8.85);
    let cached = cached_entry(8.85, 9.4);

    let entry = resolve(&instrument, None, Some(&cached), day("2026-01-02"));

    assert_eq!(entry, cached);
}

#[test]
fn when_the_fetch_fails_without_cache_a_placeholder_is_emitted() {
    let instrument = instrument("FOUR", 63.31);

    let entry = resolve(&instrument, None, None, day("2026-01-02"));

    assert_eq!(entry.p1, 63.31);
    assert!(entry.daily.is_empty());
    assert!(entry.ytd.is_none());
    let reason = entry.error.expect("placeholder must carry a reason");
    assert!(!reason.is_empty());
}

#[test]
fn closes_and_changes_are_rounded_at_computation_time() {
    let instrument = instrument("HOOD", 100.0);
    let fetched = series(&[("2026-01-02", 123.456)]);

    let entry = resolve(&instrument, Some(fetched), None, day("2026-01-02"));

    assert_eq!(entry.p1, 123.46);
    assert_eq!(entry.daily[&day("2026-01-02")], 123.46);
    assert_eq!(entry.ytd, Some(23.46));
}
