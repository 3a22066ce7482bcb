//! Merge & derive: turn fetched (or missing) provider data into the
//! per-ticker snapshot entry.
//!
//! Decision order:
//! 1. fresh series present — filter to the start boundary and derive
//!    the latest close and YTD change;
//! 2. fetch failed but a cached entry exists — carry it verbatim (stale
//!    data beats losing history);
//! 3. neither — emit a baseline placeholder with `error` set.
//!
//! This module never fails and never panics; arithmetic preconditions
//! (positive baseline) are enforced by configuration validation.

use crate::config::Instrument;
use crate::domain::{round2, DailySeries, DayStamp, StockEntry};
use crate::provider::RawSeries;

/// Resolve one instrument from fresh data, cached fallback, or baseline.
pub fn resolve(
    instrument: &Instrument,
    fetched: Option<RawSeries>,
    cached: Option<&StockEntry>,
    start: DayStamp,
) -> StockEntry {
    match fetched {
        Some(series) => derive(instrument, &series, start),
        None => match cached {
            Some(entry) => {
                log::info!("[{}] using cached data", instrument.ticker);
                entry.clone()
            }
            None => placeholder(instrument),
        },
    }
}

fn derive(instrument: &Instrument, series: &RawSeries, start: DayStamp) -> StockEntry {
    let daily: DailySeries = series
        .iter()
        .filter(|(day, _)| **day >= start)
        .map(|(day, bar)| (*day, round2(bar.close)))
        .collect();

    let (p1, ytd) = match daily.iter().next_back() {
        Some((_, latest)) => {
            let latest = *latest;
            let change =
                round2((latest - instrument.baseline_price) / instrument.baseline_price * 100.0);
            (latest, Some(change))
        }
        None => {
            // The provider had data, just none on or after the boundary.
            log::info!("[{}] no data on or after {start}", instrument.ticker);
            (instrument.baseline_price, Some(0.0))
        }
    };

    StockEntry {
        p0: instrument.baseline_price,
        p1,
        ytd,
        currency: instrument.currency.clone(),
        daily,
        error: None,
    }
}

fn placeholder(instrument: &Instrument) -> StockEntry {
    log::warn!("[{}] no fresh data and no cached entry", instrument.ticker);
    StockEntry {
        p0: instrument.baseline_price,
        p1: instrument.baseline_price,
        ytd: None,
        currency: instrument.currency.clone(),
        daily: DailySeries::new(),
        error: Some(String::from("No data available")),
    }
}
