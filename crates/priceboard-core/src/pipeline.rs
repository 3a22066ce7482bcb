//! The orchestrating fetch-merge loop for one run.

use std::collections::BTreeMap;
use std::time::Duration;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::config::Instrument;
use crate::domain::{DayStamp, Snapshot};
use crate::pacing::RequestPacer;
use crate::provider::AlphaVantageClient;
use crate::resolve;

const UPDATED_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

/// Run one full update: fetch every configured instrument sequentially,
/// resolve each against the prior snapshot, and assemble the new one.
///
/// Failures stay local to an instrument, so the output always contains
/// exactly one entry per configured instrument. Nothing is written here;
/// the caller persists both artifacts only once this snapshot exists in
/// full.
pub async fn run(
    instruments: &[Instrument],
    start: DayStamp,
    client: &AlphaVantageClient,
    previous: Option<&Snapshot>,
    min_interval: Duration,
) -> Snapshot {
    let pacer = RequestPacer::new(min_interval);
    let mut stocks = BTreeMap::new();

    for instrument in instruments {
        let waited = pacer.pace().await;
        if !waited.is_zero() {
            log::info!(
                "[{}] waited {:.1}s for rate budget",
                instrument.ticker,
                waited.as_secs_f64()
            );
        }

        log::info!(
            "[{}] fetching {}",
            instrument.ticker,
            instrument.provider_symbol
        );
        let fetched = client.daily_series(&instrument.provider_symbol).await;
        let cached = previous.and_then(|snapshot| snapshot.stocks.get(instrument.ticker.as_str()));
        let entry = resolve::resolve(instrument, fetched, cached, start);
        stocks.insert(instrument.ticker.as_str().to_owned(), entry);
    }

    // Non-USD instruments are tracked against a USD proxy; the current
    // rate is informational and does not alter stored prices.
    if instruments
        .iter()
        .any(|instrument| instrument.currency != "USD")
    {
        pacer.pace().await;
        let rate = client.exchange_rate("EUR", "USD").await;
        log::info!("EUR/USD = {rate}");
    }

    Snapshot {
        updated: updated_stamp(OffsetDateTime::now_utc()),
        start_date: start,
        stocks,
    }
}

fn updated_stamp(now: OffsetDateTime) -> String {
    now.format(UPDATED_FORMAT)
        .unwrap_or_else(|_| String::from("unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn updated_stamp_matches_the_artifact_format() {
        let stamp = updated_stamp(datetime!(2026-02-03 14:05:59 UTC));
        assert_eq!(stamp, "2026-02-03 14:05 UTC");
    }
}
