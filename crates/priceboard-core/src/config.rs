//! Static instrument configuration.
//!
//! The tracked universe is fixed at build time: changing it is a code
//! change, not a runtime input. Every entry is validated once at startup
//! through [`Instrument::new`]; a table that fails validation aborts the
//! run before any network activity.

use crate::domain::{DayStamp, Ticker};
use crate::ValidationError;

/// One tracked instrument, immutable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Stable identifier used in our own artifacts.
    pub ticker: Ticker,
    /// Symbol sent to the provider; may differ from `ticker`.
    pub provider_symbol: Ticker,
    /// Reference price anchoring the YTD computation, fixed at setup time.
    pub baseline_price: f64,
    pub currency: String,
    /// Free text explaining a proxy or approximation, when one applies.
    pub note: Option<String>,
}

impl Instrument {
    pub fn new(
        ticker: &str,
        provider_symbol: &str,
        baseline_price: f64,
        currency: &str,
        note: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let ticker = Ticker::parse(ticker)?;
        let provider_symbol = Ticker::parse(provider_symbol)?;

        // A zero or negative baseline would make the YTD division
        // meaningless, so it is rejected here rather than guarded at
        // computation time.
        if !baseline_price.is_finite() || baseline_price <= 0.0 {
            return Err(ValidationError::NonPositiveBaseline {
                ticker: ticker.as_str().to_owned(),
            });
        }

        Ok(Self {
            ticker,
            provider_symbol,
            baseline_price,
            currency: validate_currency(currency)?,
            note: note.map(str::to_owned),
        })
    }
}

fn validate_currency(code: &str) -> Result<String, ValidationError> {
    let well_formed = code.len() == 3 && code.chars().all(|ch| ch.is_ascii_uppercase());
    if well_formed {
        Ok(code.to_owned())
    } else {
        Err(ValidationError::InvalidCurrency {
            value: code.to_owned(),
        })
    }
}

/// The tracked ticker universe with baseline prices.
///
/// DFEN trades in EUR but the provider only carries the US-listed fund,
/// so it is tracked against that proxy; see the entry's note.
pub fn tracked_instruments() -> Result<Vec<Instrument>, ValidationError> {
    [
        ("HOOD", "HOOD", 115.48, "USD", None),
        ("TTD", "TTD", 38.19, "USD", None),
        ("GMAB", "GMAB", 31.18, "USD", None),
        ("XXI", "XXI", 8.85, "USD", None),
        ("FOUR", "FOUR", 63.31, "USD", None),
        (
            "DFEN",
            "DFEN",
            52.49,
            "EUR",
            Some("Using US DFEN as proxy; EUR price derived from EUR/USD rate"),
        ),
    ]
    .into_iter()
    .map(|(ticker, symbol, baseline, currency, note)| {
        Instrument::new(ticker, symbol, baseline, currency, note)
    })
    .collect()
}

/// First day retained in every daily series: the year's first trading day.
pub fn default_start_day() -> DayStamp {
    DayStamp::parse("2026-01-02").expect("static start day is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table_passes_validation() {
        let instruments = tracked_instruments().expect("table should validate");
        assert_eq!(instruments.len(), 6);
        assert!(instruments
            .iter()
            .all(|instrument| instrument.baseline_price > 0.0));
    }

    #[test]
    fn rejects_non_positive_baseline() {
        let err = Instrument::new("HOOD", "HOOD", 0.0, "USD", None).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositiveBaseline { .. }));
    }

    #[test]
    fn rejects_malformed_currency() {
        let err = Instrument::new("HOOD", "HOOD", 1.0, "usd", None).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidCurrency { .. }));
    }
}
