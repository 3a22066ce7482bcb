//! Alpha Vantage client: the single seam against the provider schema.
//!
//! Every fetch failure — transport error, non-2xx status, quota notice,
//! unrecognized symbol, malformed payload — collapses to the same Absent
//! signal (`None`), differentiated only by a logged cause line. The merge
//! policy treats all causes identically, so no richer error hierarchy is
//! exposed here.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{DayStamp, Ticker};
use crate::http::HttpTransport;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Approximate EUR/USD applied when the exchange-rate call fails.
const FALLBACK_EXCHANGE_RATE: f64 = 1.05;

/// Raw OHLC record for one trading day, exactly as the provider reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Unfiltered provider series: every day returned, full OHLC.
///
/// Range filtering and reduction to the close price happen downstream in
/// the merge step, keeping this client a pure schema boundary.
pub type RawSeries = BTreeMap<DayStamp, DailyBar>;

pub struct AlphaVantageClient {
    transport: Arc<dyn HttpTransport>,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            base_url: String::from(BASE_URL),
        }
    }

    /// Fetch the daily time series for one provider symbol.
    ///
    /// Returns `None` for every failure mode; the caller decides how to
    /// degrade. The API key travels only in the query string and is never
    /// part of any log line.
    pub async fn daily_series(&self, symbol: &Ticker) -> Option<RawSeries> {
        let url = format!(
            "{}?function=TIME_SERIES_DAILY&symbol={}&outputsize=compact&apikey={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            self.api_key,
        );

        let body = self.fetch(symbol.as_str(), &url).await?;
        let DailyResponse {
            series,
            note,
            information,
            error_message,
        } = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(error) => {
                log::warn!("[{symbol}] malformed daily payload: {error}");
                return None;
            }
        };

        let Some(series) = series else {
            let refusal = note
                .or(information)
                .or(error_message)
                .unwrap_or_else(|| String::from("unknown error"));
            log::warn!("[{symbol}] no daily series in response: {refusal}");
            return None;
        };

        let mut bars = RawSeries::new();
        for (day, raw) in series {
            let Ok(day) = DayStamp::parse(&day) else {
                log::warn!("[{symbol}] unparseable series date '{day}'");
                return None;
            };
            let Some(bar) = raw.to_bar() else {
                log::warn!("[{symbol}] unparseable price values on {day}");
                return None;
            };
            bars.insert(day, bar);
        }

        Some(bars)
    }

    /// Fetch a realtime currency exchange rate, falling back to a fixed
    /// approximate rate when the provider cannot supply one.
    pub async fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        let url = format!(
            "{}?function=CURRENCY_EXCHANGE_RATE&from_currency={}&to_currency={}&apikey={}",
            self.base_url,
            urlencoding::encode(from),
            urlencoding::encode(to),
            self.api_key,
        );
        let label = format!("{from}/{to}");

        let Some(body) = self.fetch(&label, &url).await else {
            return FALLBACK_EXCHANGE_RATE;
        };

        match serde_json::from_str::<ExchangeRateResponse>(&body) {
            Ok(parsed) => parsed.rate().unwrap_or_else(|| {
                log::warn!("[{label}] no exchange rate in response");
                FALLBACK_EXCHANGE_RATE
            }),
            Err(error) => {
                log::warn!("[{label}] malformed exchange-rate payload: {error}");
                FALLBACK_EXCHANGE_RATE
            }
        }
    }

    async fn fetch(&self, label: &str, url: &str) -> Option<String> {
        match self.transport.get(url).await {
            Ok(response) if response.is_success() => Some(response.body),
            Ok(response) => {
                log::warn!("[{label}] provider returned status {}", response.status);
                None
            }
            Err(error) => {
                log::warn!("[{label}] transport error: {}", error.message());
                None
            }
        }
    }
}

/// Daily time-series envelope. A refusal (quota notice, unknown symbol)
/// arrives as a 200 with one of the message fields set instead of the
/// series payload.
#[derive(Debug, Deserialize)]
struct DailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    series: Option<HashMap<String, RawDailyBar>>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

/// The provider reports prices as decimal strings with numbered keys.
#[derive(Debug, Deserialize)]
struct RawDailyBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
}

impl RawDailyBar {
    fn to_bar(&self) -> Option<DailyBar> {
        Some(DailyBar {
            open: self.open.parse().ok()?,
            high: self.high.parse().ok()?,
            low: self.low.parse().ok()?,
            close: self.close.parse().ok()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    payload: Option<HashMap<String, String>>,
}

impl ExchangeRateResponse {
    fn rate(&self) -> Option<f64> {
        self.payload.as_ref()?.get("5. Exchange Rate")?.parse().ok()
    }
}
