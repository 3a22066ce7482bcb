//! # Priceboard Core
//!
//! Fetch-merge-publish pipeline behind the `priceboard` binary: daily
//! closing prices for a fixed ticker set, year-to-date performance, and
//! the two published artifacts — the canonical JSON snapshot and the
//! managed `const PRICES` block embedded in the tracker page.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Static instrument table and the YTD start boundary |
//! | [`domain`] | Tickers, day stamps, snapshot shapes |
//! | [`http`] | Transport seam (reqwest or an offline stub) |
//! | [`provider`] | Alpha Vantage client with Absent normalization |
//! | [`pacing`] | Minimum-interval pacing for the provider quota |
//! | [`resolve`] | Fresh/cached/placeholder merge policy |
//! | [`store`] | Tolerant load and atomic save of the snapshot |
//! | [`publish`] | Managed-region regeneration for the page |
//! | [`pipeline`] | Sequential per-instrument orchestration |
//!
//! ## Failure model
//!
//! Per-instrument provider failures never escape the pipeline: every
//! fetch problem collapses to the Absent signal at the provider seam and
//! degrades to the cached entry or a baseline placeholder. The only
//! fallible operations exposed to the binary are configuration
//! validation and artifact writes.

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod pacing;
pub mod pipeline;
pub mod provider;
pub mod publish;
pub mod resolve;
pub mod store;

pub use config::{default_start_day, tracked_instruments, Instrument};
pub use domain::{round2, DailySeries, DayStamp, Snapshot, StockEntry, Ticker};
pub use error::{StoreError, ValidationError};
pub use http::{HttpError, HttpResponse, HttpTransport, ReqwestTransport};
pub use pacing::RequestPacer;
pub use provider::{AlphaVantageClient, DailyBar, RawSeries};
pub use publish::{prices_block, ManagedRegion, PRICES_REGION};
pub use store::SnapshotStore;
