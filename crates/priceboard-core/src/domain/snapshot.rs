use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::DayStamp;

/// Daily close prices keyed by calendar day, iterated oldest-first.
pub type DailySeries = BTreeMap<DayStamp, f64>;

/// Round a price or percentage to exactly two fraction digits.
///
/// Applied at computation time, never at serialization time, so repeated
/// reads of the artifacts are byte-stable.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-ticker derived record in the canonical snapshot.
///
/// `ytd` is absent for placeholder entries that never had any data;
/// `error` is set exactly in that no-data-ever case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Baseline price anchoring the YTD computation.
    pub p0: f64,
    /// Close on the most recent day, or the baseline if no data exists.
    pub p1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ytd: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub daily: DailySeries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full output of one run. Replaces the prior artifact wholesale; the
/// prior snapshot is only ever read as fallback input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Generation timestamp, informational only.
    pub updated: String,
    /// Start boundary the run was filtered against, kept for traceability.
    pub start_date: DayStamp,
    pub stocks: BTreeMap<String, StockEntry>,
}
