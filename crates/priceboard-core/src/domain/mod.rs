//! Domain types for the priceboard pipeline.
//!
//! All types validate their invariants at construction time and carry
//! full serde support where they appear in the canonical JSON artifact.

mod day;
mod snapshot;
mod ticker;

pub use day::DayStamp;
pub use snapshot::{round2, DailySeries, Snapshot, StockEntry};
pub use ticker::Ticker;
