//! Managed-region regeneration inside the hand-authored tracker page.
//!
//! The page carries exactly one machine-owned span, bracketed by fixed
//! sentinels. Publishing replaces that span wholesale and leaves every
//! byte outside it untouched. When the sentinels cannot be found the
//! operation refuses to touch the document at all — appending a new
//! block or guessing a location could corrupt hand-authored content.

use std::collections::BTreeMap;

use crate::domain::StockEntry;

/// Sentinels bracketing a machine-owned span inside a larger document.
#[derive(Debug, Clone, Copy)]
pub struct ManagedRegion {
    open: &'static str,
    close: &'static str,
}

/// The embedded price block on the tracker page.
pub const PRICES_REGION: ManagedRegion = ManagedRegion::new("const PRICES = {", "\n};");

impl ManagedRegion {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    /// Replace the managed span with `content`.
    ///
    /// The span runs from the opening sentinel to the first closing
    /// sentinel after it (inclusive). Returns `None` when no such span
    /// exists; the caller warns and leaves the document alone.
    pub fn replace(&self, document: &str, content: &str) -> Option<String> {
        let open_at = document.find(self.open)?;
        let after_open = open_at + self.open.len();
        let close_rel = document[after_open..].find(self.close)?;
        let close_at = after_open + close_rel + self.close.len();

        let mut updated = String::with_capacity(
            document.len() - (close_at - open_at) + content.len(),
        );
        updated.push_str(&document[..open_at]);
        updated.push_str(content);
        updated.push_str(&document[close_at..]);
        Some(updated)
    }
}

/// Render the `const PRICES` block for the page.
///
/// Deterministic for a given stock mapping: one entry per ticker in map
/// iteration order, the daily series as a compact date-to-price object.
/// The rendered text starts with the region's opening sentinel and ends
/// with its closing sentinel, so regeneration converges after one pass.
pub fn prices_block(stocks: &BTreeMap<String, StockEntry>) -> String {
    let mut lines = vec![String::from("const PRICES = {")];
    for (ticker, entry) in stocks {
        let daily = serde_json::to_string(&entry.daily).unwrap_or_else(|_| String::from("{}"));
        lines.push(format!("  \"{ticker}\": {{"));
        lines.push(format!(
            "    \"p0\": {}, \"p1\": {}, \"currency\": \"{}\",",
            entry.p0, entry.p1, entry.currency
        ));
        lines.push(format!("    \"daily\": {daily}"));
        lines.push(String::from("  },"));
    }
    lines.push(String::from("};"));
    lines.join("\n")
}
