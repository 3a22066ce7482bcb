use std::fmt::{Display, Formatter};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 12;

/// Normalized ticker symbol, used both as our own stable identifier and
/// as the key sent to the provider (the two may differ per instrument).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Parse and normalize a ticker to uppercase ASCII.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(ValidationError::TickerTooLong {
                len,
                max: MAX_TICKER_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || ch == '.' || ch == '-';
            if !valid {
                return Err(ValidationError::TickerInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_ticker() {
        let parsed = Ticker::parse(" hood ").expect("ticker should parse");
        assert_eq!(parsed.as_str(), "HOOD");
    }

    #[test]
    fn rejects_empty_ticker() {
        let err = Ticker::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyTicker);
    }

    #[test]
    fn rejects_invalid_characters() {
        let err = Ticker::parse("HO OD").expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerInvalidChar { .. }));
    }
}
