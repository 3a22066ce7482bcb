use thiserror::Error;

/// Validation errors raised when building configuration and domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("day must be an ISO calendar date (YYYY-MM-DD): '{value}'")]
    InvalidDayStamp { value: String },

    #[error("currency must be a 3-letter uppercase ISO code: '{value}'")]
    InvalidCurrency { value: String },

    #[error("baseline price for '{ticker}' must be a positive finite number")]
    NonPositiveBaseline { ticker: String },
}

/// Snapshot persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}
