use thiserror::Error;

use priceboard_core::{StoreError, ValidationError};

/// CLI-level error categories mapped to exit codes.
///
/// Per-instrument fetch failures never surface here — they degrade to
/// cached or placeholder entries inside the pipeline. What remains are
/// startup preconditions and artifact writes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("AV_API_KEY is not set; export it or add it to .env")]
    MissingApiKey,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingApiKey => 2,
            Self::Validation(_) => 2,
            Self::Store(_) => 10,
            Self::Io(_) => 10,
        }
    }
}
