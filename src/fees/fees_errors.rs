use thiserror::Error;

/// Custom error type for fee-model construction
#[derive(Debug, Error)]
pub enum FeeError {
    #[error("Invalid fee rate: {0}")]
    InvalidFeeRate(String),
}

/// Result type for fee operations
pub type Result<T> = std::result::Result<T, FeeError>;
