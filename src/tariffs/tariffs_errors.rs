use thiserror::Error;

/// Custom error type for tariff resolution
#[derive(Debug, Error)]
pub enum TariffError {
    #[error("No duty record for classification code '{0}'")]
    ClassificationNotFound(String),
    #[error("Duty table lookup timed out: {0}")]
    LookupTimeout(String),
    #[error("Duty table unavailable: {0}")]
    TableUnavailable(String),
}

/// Result type for tariff operations
pub type Result<T> = std::result::Result<T, TariffError>;
