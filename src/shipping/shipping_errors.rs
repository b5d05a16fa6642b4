use thiserror::Error;

/// Custom error type for shipping catalog access
#[derive(Debug, Error)]
pub enum ShippingError {
    #[error("No shipping policy covers {0}")]
    NoShippingPolicy(String),
    #[error("Shipping catalog lookup timed out: {0}")]
    LookupTimeout(String),
    #[error("Shipping catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

/// Result type for shipping operations
pub type Result<T> = std::result::Result<T, ShippingError>;
