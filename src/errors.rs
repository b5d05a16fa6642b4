use thiserror::Error;

use crate::fees::FeeError;
use crate::pricing::PricingError;
use crate::shipping::ShippingError;
use crate::tariffs::TariffError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pricing library
#[derive(Error, Debug)]
pub enum Error {
    #[error("Tariff resolution failed: {0}")]
    Tariff(#[from] TariffError),

    #[error("Shipping catalog lookup failed: {0}")]
    Shipping(#[from] ShippingError),

    #[error("Fee model rejected input: {0}")]
    Fee(#[from] FeeError),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
