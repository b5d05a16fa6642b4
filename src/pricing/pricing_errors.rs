use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for the price solve itself.
///
/// A loss-making result is not an error; it comes back as a fully populated
/// [`super::PricingResult`] with `success = false`.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error(
        "target margin {target_margin} plus variable fee rate {variable_rate} reaches or exceeds 1; no finite price achieves the target"
    )]
    UnsatisfiableMargin {
        target_margin: Decimal,
        variable_rate: Decimal,
    },
}
