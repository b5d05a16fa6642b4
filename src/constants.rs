use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for internal rate and cost calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for monetary amounts in result breakdowns
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Listing prices snap to this step (merchandising convention)
pub const PRICE_ROUNDING_STEP: Decimal = dec!(5);

/// Default timeout for external table lookups, in seconds
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 3;
