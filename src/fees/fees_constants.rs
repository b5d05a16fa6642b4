use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default payment-processing rate, as a fraction of total revenue
pub const DEFAULT_PAYMENT_PROCESSING_RATE: Decimal = dec!(0.029);

/// Default foreign-exchange buffer rate held back against rate drift
pub const DEFAULT_FX_BUFFER_RATE: Decimal = dec!(0.03);

/// Default cross-border transaction surcharge rate
pub const DEFAULT_CROSS_BORDER_SURCHARGE_RATE: Decimal = dec!(0.013);

/// Default flat per-listing fee
pub const DEFAULT_FIXED_LISTING_FEE: Decimal = dec!(0.30);

/// Default commission discounts by store tier
pub const STARTER_TIER_DISCOUNT: Decimal = dec!(0);
pub const BASIC_TIER_DISCOUNT: Decimal = dec!(0.004);
pub const PREMIUM_TIER_DISCOUNT: Decimal = dec!(0.009);
pub const ANCHOR_TIER_DISCOUNT: Decimal = dec!(0.015);
pub const ENTERPRISE_TIER_DISCOUNT: Decimal = dec!(0.02);
