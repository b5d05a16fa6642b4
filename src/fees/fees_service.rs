use rust_decimal::Decimal;

use super::fees_errors::{FeeError, Result};
use super::fees_model::{FeeConfig, FeeProfile, StoreTier};

/// Pure fee-rate model. Deterministic, no I/O; invalid rates fail fast at
/// construction.
pub struct FeeModel {
    config: FeeConfig,
}

impl FeeModel {
    pub fn new(config: FeeConfig) -> Result<Self> {
        validate_fraction("paymentProcessingRate", config.payment_processing_rate)?;
        validate_fraction("fxBufferRate", config.fx_buffer_rate)?;
        validate_fraction("crossBorderSurchargeRate", config.cross_border_surcharge_rate)?;
        if config.fixed_listing_fee < Decimal::ZERO {
            return Err(FeeError::InvalidFeeRate(format!(
                "fixedListingFee must be >= 0, got {}",
                config.fixed_listing_fee
            )));
        }
        for (tier, discount) in &config.store_tier_discounts {
            if *discount < Decimal::ZERO || *discount >= Decimal::ONE {
                return Err(FeeError::InvalidFeeRate(format!(
                    "store tier discount for {tier:?} must be in [0, 1), got {discount}"
                )));
            }
        }
        Ok(Self { config })
    }

    /// Resolves the fee profile for a listing. The commission discount never
    /// pushes the effective rate below zero.
    pub fn profile(&self, base_commission_rate: Decimal, store_tier: StoreTier) -> Result<FeeProfile> {
        validate_fraction("baseCommissionRate", base_commission_rate)?;
        let discount = self.config.store_tier_discount(store_tier);
        let effective_commission_rate = (base_commission_rate - discount).max(Decimal::ZERO);
        Ok(FeeProfile {
            effective_commission_rate,
            payment_processing_rate: self.config.payment_processing_rate,
            fx_buffer_rate: self.config.fx_buffer_rate,
            cross_border_surcharge_rate: self.config.cross_border_surcharge_rate,
            fixed_listing_fee: self.config.fixed_listing_fee,
        })
    }

    pub fn config(&self) -> &FeeConfig {
        &self.config
    }
}

fn validate_fraction(name: &str, rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(FeeError::InvalidFeeRate(format!(
            "{name} must be in [0, 1), got {rate}"
        )));
    }
    Ok(())
}
