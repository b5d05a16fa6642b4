use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fees_constants::{
    ANCHOR_TIER_DISCOUNT, BASIC_TIER_DISCOUNT, DEFAULT_CROSS_BORDER_SURCHARGE_RATE,
    DEFAULT_FIXED_LISTING_FEE, DEFAULT_FX_BUFFER_RATE, DEFAULT_PAYMENT_PROCESSING_RATE,
    ENTERPRISE_TIER_DISCOUNT, PREMIUM_TIER_DISCOUNT, STARTER_TIER_DISCOUNT,
};

/// Marketplace store subscription level, granting a commission discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreTier {
    Starter,
    Basic,
    Premium,
    Anchor,
    Enterprise,
}

/// Injected fee-rate configuration. Jurisdiction and commission changes live
/// here, not in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    pub payment_processing_rate: Decimal,
    pub fx_buffer_rate: Decimal,
    pub cross_border_surcharge_rate: Decimal,
    pub fixed_listing_fee: Decimal,
    pub store_tier_discounts: HashMap<StoreTier, Decimal>,
}

impl FeeConfig {
    pub fn store_tier_discount(&self, tier: StoreTier) -> Decimal {
        self.store_tier_discounts
            .get(&tier)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        let store_tier_discounts = HashMap::from([
            (StoreTier::Starter, STARTER_TIER_DISCOUNT),
            (StoreTier::Basic, BASIC_TIER_DISCOUNT),
            (StoreTier::Premium, PREMIUM_TIER_DISCOUNT),
            (StoreTier::Anchor, ANCHOR_TIER_DISCOUNT),
            (StoreTier::Enterprise, ENTERPRISE_TIER_DISCOUNT),
        ]);
        Self {
            payment_processing_rate: DEFAULT_PAYMENT_PROCESSING_RATE,
            fx_buffer_rate: DEFAULT_FX_BUFFER_RATE,
            cross_border_surcharge_rate: DEFAULT_CROSS_BORDER_SURCHARGE_RATE,
            fixed_listing_fee: DEFAULT_FIXED_LISTING_FEE,
            store_tier_discounts,
        }
    }
}

/// Resolved fee rates for one request. Every rate is a fraction of total
/// revenue except `fixed_listing_fee`, which is flat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeProfile {
    pub effective_commission_rate: Decimal,
    pub payment_processing_rate: Decimal,
    pub fx_buffer_rate: Decimal,
    pub cross_border_surcharge_rate: Decimal,
    pub fixed_listing_fee: Decimal,
}

impl FeeProfile {
    /// Aggregate revenue-proportional rate
    pub fn variable_rate(&self) -> Decimal {
        self.effective_commission_rate
            + self.payment_processing_rate
            + self.fx_buffer_rate
            + self.cross_border_surcharge_rate
    }
}
