use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A shipping-rate table entry.
///
/// The weight range is half-open: a policy covers `weight_range_min <= w <
/// weight_range_max`. A policy is usable for a listing only while the
/// provisional listing price stays at or under `price_ceiling` (marketplaces
/// cap refundable/insurable value per tier).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    pub policy_id: String,
    pub weight_range_min: f64,
    pub weight_range_max: f64,
    pub price_ceiling: Decimal,
    pub base_shipping_cost: Decimal,
    /// Base cost plus any fixed import-handling surcharge baked into the
    /// policy. Candidate ordering is by this value, ascending.
    pub total_shipping_cost: Decimal,
}

impl ShippingPolicy {
    pub fn covers_weight(&self, weight_kg: f64) -> bool {
        self.weight_range_min <= weight_kg && weight_kg < self.weight_range_max
    }
}
