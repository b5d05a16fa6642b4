use async_trait::async_trait;
use rust_decimal::Decimal;

use super::shipping_errors::Result;
use super::shipping_model::ShippingPolicy;
use super::shipping_traits::ShippingCatalogTrait;

/// Shipping catalog backed by in-memory rows, for embedding and tests.
///
/// Rows keep their seeded order, which is what breaks total-cost ties.
pub struct InMemoryShippingCatalog {
    policies: Vec<ShippingPolicy>,
}

impl InMemoryShippingCatalog {
    pub fn new(policies: Vec<ShippingPolicy>) -> Self {
        Self { policies }
    }
}

#[async_trait]
impl ShippingCatalogTrait for InMemoryShippingCatalog {
    async fn query_policies(
        &self,
        weight_kg: f64,
        price_ceiling: Decimal,
    ) -> Result<Vec<ShippingPolicy>> {
        let mut candidates: Vec<ShippingPolicy> = self
            .policies
            .iter()
            .filter(|p| p.covers_weight(weight_kg) && p.price_ceiling >= price_ceiling)
            .cloned()
            .collect();
        // Stable: equal costs stay in catalog order.
        candidates.sort_by_key(|p| p.total_shipping_cost);
        Ok(candidates)
    }
}
