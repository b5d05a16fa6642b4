use async_trait::async_trait;
use rust_decimal::Decimal;

use super::shipping_errors::Result;
use super::shipping_model::ShippingPolicy;

/// Trait defining the contract for the external shipping-rate table.
#[async_trait]
pub trait ShippingCatalogTrait: Send + Sync {
    /// Returns every policy whose weight range contains `weight_kg` and whose
    /// price ceiling is at least `price_ceiling`, ordered ascending by total
    /// shipping cost with ties in catalog order.
    async fn query_policies(
        &self,
        weight_kg: f64,
        price_ceiling: Decimal,
    ) -> Result<Vec<ShippingPolicy>>;
}
