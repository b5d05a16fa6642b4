use std::sync::Arc;
use std::time::Duration;

use log::debug;
use rust_decimal::Decimal;

use super::shipping_errors::{Result, ShippingError};
use super::shipping_model::ShippingPolicy;
use super::shipping_traits::ShippingCatalogTrait;

/// Accessor over the external shipping-rate table.
pub struct ShippingCatalogService {
    catalog: Arc<dyn ShippingCatalogTrait>,
    lookup_timeout: Duration,
}

impl ShippingCatalogService {
    pub fn new(catalog: Arc<dyn ShippingCatalogTrait>, lookup_timeout: Duration) -> Self {
        Self {
            catalog,
            lookup_timeout,
        }
    }

    async fn query(&self, weight_kg: f64, price_ceiling: Decimal) -> Result<Vec<ShippingPolicy>> {
        let mut policies = tokio::time::timeout(
            self.lookup_timeout,
            self.catalog.query_policies(weight_kg, price_ceiling),
        )
        .await
        .map_err(|_| {
            ShippingError::LookupTimeout(format!("policy query for {weight_kg} kg"))
        })??;
        // The trait promises ascending order; re-sorting stably keeps the
        // tie-break deterministic even when an implementation does not.
        policies.sort_by_key(|p| p.total_shipping_cost);
        Ok(policies)
    }

    /// Cheapest policy covering the weight whose price ceiling is at least
    /// `price_ceiling`. Ties go to the earliest catalog entry.
    pub async fn cheapest(
        &self,
        weight_kg: f64,
        price_ceiling: Decimal,
    ) -> Result<ShippingPolicy> {
        let policies = self.query(weight_kg, price_ceiling).await?;
        policies.into_iter().next().ok_or_else(|| {
            ShippingError::NoShippingPolicy(format!(
                "{weight_kg} kg with price ceiling {price_ceiling}"
            ))
        })
    }

    /// Re-queries with a price floor and returns the entry `skip` tiers above
    /// the cheapest, clamped to the last tier when the catalog is shallow.
    pub async fn escalate(
        &self,
        weight_kg: f64,
        price_floor: Decimal,
        skip: usize,
    ) -> Result<ShippingPolicy> {
        let policies = self.query(weight_kg, price_floor).await?;
        if policies.is_empty() {
            return Err(ShippingError::NoShippingPolicy(format!(
                "{weight_kg} kg with price floor {price_floor}"
            )));
        }
        let index = skip.min(policies.len() - 1);
        debug!(
            "Escalated shipping policy to tier {} of {} for {} kg",
            index,
            policies.len(),
            weight_kg
        );
        Ok(policies[index].clone())
    }
}
