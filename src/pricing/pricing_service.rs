use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOOKUP_TIMEOUT_SECS;
use crate::errors::Result;
use crate::fees::{FeeConfig, FeeModel};
use crate::shipping::{ShippingCatalogService, ShippingCatalogTrait};
use crate::tariffs::{DutyTableTrait, TariffConfig, TariffResolver};

use super::assembler::{assemble, AssemblyInputs};
use super::price_solver::{PriceSolver, SolverConfig, SolverInputs};
use super::pricing_errors::PricingError;
use super::pricing_model::{PricingRequest, PricingResult};

/// How far above the cheapest eligible shipping tier the final listing sits.
///
/// One tier above cheapest trades a small shipping-cost increase for headroom
/// against price growth in the re-solve; it encodes a business risk
/// tolerance, not a mathematical necessity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationPolicy {
    pub tiers_above: usize,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self { tiers_above: 1 }
    }
}

/// Timeout applied to each external table lookup
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub lookup_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

/// Trait defining the contract for pricing service operations.
#[async_trait]
pub trait PricingServiceTrait: Send + Sync {
    async fn price_listing(&self, request: PricingRequest) -> Result<PricingResult>;
}

/// Margin-targeted landed-price service.
///
/// Stateless across invocations: every request resolves its tariff and
/// shipping facts fresh, because the underlying tables may change between
/// calls. Concurrent requests are fully independent.
pub struct PricingService {
    tariff_resolver: TariffResolver,
    shipping_catalog: ShippingCatalogService,
    fee_model: FeeModel,
    solver: PriceSolver,
    tariff_config: TariffConfig,
    escalation: EscalationPolicy,
}

impl PricingService {
    pub fn new(
        duty_table: Arc<dyn DutyTableTrait>,
        shipping_catalog: Arc<dyn ShippingCatalogTrait>,
    ) -> Result<Self> {
        Self::with_config(
            duty_table,
            shipping_catalog,
            FeeConfig::default(),
            TariffConfig::default(),
            SolverConfig::default(),
            EscalationPolicy::default(),
            LookupConfig::default(),
        )
    }

    pub fn with_config(
        duty_table: Arc<dyn DutyTableTrait>,
        shipping_catalog: Arc<dyn ShippingCatalogTrait>,
        fee_config: FeeConfig,
        tariff_config: TariffConfig,
        solver_config: SolverConfig,
        escalation: EscalationPolicy,
        lookup: LookupConfig,
    ) -> Result<Self> {
        let fee_model = FeeModel::new(fee_config)?;
        Ok(Self {
            tariff_resolver: TariffResolver::new(
                duty_table,
                &tariff_config,
                lookup.lookup_timeout,
            ),
            shipping_catalog: ShippingCatalogService::new(shipping_catalog, lookup.lookup_timeout),
            fee_model,
            solver: PriceSolver::new(solver_config),
            tariff_config,
            escalation,
        })
    }
}

#[async_trait]
impl PricingServiceTrait for PricingService {
    async fn price_listing(&self, request: PricingRequest) -> Result<PricingResult> {
        request.validate()?;

        let sourcing_cost = request.sourcing_cost();
        let fees = self
            .fee_model
            .profile(request.base_commission_rate, request.store_tier)?;

        // Fail before any table lookup when the margin is unreachable; the
        // variable rate does not change during the solve.
        let variable_rate = fees.variable_rate();
        let headroom = Decimal::ONE - request.target_margin_fraction - variable_rate;
        if headroom <= Decimal::ZERO {
            return Err(PricingError::UnsatisfiableMargin {
                target_margin: request.target_margin_fraction,
                variable_rate,
            }
            .into());
        }

        let tariff = self
            .tariff_resolver
            .resolve(&request.classification_code, &request.origin_country)
            .await?;

        // First-pass price ceiling: required revenue ignoring duties and
        // shipping, a deterministic lower bound on where the solve lands.
        let ceiling_estimate =
            (sourcing_cost + fees.fixed_listing_fee + self.tariff_config.fixed_import_fee)
                / headroom;
        let cheapest = self
            .shipping_catalog
            .cheapest(request.weight_kg, ceiling_estimate)
            .await?;
        debug!(
            "Provisional shipping policy {} (total cost {})",
            cheapest.policy_id, cheapest.total_shipping_cost
        );

        let provisional = self.solver.solve(
            &SolverInputs {
                sourcing_cost,
                target_margin: request.target_margin_fraction,
                tariff: &tariff,
                fees: &fees,
                policy: &cheapest,
                merchandise_processing_rate: self.tariff_config.merchandise_processing_rate,
                fixed_import_fee: self.tariff_config.fixed_import_fee,
            },
            None,
        )?;

        let escalated = self
            .shipping_catalog
            .escalate(
                request.weight_kg,
                provisional.listing_price,
                self.escalation.tiers_above,
            )
            .await?;
        debug!(
            "Escalated shipping policy {} (total cost {}) from provisional price {}",
            escalated.policy_id, escalated.total_shipping_cost, provisional.listing_price
        );

        let outcome = self.solver.solve(
            &SolverInputs {
                sourcing_cost,
                target_margin: request.target_margin_fraction,
                tariff: &tariff,
                fees: &fees,
                policy: &escalated,
                merchandise_processing_rate: self.tariff_config.merchandise_processing_rate,
                fixed_import_fee: self.tariff_config.fixed_import_fee,
            },
            Some(provisional.listing_price),
        )?;

        let result = assemble(
            &AssemblyInputs {
                sourcing_cost,
                tariff: &tariff,
                fees: &fees,
                policy: &escalated,
                merchandise_processing_rate: self.tariff_config.merchandise_processing_rate,
                fixed_import_fee: self.tariff_config.fixed_import_fee,
                consumption_tax_rate: self.tariff_config.consumption_tax_rate,
            },
            &outcome,
        );

        if !result.success {
            warn!(
                "Pricing request {} rejected: {}",
                result.request_id,
                result
                    .rejection_reason
                    .as_deref()
                    .unwrap_or("no reason recorded")
            );
        }

        Ok(result)
    }
}
