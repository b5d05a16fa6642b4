use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::PRICE_ROUNDING_STEP;
use crate::fees::FeeProfile;
use crate::shipping::ShippingPolicy;
use crate::tariffs::TariffProfile;

use super::pricing_errors::PricingError;

/// Named solver constants, injectable so they can be tested independently of
/// the business data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// First-pass listing price when no earlier solve is available
    pub seed_price: Decimal,
    /// Safety terminator, not a correctness requirement
    pub max_iterations: u32,
    pub convergence_tolerance: Decimal,
    /// Converged prices snap to the nearest multiple of this step
    pub rounding_step: Decimal,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed_price: dec!(100),
            max_iterations: 10,
            convergence_tolerance: dec!(0.01),
            rounding_step: PRICE_ROUNDING_STEP,
        }
    }
}

/// Everything the fixed-point iteration needs, resolved before it runs
#[derive(Debug, Clone)]
pub(crate) struct SolverInputs<'a> {
    pub sourcing_cost: Decimal,
    pub target_margin: Decimal,
    pub tariff: &'a TariffProfile,
    pub fees: &'a FeeProfile,
    pub policy: &'a ShippingPolicy,
    pub merchandise_processing_rate: Decimal,
    pub fixed_import_fee: Decimal,
}

#[derive(Debug, Clone)]
pub(crate) struct SolverOutcome {
    /// Converged price, rounded to the configured step
    pub listing_price: Decimal,
    pub iterations: u32,
    pub converged: bool,
}

/// Fixed-point solver for the margin identity.
///
/// Duty is charged on the listing price while marketplace fees are charged on
/// total revenue, and both feed back into the price, so there is no one-shot
/// inverse. Each pass recomputes the duty-laden fixed cost at the current
/// price and re-derives the revenue the target margin requires; the duty
/// share of price is small, so the correction shrinks every pass.
pub struct PriceSolver {
    config: SolverConfig,
}

impl PriceSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub(crate) fn solve(
        &self,
        inputs: &SolverInputs<'_>,
        seed: Option<Decimal>,
    ) -> Result<SolverOutcome, PricingError> {
        let variable_rate = inputs.fees.variable_rate();
        let headroom = Decimal::ONE - inputs.target_margin - variable_rate;
        if headroom <= Decimal::ZERO {
            return Err(PricingError::UnsatisfiableMargin {
                target_margin: inputs.target_margin,
                variable_rate,
            });
        }

        let mut price = seed.unwrap_or(self.config.seed_price);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            iterations += 1;
            let import_variable_cost = price * inputs.tariff.effective_ad_valorem_rate
                + price * inputs.merchandise_processing_rate
                + inputs.fixed_import_fee;
            let fixed_cost = inputs.sourcing_cost
                + inputs.policy.base_shipping_cost
                + import_variable_cost
                + inputs.fees.fixed_listing_fee;
            let required_revenue = fixed_cost / headroom;
            let next = required_revenue - inputs.policy.total_shipping_cost;

            let delta = (next - price).abs();
            debug!(
                "Solver pass {}: price {} -> {} (delta {})",
                iterations, price, next, delta
            );
            price = next;
            if delta < self.config.convergence_tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "Price solve hit the {}-iteration bound at price {} without reaching tolerance {}",
                self.config.max_iterations, price, self.config.convergence_tolerance
            );
        }

        Ok(SolverOutcome {
            listing_price: self.round_to_step(price),
            iterations,
            converged,
        })
    }

    /// Rounds to the nearest multiple of the configured step, half up
    pub fn round_to_step(&self, price: Decimal) -> Decimal {
        (price / self.config.rounding_step)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            * self.config.rounding_step
    }
}

impl Default for PriceSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
