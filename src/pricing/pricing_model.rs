use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::fees::StoreTier;

/// Immutable pricing request.
///
/// `sourcing_cost_minor` is in minor units of the source currency; `fx_rate`
/// is units of source currency per unit of target currency, supplied by the
/// caller rather than fetched here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub sourcing_cost_minor: i64,
    pub weight_kg: f64,
    pub target_margin_fraction: Decimal,
    pub classification_code: String,
    pub origin_country: String,
    pub store_tier: StoreTier,
    pub base_commission_rate: Decimal,
    pub fx_rate: Decimal,
}

impl PricingRequest {
    /// Validates the request before any lookup runs
    pub fn validate(&self) -> Result<()> {
        if self.sourcing_cost_minor <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Sourcing cost must be positive".to_string(),
            )));
        }
        if self.weight_kg <= 0.0 || !self.weight_kg.is_finite() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Weight must be a positive finite number of kilograms".to_string(),
            )));
        }
        if self.target_margin_fraction <= Decimal::ZERO
            || self.target_margin_fraction >= Decimal::ONE
        {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target margin must be strictly between 0 and 1".to_string(),
            )));
        }
        if self.base_commission_rate < Decimal::ZERO || self.base_commission_rate >= Decimal::ONE {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Base commission rate must be in [0, 1)".to_string(),
            )));
        }
        if self.fx_rate <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "FX rate must be positive".to_string(),
            )));
        }
        if self.classification_code.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "classificationCode".to_string(),
            )));
        }
        if self.origin_country.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "originCountry".to_string(),
            )));
        }
        Ok(())
    }

    /// Sourcing cost converted to the target currency
    pub fn sourcing_cost(&self) -> Decimal {
        (Decimal::from(self.sourcing_cost_minor) / self.fx_rate).round_dp(DECIMAL_PRECISION)
    }
}

/// Per-component fee amounts, each re-derived from the final total revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub commission: Decimal,
    pub payment_processing: Decimal,
    pub fx_buffer: Decimal,
    pub cross_border: Decimal,
    pub fixed_listing_fee: Decimal,
}

/// Final landed-cost breakdown for one request.
///
/// Constructed once by the assembler and never mutated. A negative-profit
/// outcome is still fully populated, with `success = false` and the reason
/// recorded; callers may need the breakdown to diagnose the loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub request_id: Uuid,
    pub priced_at: DateTime<Utc>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Set when the solver hit its iteration bound before reaching the
    /// convergence tolerance; the result is still usable.
    pub precision_warning: bool,
    pub iterations: u32,
    pub listing_price: Decimal,
    pub shipping_total: Decimal,
    pub total_revenue: Decimal,
    pub shipping_policy_id: String,
    pub effective_ad_valorem_rate: Decimal,
    pub duty_amount: Decimal,
    pub import_fee_amount: Decimal,
    pub fixed_import_fee: Decimal,
    pub fee_breakdown: FeeBreakdown,
    pub total_cost: Decimal,
    pub profit: Decimal,
    pub realized_margin_fraction: Decimal,
    pub tax_refund_estimate: Decimal,
    pub profit_after_refund: Decimal,
}
