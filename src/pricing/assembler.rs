use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::fees::FeeProfile;
use crate::shipping::ShippingPolicy;
use crate::tariffs::TariffProfile;

use super::price_solver::SolverOutcome;
use super::pricing_model::{FeeBreakdown, PricingResult};

pub(crate) struct AssemblyInputs<'a> {
    pub sourcing_cost: Decimal,
    pub tariff: &'a TariffProfile,
    pub fees: &'a FeeProfile,
    pub policy: &'a ShippingPolicy,
    pub merchandise_processing_rate: Decimal,
    pub fixed_import_fee: Decimal,
    pub consumption_tax_rate: Decimal,
}

/// Builds the final breakdown from the converged price.
///
/// Every line re-derives from `listing_price` and `total_revenue` rather than
/// being carried over from intermediate solver state, so the output can be
/// audited line by line. A negative profit does not discard the breakdown; it
/// only flips `success` and records the reason.
pub(crate) fn assemble(inputs: &AssemblyInputs<'_>, outcome: &SolverOutcome) -> PricingResult {
    let listing_price = outcome.listing_price;
    let shipping_total = inputs.policy.total_shipping_cost;
    let total_revenue = listing_price + shipping_total;

    let duty_amount = round_money(listing_price * inputs.tariff.effective_ad_valorem_rate);
    let import_fee_amount = round_money(listing_price * inputs.merchandise_processing_rate);
    let fixed_import_fee = round_money(inputs.fixed_import_fee);

    let fee_breakdown = FeeBreakdown {
        commission: round_money(total_revenue * inputs.fees.effective_commission_rate),
        payment_processing: round_money(total_revenue * inputs.fees.payment_processing_rate),
        fx_buffer: round_money(total_revenue * inputs.fees.fx_buffer_rate),
        cross_border: round_money(total_revenue * inputs.fees.cross_border_surcharge_rate),
        fixed_listing_fee: round_money(inputs.fees.fixed_listing_fee),
    };

    let sourcing_cost = round_money(inputs.sourcing_cost);
    let total_cost = sourcing_cost
        + round_money(inputs.policy.base_shipping_cost)
        + duty_amount
        + import_fee_amount
        + fixed_import_fee
        + fee_breakdown.commission
        + fee_breakdown.payment_processing
        + fee_breakdown.fx_buffer
        + fee_breakdown.cross_border
        + fee_breakdown.fixed_listing_fee;
    let profit = total_revenue - total_cost;

    let realized_margin_fraction = if total_revenue > Decimal::ZERO {
        (profit / total_revenue).round_dp(DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    // Export refund on domestically taxed outlays, tax-inclusive formula.
    let taxable = inputs.sourcing_cost + fee_breakdown.commission + fee_breakdown.fixed_listing_fee;
    let tax_refund_estimate = round_money(
        taxable * (inputs.consumption_tax_rate / (Decimal::ONE + inputs.consumption_tax_rate)),
    );
    let profit_after_refund = profit + tax_refund_estimate;

    let (success, rejection_reason) = if profit < Decimal::ZERO {
        (
            false,
            Some(format!(
                "Realized margin {realized_margin_fraction} fails to clear zero profit (profit {profit})"
            )),
        )
    } else {
        (true, None)
    };

    PricingResult {
        request_id: Uuid::new_v4(),
        priced_at: Utc::now(),
        success,
        rejection_reason,
        precision_warning: !outcome.converged,
        iterations: outcome.iterations,
        listing_price,
        shipping_total,
        total_revenue,
        shipping_policy_id: inputs.policy.policy_id.clone(),
        effective_ad_valorem_rate: inputs.tariff.effective_ad_valorem_rate,
        duty_amount,
        import_fee_amount,
        fixed_import_fee,
        fee_breakdown,
        total_cost,
        profit,
        realized_margin_fraction,
        tax_refund_estimate,
        profit_after_refund,
    }
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
