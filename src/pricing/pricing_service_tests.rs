#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::fees::{FeeConfig, StoreTier};
    use crate::pricing::{
        EscalationPolicy, LookupConfig, PricingError, PricingRequest, PricingService,
        PricingServiceTrait, SolverConfig,
    };
    use crate::shipping::{InMemoryShippingCatalog, ShippingError, ShippingPolicy};
    use crate::tariffs::{
        CountrySurcharge, DutyRecord, DutyTableTrait, InMemoryDutyTable, TariffConfig, TariffError,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::time::Duration;

    fn duty_table() -> Arc<InMemoryDutyTable> {
        Arc::new(InMemoryDutyTable::new(
            vec![DutyRecord {
                classification_code: "3926.20".to_string(),
                base_duty_rate: dec!(0.05),
                description: Some("Plastic apparel accessories".to_string()),
            }],
            vec![CountrySurcharge {
                country_code: "CN".to_string(),
                rate: dec!(0.075),
                active: true,
            }],
        ))
    }

    fn policy(id: &str, ceiling: Decimal, base: Decimal, total: Decimal) -> ShippingPolicy {
        ShippingPolicy {
            policy_id: id.to_string(),
            weight_range_min: 0.0,
            weight_range_max: 1.0,
            price_ceiling: ceiling,
            base_shipping_cost: base,
            total_shipping_cost: total,
        }
    }

    fn tiered_catalog() -> Arc<InMemoryShippingCatalog> {
        Arc::new(InMemoryShippingCatalog::new(vec![
            policy("light-a", dec!(60), dec!(7.00), dec!(8.20)),
            policy("light-b", dec!(200), dec!(7.63), dec!(9.50)),
            policy("light-c", dec!(300), dec!(9.00), dec!(11.00)),
        ]))
    }

    fn request() -> PricingRequest {
        PricingRequest {
            sourcing_cost_minor: 1000,
            weight_kg: 0.5,
            target_margin_fraction: dec!(0.20),
            classification_code: "3926.20".to_string(),
            origin_country: "CN".to_string(),
            store_tier: StoreTier::Basic,
            base_commission_rate: dec!(0.129),
            fx_rate: dec!(150),
        }
    }

    #[tokio::test]
    async fn example_scenario_hits_the_target_margin() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let result = service.price_listing(request()).await.unwrap();

        assert!(result.success);
        assert!(result.rejection_reason.is_none());
        assert!(!result.precision_warning);

        // Price snapped to the merchandising step
        assert_eq!(result.listing_price, dec!(25));
        assert_eq!(result.listing_price % dec!(5), Decimal::ZERO);

        // Final policy is one tier above the cheapest eligible one
        assert_eq!(result.shipping_policy_id, "light-b");
        assert_eq!(result.shipping_total, dec!(9.50));
        assert_eq!(result.total_revenue, result.listing_price + result.shipping_total);

        // Duty derives from the converged price, not the seed
        assert_eq!(result.effective_ad_valorem_rate, dec!(0.125));
        assert_eq!(result.duty_amount, dec!(3.13));
        assert_eq!(result.import_fee_amount, dec!(0.09));

        let target = dec!(0.20);
        assert!(
            (result.realized_margin_fraction - target).abs() < dec!(0.01),
            "realized margin {} too far from target",
            result.realized_margin_fraction
        );
        assert!(result.profit > Decimal::ZERO);
        assert!(result.tax_refund_estimate > Decimal::ZERO);
        assert_eq!(
            result.profit_after_refund,
            result.profit + result.tax_refund_estimate
        );
    }

    #[tokio::test]
    async fn breakdown_lines_sum_to_total_cost() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let result = service.price_listing(request()).await.unwrap();

        let fees = &result.fee_breakdown;
        let fee_sum = fees.commission
            + fees.payment_processing
            + fees.fx_buffer
            + fees.cross_border
            + fees.fixed_listing_fee;
        let duty_sum = result.duty_amount + result.import_fee_amount + result.fixed_import_fee;
        // Remaining lines are sourcing cost and base shipping cost
        let remainder = result.total_cost - fee_sum - duty_sum;
        assert_eq!(remainder, dec!(6.67) + dec!(7.63));
        assert_eq!(result.profit, result.total_revenue - result.total_cost);
    }

    #[tokio::test]
    async fn loss_making_request_returns_full_breakdown_without_discarding() {
        let catalog = Arc::new(InMemoryShippingCatalog::new(vec![policy(
            "micro",
            dec!(50),
            dec!(0.50),
            dec!(1.20),
        )]));
        let service = PricingService::new(duty_table(), catalog).unwrap();

        // Tiny sourcing cost and a 1% target: the $5 snap drags the listing
        // price far enough below the converged value to wipe out the profit.
        let result = service
            .price_listing(PricingRequest {
                sourcing_cost_minor: 300,
                target_margin_fraction: dec!(0.01),
                ..request()
            })
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.rejection_reason.is_some());
        assert!(result.profit < Decimal::ZERO);
        assert!(result.realized_margin_fraction < Decimal::ZERO);

        // Still internally consistent and fully populated
        assert_eq!(result.listing_price, dec!(5));
        assert_eq!(
            result.total_revenue,
            result.listing_price + result.shipping_total
        );
        assert_eq!(result.profit, result.total_revenue - result.total_cost);
        assert!(result.duty_amount > Decimal::ZERO);
        assert!(result.fee_breakdown.commission > Decimal::ZERO);
    }

    #[tokio::test]
    async fn unreachable_margin_fails_before_any_price_is_produced() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let err = service
            .price_listing(PricingRequest {
                target_margin_fraction: dec!(0.85),
                ..request()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Pricing(PricingError::UnsatisfiableMargin { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_classification_code_surfaces_not_found() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let err = service
            .price_listing(PricingRequest {
                classification_code: "9999.99".to_string(),
                ..request()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Tariff(TariffError::ClassificationNotFound(_))
        ));
    }

    #[tokio::test]
    async fn uncovered_weight_surfaces_no_shipping_policy() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let err = service
            .price_listing(PricingRequest {
                weight_kg: 9.0,
                ..request()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Shipping(ShippingError::NoShippingPolicy(_))
        ));
    }

    #[tokio::test]
    async fn invalid_request_is_rejected_before_lookups() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let err = service
            .price_listing(PricingRequest {
                weight_kg: 0.0,
                ..request()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn shallow_catalog_clamps_escalation_to_the_only_tier() {
        let catalog = Arc::new(InMemoryShippingCatalog::new(vec![policy(
            "only",
            dec!(200),
            dec!(7.63),
            dec!(9.50),
        )]));
        let service = PricingService::new(duty_table(), catalog).unwrap();
        let result = service.price_listing(request()).await.unwrap();
        assert!(result.success);
        assert_eq!(result.shipping_policy_id, "only");
    }

    #[tokio::test]
    async fn result_serializes_with_camel_case_keys() {
        let service = PricingService::new(duty_table(), tiered_catalog()).unwrap();
        let result = service.price_listing(request()).await.unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("listingPrice").is_some());
        assert!(value.get("realizedMarginFraction").is_some());
        assert!(value.get("feeBreakdown").is_some());
        assert!(value["feeBreakdown"].get("paymentProcessing").is_some());
        // Absent on success, not serialized as null
        assert!(value.get("rejectionReason").is_none());
    }

    struct SlowDutyTable;

    #[async_trait::async_trait]
    impl DutyTableTrait for SlowDutyTable {
        async fn lookup_duty(
            &self,
            _classification_code: &str,
        ) -> crate::tariffs::Result<Option<DutyRecord>> {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(Some(DutyRecord {
                classification_code: "3926.20".to_string(),
                base_duty_rate: dec!(0.05),
                description: None,
            }))
        }

        async fn lookup_country_surcharge(
            &self,
            _country_code: &str,
        ) -> crate::tariffs::Result<Option<CountrySurcharge>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn slow_duty_table_surfaces_lookup_timeout() {
        let service = PricingService::with_config(
            Arc::new(SlowDutyTable),
            tiered_catalog(),
            FeeConfig::default(),
            TariffConfig::default(),
            SolverConfig::default(),
            EscalationPolicy::default(),
            LookupConfig {
                lookup_timeout: Duration::from_millis(5),
            },
        )
        .unwrap();

        let err = service.price_listing(request()).await.unwrap_err();
        assert!(matches!(err, Error::Tariff(TariffError::LookupTimeout(_))));
    }

    #[tokio::test]
    async fn wider_escalation_policy_reaches_a_higher_tier() {
        let service = PricingService::with_config(
            duty_table(),
            tiered_catalog(),
            FeeConfig::default(),
            TariffConfig::default(),
            SolverConfig::default(),
            EscalationPolicy { tiers_above: 2 },
            LookupConfig::default(),
        )
        .unwrap();
        let result = service.price_listing(request()).await.unwrap();
        assert_eq!(result.shipping_policy_id, "light-c");
    }
}
