use std::sync::Arc;
use std::time::Duration;

use log::debug;
use rust_decimal::Decimal;

use super::tariffs_errors::{Result, TariffError};
use super::tariffs_model::{TariffConfig, TariffProfile};
use super::tariffs_traits::DutyTableTrait;

/// Resolves a duty rate and a country-specific surcharge rate for a
/// classification code + origin country pair.
///
/// Pure lookup, no side effects. The profile is rebuilt on every call because
/// the underlying tariff data may change between requests.
pub struct TariffResolver {
    duty_table: Arc<dyn DutyTableTrait>,
    sales_tax_rate: Decimal,
    lookup_timeout: Duration,
}

impl TariffResolver {
    pub fn new(
        duty_table: Arc<dyn DutyTableTrait>,
        config: &TariffConfig,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            duty_table,
            sales_tax_rate: config.sales_tax_rate,
            lookup_timeout,
        }
    }

    pub async fn resolve(
        &self,
        classification_code: &str,
        origin_country: &str,
    ) -> Result<TariffProfile> {
        let duty = tokio::time::timeout(
            self.lookup_timeout,
            self.duty_table.lookup_duty(classification_code),
        )
        .await
        .map_err(|_| TariffError::LookupTimeout(format!("duty lookup for '{classification_code}'")))??
        .ok_or_else(|| TariffError::ClassificationNotFound(classification_code.to_string()))?;

        let surcharge = tokio::time::timeout(
            self.lookup_timeout,
            self.duty_table.lookup_country_surcharge(origin_country),
        )
        .await
        .map_err(|_| TariffError::LookupTimeout(format!("surcharge lookup for '{origin_country}'")))??;

        // No active surcharge row is a valid outcome, not an error.
        let additional_country_rate = surcharge.map(|row| row.rate).unwrap_or(Decimal::ZERO);

        debug!(
            "Resolved tariff for {}/{}: base {}, surcharge {}",
            classification_code, origin_country, duty.base_duty_rate, additional_country_rate
        );

        Ok(TariffProfile::new(
            duty.base_duty_rate,
            additional_country_rate,
            self.sales_tax_rate,
        ))
    }
}
