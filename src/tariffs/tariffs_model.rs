use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A dot-delimited hierarchical commodity code. The 2/4/6-digit prefixes
/// address chapter, heading and subheading respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCode(String);

impl ClassificationCode {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_string())
    }

    /// Digits only, dots stripped. Lookups compare normalized forms.
    pub fn normalized(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn chapter(&self) -> String {
        self.normalized().chars().take(2).collect()
    }

    pub fn heading(&self) -> String {
        self.normalized().chars().take(4).collect()
    }

    pub fn subheading(&self) -> String {
        self.normalized().chars().take(6).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A row of the external duty table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyRecord {
    pub classification_code: String,
    pub base_duty_rate: Decimal,
    pub description: Option<String>,
}

/// A country-specific additional tariff row. Absence of an active row for a
/// country is valid, not exceptional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySurcharge {
    pub country_code: String,
    pub rate: Decimal,
    pub active: bool,
}

/// Resolved duty facts for one request. Recomputed per request, never cached
/// across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffProfile {
    pub base_duty_rate: Decimal,
    pub additional_country_rate: Decimal,
    pub sales_tax_rate: Decimal,
    pub effective_ad_valorem_rate: Decimal,
}

impl TariffProfile {
    pub fn new(
        base_duty_rate: Decimal,
        additional_country_rate: Decimal,
        sales_tax_rate: Decimal,
    ) -> Self {
        Self {
            base_duty_rate,
            additional_country_rate,
            sales_tax_rate,
            effective_ad_valorem_rate: base_duty_rate + additional_country_rate + sales_tax_rate,
        }
    }
}

/// Tariff-regime constants injected into the pricing service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffConfig {
    /// Import sales tax applied ad valorem at the border, if the destination
    /// jurisdiction levies one
    pub sales_tax_rate: Decimal,
    /// Ad-valorem merchandise processing rate charged on the goods value
    pub merchandise_processing_rate: Decimal,
    /// Flat import-handling fee per shipment
    pub fixed_import_fee: Decimal,
    /// Tax-inclusive consumption tax rate of the sourcing jurisdiction, used
    /// for the export refund estimate
    pub consumption_tax_rate: Decimal,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            sales_tax_rate: Decimal::ZERO,
            merchandise_processing_rate: dec!(0.003464),
            fixed_import_fee: dec!(3.00),
            consumption_tax_rate: dec!(0.10),
        }
    }
}
