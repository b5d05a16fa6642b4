use async_trait::async_trait;

use super::tariffs_model::{CountrySurcharge, DutyRecord};
use super::tariffs_errors::Result;

/// Trait defining the contract for the external duty table.
///
/// Lookups are exact-match on the classification code; expanding a partial
/// code to a full one belongs to the classification service upstream.
#[async_trait]
pub trait DutyTableTrait: Send + Sync {
    async fn lookup_duty(&self, classification_code: &str) -> Result<Option<DutyRecord>>;
    async fn lookup_country_surcharge(&self, country_code: &str)
        -> Result<Option<CountrySurcharge>>;
}
