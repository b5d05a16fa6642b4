use async_trait::async_trait;

use super::tariffs_errors::Result;
use super::tariffs_model::{ClassificationCode, CountrySurcharge, DutyRecord};
use super::tariffs_traits::DutyTableTrait;

/// Duty table backed by in-memory rows, for embedding and tests.
///
/// Production deployments implement [`DutyTableTrait`] against whatever
/// service owns the tariff data.
pub struct InMemoryDutyTable {
    duties: Vec<DutyRecord>,
    surcharges: Vec<CountrySurcharge>,
}

impl InMemoryDutyTable {
    pub fn new(duties: Vec<DutyRecord>, surcharges: Vec<CountrySurcharge>) -> Self {
        Self { duties, surcharges }
    }
}

#[async_trait]
impl DutyTableTrait for InMemoryDutyTable {
    async fn lookup_duty(&self, classification_code: &str) -> Result<Option<DutyRecord>> {
        let wanted = ClassificationCode::new(classification_code).normalized();
        Ok(self
            .duties
            .iter()
            .find(|row| ClassificationCode::new(&row.classification_code).normalized() == wanted)
            .cloned())
    }

    async fn lookup_country_surcharge(
        &self,
        country_code: &str,
    ) -> Result<Option<CountrySurcharge>> {
        Ok(self
            .surcharges
            .iter()
            .find(|row| row.active && row.country_code.eq_ignore_ascii_case(country_code))
            .cloned())
    }
}
