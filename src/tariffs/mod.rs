// Module declarations
pub(crate) mod tariffs_errors;
pub(crate) mod tariffs_model;
pub(crate) mod tariffs_repository;
pub(crate) mod tariffs_service;
pub(crate) mod tariffs_traits;

// Re-export the public interface
pub use tariffs_model::{ClassificationCode, CountrySurcharge, DutyRecord, TariffConfig, TariffProfile};
pub use tariffs_repository::InMemoryDutyTable;
pub use tariffs_service::TariffResolver;
pub use tariffs_traits::DutyTableTrait;

// Re-export error types for convenience
pub use tariffs_errors::{Result, TariffError};
