// Module declarations
pub(crate) mod shipping_errors;
pub(crate) mod shipping_model;
pub(crate) mod shipping_repository;
pub(crate) mod shipping_service;
pub(crate) mod shipping_traits;

// Re-export the public interface
pub use shipping_model::ShippingPolicy;
pub use shipping_repository::InMemoryShippingCatalog;
pub use shipping_service::ShippingCatalogService;
pub use shipping_traits::ShippingCatalogTrait;

// Re-export error types for convenience
pub use shipping_errors::{Result, ShippingError};
