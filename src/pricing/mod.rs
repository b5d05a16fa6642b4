// Module declarations
pub(crate) mod assembler;
pub(crate) mod price_solver;
pub(crate) mod pricing_errors;
pub(crate) mod pricing_model;
pub(crate) mod pricing_service;

#[cfg(test)]
mod pricing_service_tests;

// Re-export the public interface
pub use price_solver::{PriceSolver, SolverConfig};
pub use pricing_model::{FeeBreakdown, PricingRequest, PricingResult};
pub use pricing_service::{EscalationPolicy, LookupConfig, PricingService, PricingServiceTrait};

// Re-export error types for convenience
pub use pricing_errors::PricingError;
