// Module declarations
pub(crate) mod fees_constants;
pub(crate) mod fees_errors;
pub(crate) mod fees_model;
pub(crate) mod fees_service;

// Re-export the public interface
pub use fees_constants::*;
pub use fees_model::{FeeConfig, FeeProfile, StoreTier};
pub use fees_service::FeeModel;

// Re-export error types for convenience
pub use fees_errors::{FeeError, Result};
