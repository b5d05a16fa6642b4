pub mod constants;
pub mod errors;

pub mod fees;
pub mod pricing;
pub mod shipping;
pub mod tariffs;

pub use errors::{Error, Result};
pub use pricing::*;
