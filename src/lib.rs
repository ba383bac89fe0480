//! Body Fat Index (BFI) Library
//!
//! Body fat estimation from anthropometric measurements, with sex-specific
//! category classification.

pub mod build_info;
pub mod config;
pub mod error;
pub mod estimator;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod units;

pub use config::EstimatorConfig;
pub use error::{BodyFatError, BodyFatResult};
pub use estimator::{BodyFatEstimator, BodyFatReport};
pub use models::{Category, Measurements, Sex};
pub use units::{LengthUnit, WeightUnit};
