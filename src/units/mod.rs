//! Measurement units
//!
//! Weight and length units accepted by the estimator and their conversions.

pub mod converter;
pub mod types;

pub use converter::{to_inches, to_pounds};
pub use types::{LengthUnit, WeightUnit, IN_PER_FT, IN_PER_M, LB_PER_KG, LB_PER_STONE};
