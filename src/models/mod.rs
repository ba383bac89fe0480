//! Data models
//!
//! Measurement input and category classification.

mod category;
mod measurements;

pub use category::{Category, CategoryThresholds, FEMALE_THRESHOLDS, MALE_THRESHOLDS};
pub use measurements::{FemaleGirths, Measurements, Sex};
