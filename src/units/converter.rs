//! Unit conversion functions
//!
//! Converts configured measurement units into the pounds and inches the
//! formulas expect.

use super::types::{LengthUnit, WeightUnit};

/// Convert a weight in the given unit to pounds
pub fn to_pounds(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Pound => value,
        other => value * other.pounds_per_unit(),
    }
}

/// Convert a length in the given unit to inches
pub fn to_inches(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value,
        other => value * other.inches_per_unit(),
    }
}
