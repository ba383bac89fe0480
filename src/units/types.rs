//! Unit types and conversion constants
//!
//! The body fat formulas are defined in pounds and inches, so only the units
//! that convert into those two are represented.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462262;
/// Pounds per stone
pub const LB_PER_STONE: f64 = 14.0;
/// Inches per meter
pub const IN_PER_M: f64 = 39.3700787;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

/// Unit a weight measurement is supplied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "st")]
    Stone,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Pound => "lb",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Stone => "st",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pound),
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kilogram),
            "st" | "stone" | "stones" => Some(WeightUnit::Stone),
            _ => None,
        }
    }

    /// Multiplier that converts a value in this unit to pounds
    pub fn pounds_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Pound => 1.0,
            WeightUnit::Kilogram => LB_PER_KG,
            WeightUnit::Stone => LB_PER_STONE,
        }
    }
}

/// Unit a length measurement is supplied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "in",
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" => Some(LengthUnit::Inch),
            "m" | "meter" | "meters" | "metre" | "metres" => Some(LengthUnit::Meter),
            "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
            _ => None,
        }
    }

    /// Multiplier that converts a value in this unit to inches
    pub fn inches_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Inch => 1.0,
            LengthUnit::Meter => IN_PER_M,
            LengthUnit::Foot => IN_PER_FT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_aliases() {
        assert_eq!(WeightUnit::from_str("lb"), Some(WeightUnit::Pound));
        assert_eq!(WeightUnit::from_str("LBS"), Some(WeightUnit::Pound));
        assert_eq!(WeightUnit::from_str("Kg"), Some(WeightUnit::Kilogram));
        assert_eq!(WeightUnit::from_str("stone"), Some(WeightUnit::Stone));
        assert_eq!(WeightUnit::from_str("g"), None);
    }

    #[test]
    fn test_length_unit_aliases() {
        assert_eq!(LengthUnit::from_str("in"), Some(LengthUnit::Inch));
        assert_eq!(LengthUnit::from_str("Metre"), Some(LengthUnit::Meter));
        assert_eq!(LengthUnit::from_str("feet"), Some(LengthUnit::Foot));
        assert_eq!(LengthUnit::from_str("cm"), None);
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for unit in [WeightUnit::Pound, WeightUnit::Kilogram, WeightUnit::Stone] {
            assert_eq!(WeightUnit::from_str(unit.as_str()), Some(unit));
        }
        for unit in [LengthUnit::Inch, LengthUnit::Meter, LengthUnit::Foot] {
            assert_eq!(LengthUnit::from_str(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_serde_uses_short_names() {
        assert_eq!(serde_json::to_string(&WeightUnit::Kilogram).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&LengthUnit::Foot).unwrap(), "\"ft\"");
        let unit: LengthUnit = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(unit, LengthUnit::Meter);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(WeightUnit::default(), WeightUnit::Pound);
        assert_eq!(LengthUnit::default(), LengthUnit::Inch);
    }
}
