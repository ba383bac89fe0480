//! Estimator configuration
//!
//! Selects the units in which weight and length measurements are supplied.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BodyFatError, BodyFatResult};
use crate::units::{LengthUnit, WeightUnit};

pub const WEIGHT_UNIT_KEY: &str = "weight_unit";
pub const LENGTH_UNIT_KEY: &str = "length_unit";

pub const WEIGHT_UNIT_ENV: &str = "BFI_WEIGHT_UNIT";
pub const LENGTH_UNIT_ENV: &str = "BFI_LENGTH_UNIT";

/// Input units for an estimator. Defaults to pounds and inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimatorConfig {
    pub weight_unit: WeightUnit,
    pub length_unit: LengthUnit,
}

impl EstimatorConfig {
    pub fn new(weight_unit: WeightUnit, length_unit: LengthUnit) -> Self {
        Self {
            weight_unit,
            length_unit,
        }
    }

    /// Validate an untyped configuration object
    ///
    /// The object must contain exactly `weight_unit` and `length_unit`, each
    /// naming a known unit.
    pub fn from_value(value: &Value) -> BodyFatResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            BodyFatError::InvalidConfig("configuration must be an object".to_string())
        })?;

        if obj.len() != 2 {
            return Err(BodyFatError::InvalidConfig(format!(
                "configuration must have exactly the keys '{}' and '{}' (got {} keys)",
                WEIGHT_UNIT_KEY,
                LENGTH_UNIT_KEY,
                obj.len()
            )));
        }

        let weight = required_str(obj, WEIGHT_UNIT_KEY)?;
        let length = required_str(obj, LENGTH_UNIT_KEY)?;

        Ok(Self::new(parse_weight_unit(weight)?, parse_length_unit(length)?))
    }

    /// Load from `BFI_WEIGHT_UNIT` / `BFI_LENGTH_UNIT`, defaulting unset values
    pub fn from_env() -> BodyFatResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> BodyFatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let weight_unit = match lookup(WEIGHT_UNIT_ENV) {
            Some(v) => parse_weight_unit(&v)?,
            None => WeightUnit::default(),
        };
        let length_unit = match lookup(LENGTH_UNIT_ENV) {
            Some(v) => parse_length_unit(&v)?,
            None => LengthUnit::default(),
        };

        tracing::debug!(
            weight_unit = weight_unit.as_str(),
            length_unit = length_unit.as_str(),
            "Loaded estimator configuration"
        );

        Ok(Self::new(weight_unit, length_unit))
    }
}

pub fn parse_weight_unit(s: &str) -> BodyFatResult<WeightUnit> {
    WeightUnit::from_str(s).ok_or_else(|| {
        BodyFatError::InvalidConfig(format!(
            "{} must be one of kg, lb, st (got '{}')",
            WEIGHT_UNIT_KEY, s
        ))
    })
}

pub fn parse_length_unit(s: &str) -> BodyFatResult<LengthUnit> {
    LengthUnit::from_str(s).ok_or_else(|| {
        BodyFatError::InvalidConfig(format!(
            "{} must be one of m, in, ft (got '{}')",
            LENGTH_UNIT_KEY, s
        ))
    })
}

fn required_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    key: &str,
) -> BodyFatResult<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(BodyFatError::InvalidConfig(format!(
            "'{}' must be a string (got {})",
            key, other
        ))),
        None => Err(BodyFatError::InvalidConfig(format!("missing key '{}'", key))),
    }
}
