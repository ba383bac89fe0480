//! Measurement model
//!
//! Anthropometric input for a single body fat estimate. Values are in the
//! units configured on the estimator.

use serde::{Deserialize, Serialize};

use crate::error::{BodyFatError, BodyFatResult};

/// Biological sex, selecting which formula and threshold table apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Case-insensitive match on `m`/`male` and `f`/`female`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Some(Sex::Male),
            "f" | "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Parse, failing with `InvalidInput` on anything unrecognized
    pub fn parse(s: &str) -> BodyFatResult<Self> {
        Self::from_str(s).ok_or_else(|| {
            BodyFatError::InvalidInput(format!(
                "sex must be one of m, male, f, female (got '{}')",
                s
            ))
        })
    }
}

impl TryFrom<String> for Sex {
    type Error = BodyFatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sex::parse(&value)
    }
}

/// Measurements for one estimate
///
/// `wrist`, `hips` and `forearm` are only read for [`Sex::Female`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub sex: Sex,
    pub weight: f64,
    pub waist: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forearm: Option<f64>,
}

/// Female-only girths, resolved once the measurement set is validated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FemaleGirths {
    pub wrist: f64,
    pub hips: f64,
    pub forearm: f64,
}

impl Measurements {
    pub fn male(weight: f64, waist: f64) -> Self {
        Self {
            sex: Sex::Male,
            weight,
            waist,
            wrist: None,
            hips: None,
            forearm: None,
        }
    }

    pub fn female(weight: f64, waist: f64, wrist: f64, hips: f64, forearm: f64) -> Self {
        Self {
            sex: Sex::Female,
            weight,
            waist,
            wrist: Some(wrist),
            hips: Some(hips),
            forearm: Some(forearm),
        }
    }

    /// Check that the measurements can be fed to the formula for their sex
    pub fn validate(&self) -> BodyFatResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(BodyFatError::InvalidInput(format!(
                "weight must be a positive number (got {})",
                self.weight
            )));
        }
        require_finite("waist", self.waist)?;

        if self.sex == Sex::Female {
            self.female_girths()?;
        }
        Ok(())
    }

    /// Wrist, hips and forearm, all of which a female estimate requires
    pub fn female_girths(&self) -> BodyFatResult<FemaleGirths> {
        let wrist = require_present("wrist", self.wrist)?;
        let hips = require_present("hips", self.hips)?;
        let forearm = require_present("forearm", self.forearm)?;
        Ok(FemaleGirths {
            wrist,
            hips,
            forearm,
        })
    }
}

fn require_finite(name: &str, value: f64) -> BodyFatResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BodyFatError::InvalidInput(format!(
            "{} must be a finite number (got {})",
            name, value
        )))
    }
}

fn require_present(name: &str, value: Option<f64>) -> BodyFatResult<f64> {
    match value {
        Some(v) => require_finite(name, v),
        None => Err(BodyFatError::InvalidInput(format!(
            "{} measurement is required for female estimates",
            name
        ))),
    }
}
