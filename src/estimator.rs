//! Body fat estimator
//!
//! Hodgdon-Beckett lean body weight formulas. Inputs are converted to pounds
//! and inches, the lean body weight is estimated per sex, and the remainder of
//! the body weight is reported as a rounded fat percentage.

use serde::Serialize;

use crate::config::EstimatorConfig;
use crate::error::{BodyFatError, BodyFatResult};
use crate::models::{Category, Measurements, Sex};
use crate::units::{to_inches, to_pounds};

/// Outcome of a single estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFatReport {
    pub sex: Sex,
    /// Body fat percentage, rounded to 2 decimals
    pub index: f64,
    pub category: Category,
}

impl BodyFatReport {
    /// Index with exactly two decimal places, e.g. "30.98"
    pub fn formatted_index(&self) -> String {
        format!("{:.2}", self.index)
    }
}

/// Estimator bound to a fixed unit configuration
///
/// [`estimate`](Self::estimate) is pure. [`compute_index`](Self::compute_index)
/// additionally remembers the report so [`category_of`](Self::category_of) can
/// be asked afterwards.
#[derive(Debug, Clone, Default)]
pub struct BodyFatEstimator {
    config: EstimatorConfig,
    last: Option<BodyFatReport>,
}

impl BodyFatEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config, last: None }
    }

    pub fn config(&self) -> EstimatorConfig {
        self.config
    }

    pub fn last_report(&self) -> Option<&BodyFatReport> {
        self.last.as_ref()
    }

    /// Estimate body fat and classify it
    pub fn estimate(&self, measurements: &Measurements) -> BodyFatResult<BodyFatReport> {
        if let Err(e) = measurements.validate() {
            tracing::warn!("Rejected body fat measurements: {}", e);
            return Err(e);
        }

        let weight = to_pounds(measurements.weight, self.config.weight_unit);
        let waist = to_inches(measurements.waist, self.config.length_unit);

        let lean_body_weight = match measurements.sex {
            Sex::Male => (weight * 1.082 + 94.42) - (waist * 4.15),
            Sex::Female => {
                let girths = measurements.female_girths()?;
                let wrist = to_inches(girths.wrist, self.config.length_unit);
                let hips = to_inches(girths.hips, self.config.length_unit);
                let forearm = to_inches(girths.forearm, self.config.length_unit);

                (weight * 0.732 + 8.987) + (wrist / 3.140) - (waist * 0.157) - (hips * 0.249)
                    + (forearm * 0.434)
            }
        };

        let body_fat_weight = weight - lean_body_weight;
        let index = round_to_hundredths(body_fat_weight * 100.0 / weight);
        let category = Category::classify(measurements.sex, index);

        tracing::debug!(
            sex = measurements.sex.as_str(),
            weight_lb = weight,
            waist_in = waist,
            lean_body_weight,
            index,
            category = category.display_name(),
            "Computed body fat index"
        );

        Ok(BodyFatReport {
            sex: measurements.sex,
            index,
            category,
        })
    }

    /// Compute and remember the index, returning it formatted to 2 decimals
    ///
    /// Stored state is left untouched when the computation fails.
    pub fn compute_index(&mut self, measurements: &Measurements) -> BodyFatResult<String> {
        let report = self.estimate(measurements)?;
        self.last = Some(report);
        Ok(report.formatted_index())
    }

    /// Category of the last successful [`compute_index`](Self::compute_index)
    pub fn category_of(&self) -> BodyFatResult<Category> {
        self.last.map(|r| r.category).ok_or_else(|| {
            BodyFatError::Precondition(
                "no body fat index has been computed on this estimator".to_string(),
            )
        })
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, WeightUnit, LB_PER_KG};

    #[test]
    fn test_female_reference() {
        let mut estimator = BodyFatEstimator::default();
        let index = estimator
            .compute_index(&Measurements::female(60.0, 40.0, 3.0, 30.0, 3.0))
            .unwrap();
        assert_eq!(index, "30.98");
        assert_eq!(estimator.category_of().unwrap(), Category::Average);
        assert_eq!(estimator.category_of().unwrap().display_name(), "Average");
    }

    #[test]
    fn test_male_reference() {
        let mut estimator = BodyFatEstimator::default();
        let index = estimator.compute_index(&Measurements::male(60.0, 38.0)).unwrap();
        assert_eq!(index, "97.27");
        assert_eq!(estimator.category_of().unwrap(), Category::Obese);
    }

    #[test]
    fn test_estimate_returns_structured_report() {
        let estimator = BodyFatEstimator::default();
        let report = estimator.estimate(&Measurements::male(60.0, 38.0)).unwrap();
        assert_eq!(report.sex, Sex::Male);
        assert_eq!(report.index, 97.27);
        assert_eq!(report.category, Category::Obese);
        assert!(estimator.last_report().is_none());
    }

    #[test]
    fn test_category_before_compute_fails() {
        let estimator = BodyFatEstimator::default();
        assert!(matches!(
            estimator.category_of(),
            Err(BodyFatError::Precondition(_))
        ));
    }

    #[test]
    fn test_failed_compute_keeps_previous_state() {
        let mut estimator = BodyFatEstimator::default();
        estimator.compute_index(&Measurements::male(60.0, 38.0)).unwrap();

        let mut incomplete = Measurements::female(60.0, 40.0, 3.0, 30.0, 3.0);
        incomplete.forearm = None;
        assert!(matches!(
            estimator.compute_index(&incomplete),
            Err(BodyFatError::InvalidInput(_))
        ));

        let last = estimator.last_report().unwrap();
        assert_eq!(last.sex, Sex::Male);
        assert_eq!(estimator.category_of().unwrap(), Category::Obese);
    }

    #[test]
    fn test_failed_first_compute_leaves_no_state() {
        let mut estimator = BodyFatEstimator::default();
        assert!(estimator.compute_index(&Measurements::male(0.0, 38.0)).is_err());
        assert!(matches!(
            estimator.category_of(),
            Err(BodyFatError::Precondition(_))
        ));
    }

    #[test]
    fn test_kilograms_match_pounds() {
        let kg = BodyFatEstimator::new(EstimatorConfig::new(
            WeightUnit::Kilogram,
            LengthUnit::Inch,
        ));
        let lb = BodyFatEstimator::default();

        for w in [55.0, 72.5, 90.0] {
            let from_kg = kg.estimate(&Measurements::male(w, 34.0)).unwrap();
            let from_lb = lb.estimate(&Measurements::male(w * LB_PER_KG, 34.0)).unwrap();
            assert_eq!(from_kg, from_lb);
        }
    }

    #[test]
    fn test_stone_and_feet_match_pounds_and_inches() {
        let imperial = BodyFatEstimator::new(EstimatorConfig::new(
            WeightUnit::Stone,
            LengthUnit::Foot,
        ));
        let base = BodyFatEstimator::default();

        let a = imperial.estimate(&Measurements::male(13.0, 3.0)).unwrap();
        let b = base.estimate(&Measurements::male(182.0, 36.0)).unwrap();
        assert_eq!(a.index, b.index);
    }

    #[test]
    fn test_metric_female() {
        let metric = BodyFatEstimator::new(EstimatorConfig::new(
            WeightUnit::Kilogram,
            LengthUnit::Meter,
        ));
        let report = metric
            .estimate(&Measurements::female(65.0, 0.75, 0.16, 1.0, 0.26))
            .unwrap();
        assert!(report.index > 0.0 && report.index < 100.0);
        assert_eq!(report.category, Category::classify(Sex::Female, report.index));
    }

    #[test]
    fn test_lean_male_is_low_category() {
        // 200 lb, 30 in waist: lean = 310.82 - 124.5 = 186.32, fat = 6.84%
        let report = BodyFatEstimator::default()
            .estimate(&Measurements::male(200.0, 30.0))
            .unwrap();
        assert_eq!(report.formatted_index(), "6.84");
        assert_eq!(report.category, Category::Athletes);
    }

    #[test]
    fn test_formatted_index_pads_decimals() {
        let report = BodyFatReport {
            sex: Sex::Male,
            index: 17.0,
            category: Category::Fitness,
        };
        assert_eq!(report.formatted_index(), "17.00");
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(30.97597), 30.98);
        assert_eq!(round_to_hundredths(97.26667), 97.27);
        assert_eq!(round_to_hundredths(-1.234), -1.23);
    }

    #[test]
    fn test_round_half_way_values() {
        // The scaled value is rounded half away from zero. 30.975 and 2.675
        // both scale to exactly .5 and round up, even though the stored
        // binary value of 2.675 is just below the tie.
        assert_eq!(round_to_hundredths(30.975), 30.98);
        assert_eq!(round_to_hundredths(2.675), 2.68);
        assert_eq!(format!("{:.2}", 2.675), "2.67");
        assert_eq!(round_to_hundredths(-2.675), -2.68);

        // Scaling 1.005 lands below 100.5, so it rounds down
        assert_eq!(round_to_hundredths(1.005), 1.0);
    }
}
