//! Body Fat MCP Tools
//!
//! Tool functions for estimating and classifying body fat.

use serde::Serialize;

use crate::config::EstimatorConfig;
use crate::error::{BodyFatError, BodyFatResult};
use crate::estimator::BodyFatEstimator;
use crate::models::{Category, CategoryThresholds, Measurements, Sex};
use crate::units::{LengthUnit, WeightUnit};

/// Raw request for estimate_body_fat, before sex and units are parsed
#[derive(Debug, Clone, Default)]
pub struct EstimateRequest {
    pub sex: String,
    pub weight: f64,
    pub waist: f64,
    pub wrist: Option<f64>,
    pub hips: Option<f64>,
    pub forearm: Option<f64>,
    pub weight_unit: Option<String>,
    pub length_unit: Option<String>,
}

/// Response for estimate_body_fat
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub sex: String,
    pub body_fat_index: String,
    pub category: String,
    pub weight_unit: String,
    pub length_unit: String,
}

/// Response for last_body_fat_category
#[derive(Debug, Serialize)]
pub struct LastCategoryResponse {
    pub category: String,
    pub sex: String,
    pub body_fat_index: String,
}

/// One row of a threshold table
#[derive(Debug, Serialize)]
pub struct CategoryRange {
    pub category: String,
    pub range: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryTable {
    pub sex: String,
    pub categories: Vec<CategoryRange>,
}

/// Response for list_body_fat_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub tables: Vec<CategoryTable>,
}

/// Estimate body fat and remember the result on the session estimator
///
/// Unit overrides replace the session units once the estimate succeeds.
pub fn estimate_body_fat(
    estimator: &mut BodyFatEstimator,
    request: &EstimateRequest,
) -> Result<EstimateResponse, String> {
    let sex = Sex::parse(&request.sex).map_err(|e| e.to_string())?;
    let config = resolve_config(estimator.config(), request).map_err(|e| e.to_string())?;

    let measurements = Measurements {
        sex,
        weight: request.weight,
        waist: request.waist,
        wrist: request.wrist,
        hips: request.hips,
        forearm: request.forearm,
    };

    let mut candidate = if config == estimator.config() {
        estimator.clone()
    } else {
        BodyFatEstimator::new(config)
    };
    let body_fat_index = candidate
        .compute_index(&measurements)
        .map_err(|e| e.to_string())?;
    let category = candidate.category_of().map_err(|e| e.to_string())?;
    *estimator = candidate;

    Ok(EstimateResponse {
        sex: sex.as_str().to_string(),
        body_fat_index,
        category: category.display_name().to_string(),
        weight_unit: config.weight_unit.as_str().to_string(),
        length_unit: config.length_unit.as_str().to_string(),
    })
}

/// Category of the previous estimate in this session
pub fn last_body_fat_category(
    estimator: &BodyFatEstimator,
) -> Result<LastCategoryResponse, String> {
    let category = estimator.category_of().map_err(|e| e.to_string())?;
    let report = estimator
        .last_report()
        .ok_or_else(|| "No body fat estimate recorded".to_string())?;

    Ok(LastCategoryResponse {
        category: category.display_name().to_string(),
        sex: report.sex.as_str().to_string(),
        body_fat_index: report.formatted_index(),
    })
}

/// Threshold tables, optionally for a single sex
pub fn list_body_fat_categories(sex: Option<&str>) -> Result<ListCategoriesResponse, String> {
    let sexes = match sex {
        Some(s) => vec![Sex::parse(s).map_err(|e| e.to_string())?],
        None => vec![Sex::Male, Sex::Female],
    };

    let tables = sexes
        .into_iter()
        .map(|sex| {
            let thresholds = CategoryThresholds::for_sex(sex);
            CategoryTable {
                sex: sex.as_str().to_string(),
                categories: Category::ALL
                    .iter()
                    .map(|c| CategoryRange {
                        category: c.display_name().to_string(),
                        range: thresholds.range_label(*c),
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(ListCategoriesResponse { tables })
}

/// Session units with any per-request overrides applied
///
/// An unknown unit name here is bad request input, not bad configuration.
fn resolve_config(
    base: EstimatorConfig,
    request: &EstimateRequest,
) -> BodyFatResult<EstimatorConfig> {
    let weight_unit = match request.weight_unit.as_deref() {
        Some(u) => WeightUnit::from_str(u).ok_or_else(|| {
            BodyFatError::InvalidInput(format!(
                "weight_unit must be one of kg, lb, st (got '{}')",
                u
            ))
        })?,
        None => base.weight_unit,
    };
    let length_unit = match request.length_unit.as_deref() {
        Some(u) => LengthUnit::from_str(u).ok_or_else(|| {
            BodyFatError::InvalidInput(format!(
                "length_unit must be one of m, in, ft (got '{}')",
                u
            ))
        })?,
        None => base.length_unit,
    };
    Ok(EstimatorConfig::new(weight_unit, length_unit))
}
