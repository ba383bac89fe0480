//! Body fat categories
//!
//! Sex-specific threshold table used to name a body fat index.

use serde::{Deserialize, Serialize};

use super::measurements::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::EssentialFat,
        Category::Athletes,
        Category::Fitness,
        Category::Average,
        Category::Obese,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::EssentialFat => "Essential Fat",
            Category::Athletes => "Athletes",
            Category::Fitness => "Fitness",
            Category::Average => "Average",
            Category::Obese => "Obese",
        }
    }

    /// Classify a rounded body fat index for the given sex
    pub fn classify(sex: Sex, index: f64) -> Self {
        let t = CategoryThresholds::for_sex(sex);

        if index <= t.essential_fat_max {
            Category::EssentialFat
        } else if index <= t.athletes_max {
            Category::Athletes
        } else if index <= t.fitness_max {
            Category::Fitness
        } else if index < t.obese_min {
            Category::Average
        } else {
            Category::Obese
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Upper bounds (inclusive) of the lower categories and the lower bound
/// (inclusive) of Obese. Average spans everything in between, so the table
/// has no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryThresholds {
    pub essential_fat_max: f64,
    pub athletes_max: f64,
    pub fitness_max: f64,
    pub obese_min: f64,
}

pub const MALE_THRESHOLDS: CategoryThresholds = CategoryThresholds {
    essential_fat_max: 5.0,
    athletes_max: 13.0,
    fitness_max: 17.0,
    obese_min: 25.0,
};

pub const FEMALE_THRESHOLDS: CategoryThresholds = CategoryThresholds {
    essential_fat_max: 13.0,
    athletes_max: 20.0,
    fitness_max: 24.0,
    obese_min: 32.0,
};

impl CategoryThresholds {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => MALE_THRESHOLDS,
            Sex::Female => FEMALE_THRESHOLDS,
        }
    }

    /// Human-readable range for a category, e.g. "(13, 17]"
    pub fn range_label(&self, category: Category) -> String {
        match category {
            Category::EssentialFat => format!("<= {}", self.essential_fat_max),
            Category::Athletes => format!("({}, {}]", self.essential_fat_max, self.athletes_max),
            Category::Fitness => format!("({}, {}]", self.athletes_max, self.fitness_max),
            Category::Average => format!("({}, {})", self.fitness_max, self.obese_min),
            Category::Obese => format!(">= {}", self.obese_min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_boundaries() {
        assert_eq!(Category::classify(Sex::Male, 5.00), Category::EssentialFat);
        assert_eq!(Category::classify(Sex::Male, 5.01), Category::Athletes);
        assert_eq!(Category::classify(Sex::Male, 13.00), Category::Athletes);
        assert_eq!(Category::classify(Sex::Male, 17.00), Category::Fitness);
        assert_eq!(Category::classify(Sex::Male, 17.01), Category::Average);
        assert_eq!(Category::classify(Sex::Male, 25.00), Category::Obese);
    }

    #[test]
    fn test_female_boundaries() {
        assert_eq!(Category::classify(Sex::Female, 13.00), Category::EssentialFat);
        assert_eq!(Category::classify(Sex::Female, 20.00), Category::Athletes);
        assert_eq!(Category::classify(Sex::Female, 24.00), Category::Fitness);
        assert_eq!(Category::classify(Sex::Female, 31.00), Category::Average);
        assert_eq!(Category::classify(Sex::Female, 32.00), Category::Obese);
    }

    #[test]
    fn test_no_gap_below_obese() {
        // (24, 25) for men and (31, 32) for women fall in Average
        assert_eq!(Category::classify(Sex::Male, 24.50), Category::Average);
        assert_eq!(Category::classify(Sex::Male, 24.99), Category::Average);
        assert_eq!(Category::classify(Sex::Female, 31.50), Category::Average);
        assert_eq!(Category::classify(Sex::Female, 31.99), Category::Average);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Category::classify(Sex::Male, -12.0), Category::EssentialFat);
        assert_eq!(Category::classify(Sex::Female, 97.27), Category::Obese);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::EssentialFat.to_string(), "Essential Fat");
        assert_eq!(Category::Obese.display_name(), "Obese");
    }

    #[test]
    fn test_range_labels() {
        let male = CategoryThresholds::for_sex(Sex::Male);
        assert_eq!(male.range_label(Category::EssentialFat), "<= 5");
        assert_eq!(male.range_label(Category::Average), "(17, 25)");
        assert_eq!(male.range_label(Category::Obese), ">= 25");
    }
}
