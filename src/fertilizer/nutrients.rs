//! Soil nutrient analysis against crop-group targets.
//!
//! Crops are grouped by fixed membership; each group has one N/P/K target.
//! Labels outside every group (and the no-crop case) use the general target.

use serde::Serialize;

use crate::types::{nutrient_targets, Nutrient, NutrientReport, NutrientStatus, NutrientTarget};

/// Agronomic group used to pick nutrient targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CropGroup {
    Cereal,
    Vegetable,
    Fruit,
    Pulse,
    General,
}

const CEREALS: &[&str] = &["rice", "maize", "wheat", "barley", "sorghum", "millet"];
const VEGETABLES: &[&str] = &[
    "tomato",
    "potato",
    "onion",
    "cabbage",
    "cauliflower",
    "brinjal",
    "muskmelon",
    "watermelon",
];
const FRUITS: &[&str] = &[
    "apple",
    "banana",
    "mango",
    "orange",
    "papaya",
    "grapes",
    "pomegranate",
    "coconut",
];
const PULSES: &[&str] = &[
    "chickpea",
    "lentil",
    "mungbean",
    "blackgram",
    "pigeonpeas",
    "mothbeans",
    "kidneybeans",
];

impl CropGroup {
    /// Group membership by exact label. Unknown labels fall into `General`.
    pub fn of(label: &str) -> Self {
        if CEREALS.contains(&label) {
            Self::Cereal
        } else if VEGETABLES.contains(&label) {
            Self::Vegetable
        } else if FRUITS.contains(&label) {
            Self::Fruit
        } else if PULSES.contains(&label) {
            Self::Pulse
        } else {
            Self::General
        }
    }

    pub fn target(self) -> NutrientTarget {
        match self {
            Self::Cereal => nutrient_targets::CEREAL,
            Self::Vegetable => nutrient_targets::VEGETABLE,
            Self::Fruit => nutrient_targets::FRUIT,
            Self::Pulse => nutrient_targets::PULSE,
            Self::General => nutrient_targets::GENERAL,
        }
    }
}

/// Optimal N/P/K for a crop label.
pub fn optimal_targets(label: &str) -> NutrientTarget {
    CropGroup::of(label).target()
}

/// Target for an optional crop; no crop means the general target.
pub fn targets_for(crop: Option<&str>) -> NutrientTarget {
    crop.map_or(nutrient_targets::GENERAL, optimal_targets)
}

/// Shortfall as a percentage of `optimal`, clamped to [0, 100].
///
/// A non-positive optimal has no meaningful shortfall and yields 0.
pub fn deficiency_percent(actual: f64, optimal: f64) -> f64 {
    if optimal <= 0.0 {
        return 0.0;
    }
    (100.0 * (1.0 - actual / optimal)).clamp(0.0, 100.0)
}

/// Absolute shortfall below `optimal`, floored at zero.
pub fn deficit(actual: f64, optimal: f64) -> f64 {
    (optimal - actual).max(0.0)
}

fn status(nutrient: Nutrient, actual: f64, target: &NutrientTarget) -> NutrientStatus {
    let optimal = target.get(nutrient);
    NutrientStatus {
        nutrient,
        actual,
        optimal,
        deficit: deficit(actual, optimal),
        deficiency_percent: deficiency_percent(actual, optimal),
    }
}

/// Per-nutrient deficits and deficiency percentages for the given readings.
pub fn analyze(n: f64, p: f64, k: f64, crop: Option<&str>) -> NutrientReport {
    let target = targets_for(crop);
    NutrientReport {
        crop: crop.map(str::to_string),
        target,
        nitrogen: status(Nutrient::Nitrogen, n, &target),
        phosphorus: status(Nutrient::Phosphorus, p, &target),
        potassium: status(Nutrient::Potassium, k, &target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficiency_percent_examples() {
        assert_eq!(deficiency_percent(100.0, 80.0), 0.0);
        assert_eq!(deficiency_percent(40.0, 80.0), 50.0);
        assert_eq!(deficiency_percent(0.0, 80.0), 100.0);
        assert_eq!(deficiency_percent(-10.0, 80.0), 100.0);
    }

    #[test]
    fn test_deficiency_percent_zero_optimal() {
        assert_eq!(deficiency_percent(10.0, 0.0), 0.0);
        assert_eq!(deficiency_percent(10.0, -5.0), 0.0);
    }

    #[test]
    fn test_group_membership() {
        assert_eq!(CropGroup::of("wheat"), CropGroup::Cereal);
        assert_eq!(CropGroup::of("watermelon"), CropGroup::Vegetable);
        assert_eq!(CropGroup::of("coconut"), CropGroup::Fruit);
        assert_eq!(CropGroup::of("kidneybeans"), CropGroup::Pulse);
        assert_eq!(CropGroup::of("coffee"), CropGroup::General);
        assert_eq!(CropGroup::of("Wheat"), CropGroup::General);
    }

    #[test]
    fn test_optimal_targets_per_group() {
        assert_eq!(optimal_targets("rice"), NutrientTarget::new(120.0, 60.0, 50.0));
        assert_eq!(optimal_targets("tomato"), NutrientTarget::new(100.0, 80.0, 80.0));
        assert_eq!(optimal_targets("mango"), NutrientTarget::new(80.0, 60.0, 100.0));
        assert_eq!(optimal_targets("lentil"), NutrientTarget::new(40.0, 60.0, 40.0));
        assert_eq!(optimal_targets("jute"), NutrientTarget::new(80.0, 40.0, 40.0));
        assert_eq!(targets_for(None), NutrientTarget::new(80.0, 40.0, 40.0));
    }

    #[test]
    fn test_analyze_wheat() {
        let report = analyze(20.0, 60.0, 60.0, Some("wheat"));
        assert_eq!(report.crop.as_deref(), Some("wheat"));
        assert_eq!(report.nitrogen.deficit, 100.0);
        assert_eq!(report.phosphorus.deficit, 0.0);
        assert_eq!(report.potassium.deficit, 0.0);
        assert!((report.nitrogen.deficiency_percent - 83.333).abs() < 1e-2);
        assert_eq!(report.total_deficit(), 100.0);
    }
}
