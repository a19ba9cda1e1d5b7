//! Fertilizer and soil-nutrient types

use serde::Serialize;

/// Static fertilizer metadata from the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FertilizerInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Crop labels this fertilizer is particularly suited to
    pub ideal_for: &'static [&'static str],
    /// Nitrogen content (%)
    pub n_content: f64,
    /// Phosphorus (P2O5) content (%)
    pub p_content: f64,
    /// Potassium (K2O) content (%)
    pub k_content: f64,
    pub application_rate: &'static str,
    pub best_time: &'static str,
}

impl FertilizerInfo {
    pub fn suits(&self, crop: &str) -> bool {
        self.ideal_for.contains(&crop)
    }

    /// Grade string in the conventional N-P-K form, e.g. `"46-0-0"`.
    pub fn grade(&self) -> String {
        format!(
            "{}-{}-{}",
            self.n_content, self.p_content, self.k_content
        )
    }
}

/// One fertilizer pick with the reasoning that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
    pub rationale: String,
    /// Knowledge-base metadata, absent when the name has no table entry
    pub details: Option<&'static FertilizerInfo>,
}

/// Macronutrients tracked by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub const ALL: [Self; 3] = [Self::Nitrogen, Self::Phosphorus, Self::Potassium];

    pub fn name(self) -> &'static str {
        match self {
            Self::Nitrogen => "nitrogen",
            Self::Phosphorus => "phosphorus",
            Self::Potassium => "potassium",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Optimal N/P/K levels (kg/ha) for a crop group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientTarget {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl NutrientTarget {
    pub const fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.n,
            Nutrient::Phosphorus => self.p,
            Nutrient::Potassium => self.k,
        }
    }
}

/// Actual vs optimal for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientStatus {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub optimal: f64,
    /// Absolute shortfall (kg/ha), floored at zero
    pub deficit: f64,
    /// Shortfall as a percentage of optimal, in [0, 100]
    pub deficiency_percent: f64,
}

/// Per-nutrient deficiency breakdown against one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientReport {
    pub crop: Option<String>,
    pub target: NutrientTarget,
    pub nitrogen: NutrientStatus,
    pub phosphorus: NutrientStatus,
    pub potassium: NutrientStatus,
}

impl NutrientReport {
    pub fn status(&self, nutrient: Nutrient) -> &NutrientStatus {
        match nutrient {
            Nutrient::Nitrogen => &self.nitrogen,
            Nutrient::Phosphorus => &self.phosphorus,
            Nutrient::Potassium => &self.potassium,
        }
    }

    pub fn total_deficit(&self) -> f64 {
        self.nitrogen.deficit + self.phosphorus.deficit + self.potassium.deficit
    }
}
