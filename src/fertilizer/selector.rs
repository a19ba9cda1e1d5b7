//! Rule-based fertilizer selection
//!
//! ## Decision table (first match wins)
//!
//! | Severe N | Severe P | Severe K | Pattern               | Fertilizer       |
//! |----------|----------|----------|-----------------------|------------------|
//! | yes      | no       | no       | `NitrogenOnly`        | Urea             |
//! | no       | yes      | no       | `PhosphorusOnly`      | DAP              |
//! | no       | no       | yes      | `PotassiumOnly`       | MOP              |
//! | yes      | yes      | yes      | `AllThree`            | NPK 17-17-17     |
//! | no       | yes      | yes      | `PhosphorusPotassium` | NPK 10-26-26     |
//! | yes      | yes      | no       | `NitrogenPhosphorus`  | NPK 14-35-14     |
//! | otherwise, total deficit > 30  | `ModerateCombined`    | NPK 17-17-17     |
//! | otherwise                      | `Maintenance`         | Organic Compost  |
//!
//! Severity cutoffs are absolute (N > 30, P > 20, K > 20 kg/ha) and do not
//! scale with the crop's target.
//!
//! When a crop is given, a second fertilizer is appended: the first entry in
//! the knowledge-base fertilizer table that lists the crop as ideal and is
//! not the primary. If none qualifies only the primary is returned.

use serde::Serialize;
use tracing::debug;

use super::nutrients::{deficit, targets_for};
use super::templates::{primary_rationale, secondary_rationale};
use crate::knowledge_base::{
    self, DAP, MOP, NPK_10_26_26, NPK_14_35_14, NPK_17_17_17, ORGANIC_COMPOST, UREA,
};
use crate::types::fertilizer_thresholds::{
    COMBINED_DEFICIT_CUTOFF, K_SEVERE_DEFICIT, N_SEVERE_DEFICIT, P_SEVERE_DEFICIT,
};
use crate::types::{FertilizerRecommendation, Nutrient};

// ============================================================================
// Deficits and severity
// ============================================================================

/// Absolute N/P/K shortfalls (kg/ha), each floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deficits {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl Deficits {
    /// Shortfalls of the readings against the target for `crop`.
    pub fn compute(n: f64, p: f64, k: f64, crop: Option<&str>) -> Self {
        let target = targets_for(crop);
        Self {
            n: deficit(n, target.n),
            p: deficit(p, target.p),
            k: deficit(k, target.k),
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.n,
            Nutrient::Phosphorus => self.p,
            Nutrient::Potassium => self.k,
        }
    }

    pub fn total(&self) -> f64 {
        self.n + self.p + self.k
    }

    pub fn severity(&self) -> Severity {
        Severity {
            n: self.n > N_SEVERE_DEFICIT,
            p: self.p > P_SEVERE_DEFICIT,
            k: self.k > K_SEVERE_DEFICIT,
        }
    }
}

/// Which nutrients are severely deficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Severity {
    pub n: bool,
    pub p: bool,
    pub k: bool,
}

// ============================================================================
// Decision table
// ============================================================================

/// Deficiency pattern resolved from the severity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeficiencyPattern {
    NitrogenOnly,
    PhosphorusOnly,
    PotassiumOnly,
    AllThree,
    PhosphorusPotassium,
    NitrogenPhosphorus,
    /// No severe pattern, but the combined deficit is large
    ModerateCombined,
    /// No severe pattern and a small combined deficit
    Maintenance,
}

impl DeficiencyPattern {
    /// Primary fertilizer for this pattern.
    pub fn fertilizer(self) -> &'static str {
        match self {
            Self::NitrogenOnly => UREA,
            Self::PhosphorusOnly => DAP,
            Self::PotassiumOnly => MOP,
            Self::AllThree | Self::ModerateCombined => NPK_17_17_17,
            Self::PhosphorusPotassium => NPK_10_26_26,
            Self::NitrogenPhosphorus => NPK_14_35_14,
            Self::Maintenance => ORGANIC_COMPOST,
        }
    }
}

type Rule = (fn(Severity) -> bool, DeficiencyPattern);

fn nitrogen_only(s: Severity) -> bool {
    s.n && !s.p && !s.k
}

fn phosphorus_only(s: Severity) -> bool {
    !s.n && s.p && !s.k
}

fn potassium_only(s: Severity) -> bool {
    !s.n && !s.p && s.k
}

fn all_three(s: Severity) -> bool {
    s.n && s.p && s.k
}

fn phosphorus_potassium(s: Severity) -> bool {
    !s.n && s.p && s.k
}

fn nitrogen_phosphorus(s: Severity) -> bool {
    s.n && s.p && !s.k
}

/// Severity rules in priority order.
const DECISION_TABLE: &[Rule] = &[
    (nitrogen_only, DeficiencyPattern::NitrogenOnly),
    (phosphorus_only, DeficiencyPattern::PhosphorusOnly),
    (potassium_only, DeficiencyPattern::PotassiumOnly),
    (all_three, DeficiencyPattern::AllThree),
    (phosphorus_potassium, DeficiencyPattern::PhosphorusPotassium),
    (nitrogen_phosphorus, DeficiencyPattern::NitrogenPhosphorus),
];

/// Resolve the deficiency pattern for a set of deficits.
pub fn classify(deficits: &Deficits) -> DeficiencyPattern {
    let severity = deficits.severity();
    DECISION_TABLE
        .iter()
        .find(|(matches, _)| matches(severity))
        .map(|&(_, pattern)| pattern)
        .unwrap_or_else(|| {
            if deficits.total() > COMBINED_DEFICIT_CUTOFF {
                DeficiencyPattern::ModerateCombined
            } else {
                DeficiencyPattern::Maintenance
            }
        })
}

// ============================================================================
// Recommendation
// ============================================================================

/// One or two fertilizer recommendations for the given soil readings.
///
/// The first entry is always the decision-table pick. Pure: identical
/// inputs give identical output.
pub fn recommend_fertilizer(
    n: f64,
    p: f64,
    k: f64,
    crop: Option<&str>,
) -> Vec<FertilizerRecommendation> {
    let deficits = Deficits::compute(n, p, k, crop);
    let pattern = classify(&deficits);
    let primary = pattern.fertilizer();

    debug!(
        crop = crop.unwrap_or("-"),
        n_deficit = deficits.n,
        p_deficit = deficits.p,
        k_deficit = deficits.k,
        pattern = ?pattern,
        fertilizer = primary,
        "Fertilizer pattern resolved"
    );

    let mut recs = vec![FertilizerRecommendation {
        fertilizer: primary.to_string(),
        rationale: primary_rationale(pattern, &deficits),
        details: knowledge_base::fertilizer(primary),
    }];

    if let Some(crop) = crop {
        if let Some(secondary) = secondary_for(crop, primary) {
            recs.push(secondary);
        }
    }

    recs
}

/// First table fertilizer suited to `crop` that is not `primary`.
fn secondary_for(crop: &str, primary: &str) -> Option<FertilizerRecommendation> {
    knowledge_base::fertilizers()
        .iter()
        .find(|f| f.name != primary && f.suits(crop))
        .map(|f| FertilizerRecommendation {
            fertilizer: f.name.to_string(),
            rationale: secondary_rationale(crop, f.name, f.best_time),
            details: Some(f),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(recs: &[FertilizerRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.fertilizer.as_str()).collect()
    }

    fn pattern_of(n: f64, p: f64, k: f64) -> DeficiencyPattern {
        classify(&Deficits { n, p, k })
    }

    #[test]
    fn test_decision_table_rows() {
        assert_eq!(pattern_of(31.0, 0.0, 0.0), DeficiencyPattern::NitrogenOnly);
        assert_eq!(pattern_of(0.0, 21.0, 0.0), DeficiencyPattern::PhosphorusOnly);
        assert_eq!(pattern_of(0.0, 0.0, 21.0), DeficiencyPattern::PotassiumOnly);
        assert_eq!(pattern_of(31.0, 21.0, 21.0), DeficiencyPattern::AllThree);
        assert_eq!(pattern_of(0.0, 21.0, 21.0), DeficiencyPattern::PhosphorusPotassium);
        assert_eq!(pattern_of(31.0, 21.0, 0.0), DeficiencyPattern::NitrogenPhosphorus);
    }

    #[test]
    fn test_cutoffs_are_strict() {
        // exactly at the cutoff is not severe
        assert_eq!(pattern_of(30.0, 0.0, 0.0), DeficiencyPattern::Maintenance);
        assert_eq!(pattern_of(0.0, 20.0, 0.0), DeficiencyPattern::Maintenance);
        assert_eq!(pattern_of(10.0, 10.0, 10.0), DeficiencyPattern::Maintenance);
        assert_eq!(pattern_of(10.0, 10.0, 10.5), DeficiencyPattern::ModerateCombined);
    }

    #[test]
    fn test_nitrogen_potassium_falls_through_to_combined() {
        assert_eq!(pattern_of(40.0, 0.0, 25.0), DeficiencyPattern::ModerateCombined);
        assert_eq!(DeficiencyPattern::ModerateCombined.fertilizer(), NPK_17_17_17);
    }

    #[test]
    fn test_wheat_nitrogen_deficit() {
        let recs = recommend_fertilizer(20.0, 60.0, 60.0, Some("wheat"));
        assert_eq!(recs[0].fertilizer, "Urea");
        assert!(recs[0].rationale.contains("100"));
        assert!(recs[0].rationale.to_lowercase().contains("nitrogen"));
        assert!(recs[0].details.is_some());
    }

    #[test]
    fn test_wheat_secondary_skips_primary() {
        let recs = recommend_fertilizer(20.0, 60.0, 60.0, Some("wheat"));
        assert_eq!(names(&recs), vec!["Urea", "DAP"]);
        assert!(recs[1].rationale.contains("wheat"));
    }

    #[test]
    fn test_general_target_all_severe() {
        let recs = recommend_fertilizer(20.0, 10.0, 10.0, None);
        assert_eq!(names(&recs), vec!["NPK 17-17-17"]);
    }

    #[test]
    fn test_tomato_near_target_gets_compost() {
        let recs = recommend_fertilizer(90.0, 85.0, 85.0, Some("tomato"));
        assert_eq!(recs[0].fertilizer, "Organic Compost");
        assert!(recs.len() <= 2);
        assert_ne!(recs.get(1).map(|r| r.fertilizer.as_str()), Some("Organic Compost"));
    }

    #[test]
    fn test_no_crop_never_adds_secondary() {
        assert_eq!(recommend_fertilizer(200.0, 200.0, 200.0, None).len(), 1);
    }

    #[test]
    fn test_unknown_crop_uses_general_target_without_secondary() {
        let recs = recommend_fertilizer(20.0, 60.0, 60.0, Some("quinoa"));
        assert_eq!(names(&recs), vec!["Urea"]);
        assert!(recs[0].rationale.contains("60.0"));
    }

    #[test]
    fn test_idempotent() {
        let a = recommend_fertilizer(35.0, 12.0, 70.0, Some("maize"));
        let b = recommend_fertilizer(35.0, 12.0, 70.0, Some("maize"));
        assert_eq!(a, b);
    }
}
