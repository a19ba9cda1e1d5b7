//! Fertilizer severity thresholds and crop-group nutrient targets

use super::NutrientTarget;

/// Absolute-deficit cutoffs above which a nutrient shortfall is "severe".
///
/// Fixed across crops; never scaled by the crop's own target.
pub mod fertilizer_thresholds {
    /// Nitrogen deficit (kg/ha) above this is severe
    pub const N_SEVERE_DEFICIT: f64 = 30.0;
    /// Phosphorus deficit (kg/ha) above this is severe
    pub const P_SEVERE_DEFICIT: f64 = 20.0;
    /// Potassium deficit (kg/ha) above this is severe
    pub const K_SEVERE_DEFICIT: f64 = 20.0;
    /// With no severe pattern, a combined N+P+K deficit above this still
    /// warrants a balanced compound instead of compost
    pub const COMBINED_DEFICIT_CUTOFF: f64 = 30.0;
}

/// Optimal N/P/K levels per crop group (kg/ha).
pub mod nutrient_targets {
    use super::NutrientTarget;

    pub const CEREAL: NutrientTarget = NutrientTarget::new(120.0, 60.0, 50.0);
    pub const VEGETABLE: NutrientTarget = NutrientTarget::new(100.0, 80.0, 80.0);
    pub const FRUIT: NutrientTarget = NutrientTarget::new(80.0, 60.0, 100.0);
    pub const PULSE: NutrientTarget = NutrientTarget::new(40.0, 60.0, 40.0);
    /// Fallback for crops outside every group, or when no crop is given
    pub const GENERAL: NutrientTarget = NutrientTarget::new(80.0, 40.0, 40.0);
}
