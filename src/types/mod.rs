//! Shared data structures for the crop and fertilizer recommendation engine
//!
//! - Crop side: CropProfile (authored baseline), Sample / TrainingSet
//!   (synthesized), CropInfo (presentation), Prediction (classifier output)
//! - Soil side: NutrientTarget, NutrientReport, FertilizerInfo,
//!   FertilizerRecommendation
//! - Caller input: FieldReadings

mod crop;
mod fertilizer;
mod readings;
// Public so constant groups stay addressable as `types::thresholds::...`.
pub mod thresholds;

pub use crop::*;
pub use fertilizer::*;
pub use readings::*;
pub use thresholds::{fertilizer_thresholds, nutrient_targets};
