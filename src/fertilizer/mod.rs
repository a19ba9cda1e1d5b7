//! Fertilizer Recommendation
//!
//! Two stages, both pure functions over the NPK readings and an optional
//! crop label:
//!
//! - `nutrients`: crop-group targets, deficits and deficiency percentages
//! - `selector`: ordered severity decision table plus crop-suited secondary
//! - `templates`: rationale text naming the deficient nutrients and deficits

pub mod nutrients;
pub mod selector;
mod templates;

pub use nutrients::{analyze, deficiency_percent, optimal_targets, targets_for, CropGroup};
pub use selector::{classify, recommend_fertilizer, DeficiencyPattern, Deficits, Severity};
