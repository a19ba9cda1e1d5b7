//! Bundled agronomic knowledge base
//!
//! Three static tables, authored together:
//!
//! - **Crop profiles**: baseline N/P/K, climate and rainfall per cultivation
//!   variant; the only input to dataset synthesis
//! - **Crop info**: descriptive metadata for presentation
//! - **Fertilizers**: nutrient content, suitability and application guidance
//!
//! Lookups are exact-key. A missing key is a lookup miss, reported as `None`
//! and never as an error: prediction labels come from the same profile table
//! the info tables were written against.

mod crops;
mod fertilizers;
mod profiles;

pub use crops::CROP_INFO;
pub use fertilizers::*;
pub use profiles::CROP_PROFILES;

use tracing::debug;

use crate::types::{CropInfo, CropProfile, FertilizerInfo, NUM_FEATURES};

/// All crop profiles in table order.
pub fn profiles() -> &'static [CropProfile] {
    &CROP_PROFILES
}

/// Profiles for one crop label (empty when the label is unknown).
pub fn profiles_for(label: &str) -> Vec<&'static CropProfile> {
    CROP_PROFILES.iter().filter(|p| p.label == label).collect()
}

/// Distinct crop labels in table order.
pub fn crop_labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();
    for p in &CROP_PROFILES {
        if !labels.contains(&p.label) {
            labels.push(p.label);
        }
    }
    labels
}

/// Per-feature `(min, max)` over every profile baseline, widened by the
/// synthesis noise band. Readings outside it were never seen in training.
pub fn feature_envelope(noise_fraction: f64) -> [(f64, f64); NUM_FEATURES] {
    let mut envelope = [(f64::INFINITY, f64::NEG_INFINITY); NUM_FEATURES];
    for profile in &CROP_PROFILES {
        for (slot, v) in envelope.iter_mut().zip(profile.features()) {
            slot.0 = slot.0.min(v);
            slot.1 = slot.1.max(v);
        }
    }
    envelope.map(|(lo, hi)| (lo * (1.0 - noise_fraction), hi * (1.0 + noise_fraction)))
}

pub fn crop_info(label: &str) -> Option<&'static CropInfo> {
    let found = CROP_INFO.iter().find(|c| c.label == label);
    if found.is_none() {
        debug!(crop = label, "No crop info entry");
    }
    found
}

/// Fertilizer table in its defined scan order.
pub fn fertilizers() -> &'static [FertilizerInfo] {
    &FERTILIZERS
}

pub fn fertilizer(name: &str) -> Option<&'static FertilizerInfo> {
    let found = FERTILIZERS.iter().find(|f| f.name == name);
    if found.is_none() {
        debug!(fertilizer = name, "No fertilizer metadata entry");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_profile_table_shape() {
        assert_eq!(profiles().len(), 66);
        let labels = crop_labels();
        assert_eq!(labels.len(), 22);
        for label in &labels {
            assert_eq!(profiles_for(label).len(), 3, "{label} should have 3 variants");
        }
    }

    #[test]
    fn test_labels_are_lowercase() {
        for label in crop_labels() {
            assert_eq!(label, label.to_lowercase());
        }
    }

    #[test]
    fn test_every_profile_label_has_info() {
        for label in crop_labels() {
            assert!(crop_info(label).is_some(), "missing crop info for {label}");
        }
        assert_eq!(CROP_INFO.len(), crop_labels().len());
    }

    #[test]
    fn test_crop_info_lookup() {
        let rice = crop_info("rice").unwrap();
        assert_eq!(rice.ideal_ph, "5.5-6.5");
        assert!(crop_info("dragonfruit").is_none());
    }

    #[test]
    fn test_fertilizer_names_unique() {
        let names: HashSet<&str> = fertilizers().iter().map(|f| f.name).collect();
        assert_eq!(names.len(), fertilizers().len());
    }

    #[test]
    fn test_decision_table_outcomes_have_metadata() {
        for name in [
            UREA,
            DAP,
            MOP,
            NPK_17_17_17,
            NPK_10_26_26,
            NPK_14_35_14,
            ORGANIC_COMPOST,
        ] {
            assert!(fertilizer(name).is_some(), "missing metadata for {name}");
        }
    }

    #[test]
    fn test_fertilizer_grade() {
        assert_eq!(fertilizer(UREA).unwrap().grade(), "46-0-0");
        assert_eq!(fertilizer(NPK_10_26_26).unwrap().grade(), "10-26-26");
    }

    #[test]
    fn test_profiles_for_unknown_label() {
        assert!(profiles_for("tomato").is_empty());
    }

    #[test]
    fn test_feature_envelope_covers_baselines() {
        let envelope = feature_envelope(0.0);
        for profile in profiles() {
            for ((lo, hi), v) in envelope.iter().zip(profile.features()) {
                assert!(*lo <= v && v <= *hi);
            }
        }
        let widened = feature_envelope(0.1);
        assert!(widened[6].1 > envelope[6].1);
    }
}
