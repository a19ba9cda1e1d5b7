//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use super::defaults::{HUMIDITY_MAX_PERCENT, PH_MAX, PH_MIN};
use crate::knowledge_base;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, ", did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

const READINGS: [&str; 7] = ["n", "p", "k", "temperature", "humidity", "ph", "rainfall"];

/// Returns the complete set of valid dotted key paths for EngineConfig.
///
/// Maintained by hand to match the struct hierarchy in engine_config.rs.
pub fn known_config_keys() -> HashSet<String> {
    let fixed: &[&str] = &[
        // [training]
        "training",
        "training.seed",
        "training.samples_per_profile",
        "training.noise_fraction",
        "training.n_estimators",
        "training.max_depth",
        "training.min_samples_split",
        // [recommendation]
        "recommendation",
        "recommendation.top_k",
        // [input_limits]
        "input_limits",
    ];

    let mut keys: HashSet<String> = fixed.iter().map(|k| k.to_string()).collect();
    // [input_limits.<reading>] with min / max
    for reading in READINGS {
        keys.insert(format!("input_limits.{reading}"));
        keys.insert(format!("input_limits.{reading}.min"));
        keys.insert(format!("input_limits.{reading}.max"));
    }
    keys
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Equal distances resolve to the lexicographically smallest key so the
/// suggestion does not depend on set iteration order.
pub fn suggest_correction(unknown: &str, known: &HashSet<String>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.clone())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    let found = walk_toml_keys(&value, "");
    let mut warnings = Vec::new();

    for key in &found {
        if !known.contains(key.as_str()) {
            let suggestion = suggest_correction(key, &known);
            let message = format!("Unknown config key '{key}'");
            warnings.push(ValidationWarning {
                field: key.clone(),
                message,
                suggestion,
            });
        }
    }

    warnings
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed EngineConfig.
///
/// Returns (errors, warnings): errors are impossible values that must
/// prevent startup; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(
    config: &super::EngineConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let limits = &config.input_limits;

    // Nutrients and rainfall are amounts: never negative
    for (name, bounds) in [
        ("n", &limits.n),
        ("p", &limits.p),
        ("k", &limits.k),
        ("rainfall", &limits.rainfall),
    ] {
        if bounds.min < 0.0 {
            errors.push(format!(
                "input_limits.{name}.min ({:.1}) cannot be negative",
                bounds.min
            ));
        }
    }

    // Relative humidity is a percentage
    if limits.humidity.min < 0.0 || limits.humidity.max > HUMIDITY_MAX_PERCENT {
        errors.push(format!(
            "input_limits.humidity ({:.1}-{:.1}) must lie within 0-100%",
            limits.humidity.min, limits.humidity.max
        ));
    }

    // pH scale
    if limits.ph.min < PH_MIN || limits.ph.max > PH_MAX {
        errors.push(format!(
            "input_limits.ph ({:.1}-{:.1}) must lie within 0-14",
            limits.ph.min, limits.ph.max
        ));
    }

    // Limits that cut into the authored baselines reject readings the
    // classifier was trained on
    let envelope = knowledge_base::feature_envelope(0.0);
    for ((name, bounds), (lo, hi)) in limits.named().into_iter().zip(envelope) {
        if bounds.min > lo || bounds.max < hi {
            warnings.push(ValidationWarning {
                field: format!("input_limits.{name}"),
                message: format!(
                    "input_limits.{name} ({:.1}-{:.1}) excludes part of the crop baseline range ({:.1}-{:.1})",
                    bounds.min, bounds.max, lo, hi
                ),
                suggestion: None,
            });
        }
    }

    // Noise wider than ±30% blurs neighbouring crop profiles together
    let noise = config.training.noise_fraction;
    if noise > 0.3 && noise < 1.0 {
        warnings.push(ValidationWarning {
            field: "training.noise_fraction".to_string(),
            message: format!(
                "training.noise_fraction = {noise:.2} is unusually wide (typical 0.05-0.20)"
            ),
            suggestion: None,
        });
    }

    // A handful of trees gives coarse, step-like probabilities
    let trees = config.training.n_estimators;
    if trees > 0 && trees < 10 {
        warnings.push(ValidationWarning {
            field: "training.n_estimators".to_string(),
            message: format!("training.n_estimators = {trees} gives coarse probabilities"),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bounds, EngineConfig};

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("n_estimaters", "n_estimators"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [input_limits.ph]
            min = 3.5
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert!(keys.contains(&"input_limits".to_string()));
        assert!(keys.contains(&"input_limits.ph".to_string()));
        assert!(keys.contains(&"input_limits.ph.min".to_string()));
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let toml_str = r#"
[training]
n_estimaters = 50
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "training.n_estimaters");
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("training.n_estimators")
        );
    }

    #[test]
    fn test_all_valid_keys_produce_zero_warnings() {
        let toml_str = r#"
[training]
seed = 7
max_depth = 20

[recommendation]
top_k = 5

[input_limits.rainfall]
min = 0.0
max = 400.0
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_unknown_section_without_close_match() {
        let warnings = validate_unknown_keys("[dashboard]\ntheme = \"dark\"\n");
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.suggestion.is_none()));
    }

    #[test]
    fn test_known_keys_cover_every_reading() {
        let known = known_config_keys();
        for reading in READINGS {
            assert!(known.contains(&format!("input_limits.{reading}.max")));
        }
        assert!(known.contains("recommendation.top_k"));
    }

    #[test]
    fn test_physical_range_defaults_clean() {
        let (errors, warnings) = validate_physical_ranges(&EngineConfig::default());
        assert!(errors.is_empty(), "defaults should produce no errors: {errors:?}");
        assert!(warnings.is_empty(), "defaults should produce no warnings: {warnings:?}");
    }

    #[test]
    fn test_negative_nutrient_floor_is_error() {
        let mut config = EngineConfig::default();
        config.input_limits.k = Bounds::new(-1.0, 300.0);
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("input_limits.k.min")));
    }

    #[test]
    fn test_humidity_over_saturation_is_error() {
        let mut config = EngineConfig::default();
        config.input_limits.humidity = Bounds::new(0.0, 120.0);
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("humidity")));
    }

    #[test]
    fn test_narrow_limits_warn_about_baselines() {
        let mut config = EngineConfig::default();
        // rice baselines sit at 200+ mm
        config.input_limits.rainfall = Bounds::new(0.0, 150.0);
        let (errors, warnings) = validate_physical_ranges(&config);
        assert!(errors.is_empty());
        assert!(warnings.iter().any(|w| w.field == "input_limits.rainfall"));
    }

    #[test]
    fn test_wide_noise_warns() {
        let mut config = EngineConfig::default();
        config.training.noise_fraction = 0.5;
        let (_, warnings) = validate_physical_ranges(&config);
        assert!(warnings.iter().any(|w| w.field == "training.noise_fraction"));
    }
}
