//! Config Validation Tests
//!
//! Typo detection, range validation and file loading for `EngineConfig`,
//! exercised through the public API only.

use std::io::Write;

use cropwise::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use cropwise::config::{Bounds, ConfigError, EngineConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_training_section_warns_with_suggestion() {
    let toml_str = r#"
[training]
sede = 7
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("sede"));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("training.seed"));
}

#[test]
fn typo_in_limit_key_warns() {
    let toml_str = r#"
[input_limits.humidity]
mx = 95.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("input_limits.humidity.max")
    );
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[training]
seed = 42
samples_per_profile = 8
noise_fraction = 0.08
n_estimators = 150
max_depth = 16
min_samples_split = 3

[recommendation]
top_k = 5

[input_limits.n]
min = 0.0
max = 300.0

[input_limits.ph]
min = 3.5
max = 10.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(warnings.is_empty(), "Unexpected warnings: {warnings:?}");
}

#[test]
fn garbage_key_has_no_suggestion() {
    let known = known_config_keys();
    assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn defaults_pass_range_validation() {
    let (errors, warnings) = validate_physical_ranges(&EngineConfig::default());
    assert!(errors.is_empty(), "{errors:?}");
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn ph_outside_scale_is_error() {
    let mut config = EngineConfig::default();
    config.input_limits.ph = Bounds::new(-1.0, 14.0);
    let (errors, _) = validate_physical_ranges(&config);
    assert!(errors.iter().any(|e| e.contains("input_limits.ph")));
}

#[test]
fn few_trees_warns_but_validates() {
    let mut config = EngineConfig::default();
    config.training.n_estimators = 3;
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty());
    assert!(warnings.iter().any(|w| w.field == "training.n_estimators"));
    assert!(config.validate().is_ok());
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_applies_values() {
    let file = write_config(
        r#"
[training]
seed = 7
n_estimators = 40

[recommendation]
top_k = 5
"#,
    );
    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.training.seed, 7);
    assert_eq!(config.training.n_estimators, 40);
    assert_eq!(config.training.samples_per_profile, 5);
    assert_eq!(config.recommendation.top_k, 5);
    assert_eq!(config.forest_params().seed, 7);
}

#[test]
fn load_from_file_rejects_invalid_values() {
    let file = write_config(
        r#"
[training]
samples_per_profile = 0

[input_limits.humidity]
min = 0.0
max = 140.0
"#,
    );
    match EngineConfig::load_from_file(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("samples_per_profile")));
            assert!(errors.iter().any(|e| e.contains("humidity")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn load_from_file_reports_parse_errors() {
    let file = write_config("[training]\nseed = \"forty-two\"\n");
    assert!(matches!(
        EngineConfig::load_from_file(file.path()),
        Err(ConfigError::Parse(..))
    ));
}

#[test]
fn missing_explicit_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        EngineConfig::load_or_search(Some(&missing)),
        Err(ConfigError::Io(..))
    ));
}

#[test]
fn saved_config_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cropwise.toml");
    let mut config = EngineConfig::default();
    config.training.max_depth = Some(10);
    config.input_limits.rainfall = Bounds::new(0.0, 3000.0);

    config.save_to_file(&path).unwrap();
    assert_eq!(EngineConfig::load_from_file(&path).unwrap(), config);
}
