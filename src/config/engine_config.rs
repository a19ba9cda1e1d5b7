//! Engine Configuration - training, ranking and input limits as TOML values
//!
//! Every field has a `Default` equal to the built-in constant, so an absent
//! or partial config file reproduces the stock behavior.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    CONFIG_ENV_VAR, DEFAULT_TOP_K, HUMIDITY_MAX_PERCENT, LOCAL_CONFIG_FILE, NUTRIENT_MAX_KG_HA,
    PH_MAX, PH_MIN, RAINFALL_MAX_MM, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
};
use crate::ml_engine::classifier::{DEFAULT_MIN_SAMPLES_SPLIT, DEFAULT_N_ESTIMATORS};
use crate::ml_engine::synthesizer::{
    DEFAULT_NOISE_FRACTION, DEFAULT_SAMPLES_PER_PROFILE, DEFAULT_SEED,
};
use crate::ml_engine::{DatasetSynthesizer, ForestParams};
use crate::types::NUM_FEATURES;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the recommendation engine.
///
/// Load with `EngineConfig::load()` which searches:
/// 1. `$CROPWISE_CONFIG` env var
/// 2. `./cropwise.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dataset synthesis and forest fitting
    #[serde(default)]
    pub training: TrainingConfig,

    /// Ranking output
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// Accepted ranges for caller-supplied readings
    #[serde(default)]
    pub input_limits: InputLimits,
}

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$CROPWISE_CONFIG` environment variable
    /// 2. `./cropwise.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded engine config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./cropwise.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded engine config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from an explicitly requested path, or fall back to [`load`](Self::load).
    ///
    /// An explicit path that cannot be loaded is an error rather than a
    /// silent fallback.
    pub fn load_or_search(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                let config = Self::load_from_file(p)?;
                info!(path = %p.display(), "Loaded engine config");
                Ok(config)
            }
            None => Ok(Self::load()),
        }
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        // Two-pass: check for unknown keys first (warnings only)
        let typo_warnings = super::validation::validate_unknown_keys(&contents);
        for w in &typo_warnings {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Engine config saved");
        Ok(())
    }

    /// Validate all values for internal consistency.
    ///
    /// Rules:
    /// - Counts (samples, trees, top_k) must be > 0
    /// - Noise fraction must lie in [0, 1)
    /// - Every input-limit range must be finite with min < max
    /// - Input limits must stay within physical bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let t = &self.training;
        if t.samples_per_profile == 0 {
            errors.push("training.samples_per_profile must be > 0".to_string());
        }
        if !t.noise_fraction.is_finite() || !(0.0..1.0).contains(&t.noise_fraction) {
            errors.push(format!(
                "training.noise_fraction ({}) must be in [0, 1)",
                t.noise_fraction
            ));
        }
        if t.n_estimators == 0 {
            errors.push("training.n_estimators must be > 0".to_string());
        }
        if t.max_depth == Some(0) {
            errors.push("training.max_depth must be > 0 when set".to_string());
        }
        if t.min_samples_split < 2 {
            errors.push(format!(
                "training.min_samples_split ({}) must be >= 2",
                t.min_samples_split
            ));
        }

        if self.recommendation.top_k == 0 {
            errors.push("recommendation.top_k must be > 0".to_string());
        }

        for (name, bounds) in self.input_limits.named() {
            Self::check_bounds(bounds, name, &mut errors);
        }

        // Physical range validation
        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_bounds(bounds: &Bounds, name: &str, errors: &mut Vec<String>) {
        // NaN/Inf comparisons silently pass; catch them explicitly
        if !bounds.min.is_finite() || !bounds.max.is_finite() {
            errors.push(format!(
                "input_limits.{name}: bounds must be finite (got min={}, max={})",
                bounds.min, bounds.max
            ));
            return;
        }
        if bounds.min >= bounds.max {
            errors.push(format!(
                "input_limits.{name}: min ({:.2}) must be < max ({:.2})",
                bounds.min, bounds.max
            ));
        }
    }

    /// Forest parameters from the `[training]` section.
    pub fn forest_params(&self) -> ForestParams {
        ForestParams::from_config(&self.training)
    }

    /// Dataset synthesizer over the bundled profiles, from `[training]`.
    pub fn synthesizer(&self) -> DatasetSynthesizer<'static> {
        DatasetSynthesizer::from_config(&self.training)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n{}", bullet_list(.0))]
    Validation(Vec<String>),
}

fn bullet_list(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Training
// ============================================================================

/// Dataset synthesis and random-forest settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Seed for both dataset noise and forest bootstrap
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Noisy samples generated from each authored profile
    #[serde(default = "default_samples_per_profile")]
    pub samples_per_profile: usize,

    /// Half-width of the multiplicative noise band (0.10 = ±10%)
    #[serde(default = "default_noise_fraction")]
    pub noise_fraction: f64,

    /// Trees in the forest
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,

    /// Depth cap per tree; unset grows until leaves are pure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_samples_per_profile() -> usize {
    DEFAULT_SAMPLES_PER_PROFILE
}
fn default_noise_fraction() -> f64 {
    DEFAULT_NOISE_FRACTION
}
fn default_n_estimators() -> usize {
    DEFAULT_N_ESTIMATORS
}
fn default_min_samples_split() -> usize {
    DEFAULT_MIN_SAMPLES_SPLIT
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            samples_per_profile: default_samples_per_profile(),
            noise_fraction: default_noise_fraction(),
            n_estimators: default_n_estimators(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
        }
    }
}

// ============================================================================
// Recommendation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Ranked crops returned per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

// ============================================================================
// Input Limits
// ============================================================================

/// Inclusive accepted range for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Accepted ranges for each of the seven field readings.
///
/// Defaults are physical possibility, not agronomic plausibility: negative
/// nutrients or rainfall, humidity above 100% and pH outside 0-14 are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    #[serde(default = "default_nutrient_bounds")]
    pub n: Bounds,
    #[serde(default = "default_nutrient_bounds")]
    pub p: Bounds,
    #[serde(default = "default_nutrient_bounds")]
    pub k: Bounds,
    #[serde(default = "default_temperature_bounds")]
    pub temperature: Bounds,
    #[serde(default = "default_humidity_bounds")]
    pub humidity: Bounds,
    #[serde(default = "default_ph_bounds")]
    pub ph: Bounds,
    #[serde(default = "default_rainfall_bounds")]
    pub rainfall: Bounds,
}

fn default_nutrient_bounds() -> Bounds {
    Bounds::new(0.0, NUTRIENT_MAX_KG_HA)
}
fn default_temperature_bounds() -> Bounds {
    Bounds::new(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C)
}
fn default_humidity_bounds() -> Bounds {
    Bounds::new(0.0, HUMIDITY_MAX_PERCENT)
}
fn default_ph_bounds() -> Bounds {
    Bounds::new(PH_MIN, PH_MAX)
}
fn default_rainfall_bounds() -> Bounds {
    Bounds::new(0.0, RAINFALL_MAX_MM)
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            n: default_nutrient_bounds(),
            p: default_nutrient_bounds(),
            k: default_nutrient_bounds(),
            temperature: default_temperature_bounds(),
            humidity: default_humidity_bounds(),
            ph: default_ph_bounds(),
            rainfall: default_rainfall_bounds(),
        }
    }
}

impl InputLimits {

    /// Bounds keyed by their config field name, in feature-vector order.
    pub fn named(&self) -> [(&'static str, &Bounds); NUM_FEATURES] {
        [
            ("n", &self.n),
            ("p", &self.p),
            ("k", &self.k),
            ("temperature", &self.temperature),
            ("humidity", &self.humidity),
            ("ph", &self.ph),
            ("rainfall", &self.rainfall),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_training_values() {
        let t = TrainingConfig::default();
        assert_eq!(t.seed, 42);
        assert_eq!(t.samples_per_profile, 5);
        assert_eq!(t.noise_fraction, 0.10);
        assert_eq!(t.n_estimators, 100);
        assert_eq!(t.max_depth, None);
        assert_eq!(t.min_samples_split, 2);
        assert_eq!(EngineConfig::default().recommendation.top_k, 3);
    }

    #[test]
    fn test_default_config_matches_default_forest() {
        assert_eq!(EngineConfig::default().forest_params(), ForestParams::default());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
[training]
n_estimators = 25

[input_limits.ph]
min = 3.5
max = 10.0
"#,
        )
        .unwrap();
        assert_eq!(config.training.n_estimators, 25);
        assert_eq!(config.training.seed, 42);
        assert_eq!(config.input_limits.ph, Bounds::new(3.5, 10.0));
        assert_eq!(config.input_limits.n, Bounds::new(0.0, 500.0));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EngineConfig::default();
        config.training.max_depth = Some(12);
        let text = config.to_toml().unwrap();
        let back: EngineConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = EngineConfig::default();
        config.training.n_estimators = 0;
        config.training.noise_fraction = 1.5;
        config.recommendation.top_k = 0;
        config.input_limits.temperature = Bounds::new(40.0, 10.0);

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.len() >= 4, "got {errors:?}");
                assert!(errors.iter().any(|e| e.contains("n_estimators")));
                assert!(errors.iter().any(|e| e.contains("noise_fraction")));
                assert!(errors.iter().any(|e| e.contains("top_k")));
                assert!(errors.iter().any(|e| e.contains("input_limits.temperature")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_bound_rejected() {
        let mut config = EngineConfig::default();
        config.input_limits.rainfall = Bounds::new(0.0, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_named_limits_follow_feature_order() {
        let limits = InputLimits::default();
        let named = limits.named();
        assert_eq!(named[0], ("n", &Bounds::new(0.0, 500.0)));
        assert_eq!(named[4], ("humidity", &Bounds::new(0.0, 100.0)));
        assert_eq!(named[5].0, "ph");
        assert!(named[5].1.contains(14.0));
        assert!(!named[5].1.contains(14.1));
    }

    #[test]
    fn test_forest_params_from_training() {
        let mut config = EngineConfig::default();
        config.training.seed = 7;
        config.training.n_estimators = 12;
        let params = config.forest_params();
        assert_eq!(params.seed, 7);
        assert_eq!(params.n_estimators, 12);
    }
}
