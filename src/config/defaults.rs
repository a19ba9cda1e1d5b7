//! System-wide default constants.
//!
//! Training defaults live beside the code that uses them
//! (`ml_engine::synthesizer`, `ml_engine::classifier`); this module holds the
//! rest, grouped by subsystem.

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable naming a config file path.
pub const CONFIG_ENV_VAR: &str = "CROPWISE_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "cropwise.toml";

// ============================================================================
// Recommendation
// ============================================================================

/// Number of ranked crops returned to the caller.
pub const DEFAULT_TOP_K: usize = 3;

// ============================================================================
// Input Limits (physically possible ranges)
// ============================================================================

/// Soil nutrient ceiling (kg/ha). Applies to N, P and K.
pub const NUTRIENT_MAX_KG_HA: f64 = 500.0;

pub const TEMPERATURE_MIN_C: f64 = -10.0;
pub const TEMPERATURE_MAX_C: f64 = 60.0;

pub const HUMIDITY_MAX_PERCENT: f64 = 100.0;

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// Annual rainfall ceiling (mm).
pub const RAINFALL_MAX_MM: f64 = 5_000.0;
