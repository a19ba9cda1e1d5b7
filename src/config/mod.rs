//! Engine Configuration Module
//!
//! Training, ranking and input-limit settings loaded from TOML, with every
//! value defaulting to the built-in constant.
//!
//! ## Loading Order
//!
//! 1. `--config <path>` on the command line
//! 2. `CROPWISE_CONFIG` environment variable (path to TOML file)
//! 3. `cropwise.toml` in the current working directory
//! 4. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(EngineConfig::load());
//!
//! // Anywhere in the codebase:
//! let k = config::get().recommendation.top_k;
//! ```

mod engine_config;
pub mod defaults;
pub mod validation;

pub use engine_config::*;

use std::sync::OnceLock;

/// Global engine configuration, initialized once at startup.
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Initialize the global engine configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: EngineConfig) {
    if ENGINE_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global engine configuration.
///
/// Falls back to (and pins) the built-in defaults if `init()` was never
/// called.
pub fn get() -> &'static EngineConfig {
    if !is_initialized() {
        tracing::debug!("config::get() before config::init(), using defaults");
    }
    ENGINE_CONFIG.get_or_init(EngineConfig::default)
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    ENGINE_CONFIG.get().is_some()
}
