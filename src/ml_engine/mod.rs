//! ML Engine for Crop Recommendation
//!
//! Turns the authored crop profiles into a labeled training table and fits a
//! seeded random-forest classifier over the seven field features.
//!
//! ## Architecture
//! - `synthesizer`: Profile expansion with ±10% multiplicative noise
//! - `label_encoder`: Crop label ↔ class index, first-seen order
//! - `tree`: Gini CART base learner with per-node feature subsampling
//! - `forest`: Bootstrap ensemble fitted in parallel (rayon)
//! - `classifier`: `train` / `predict` / `top_k` over an explicit `CropModel`
//! - `model_cache`: Reuse of fitted models keyed by data fingerprint

pub mod synthesizer;
pub mod label_encoder;
pub mod tree;
pub mod forest;
pub mod classifier;
pub mod model_cache;

// Re-export public types
pub use synthesizer::{synthesize_dataset, DatasetSynthesizer, DEFAULT_SEED};
pub use label_encoder::LabelEncoder;
pub use classifier::{predict, top_k, train, train_with, ClassifierError, CropModel, ForestParams};
pub use model_cache::ModelCache;
