//! CropWise: Crop and Fertilizer Recommendation Engine
//!
//! Recommends crops and fertilizers for a field from seven readings
//! (N, P, K, temperature, humidity, pH, rainfall).
//!
//! ## Architecture
//!
//! - **Knowledge Base**: Static crop profiles, crop metadata, fertilizer metadata
//! - **ML Engine**: Synthetic dataset generation and a seeded random-forest classifier
//! - **Fertilizer**: Crop-group nutrient targets and an ordered deficiency decision table
//! - **Advisor**: End-to-end flow producing a serializable `FieldReport`

pub mod config;
pub mod types;
pub mod knowledge_base;
pub mod ml_engine;
pub mod fertilizer;
pub mod advisor;

// Re-export engine configuration
pub use config::EngineConfig;

// Re-export commonly used types
pub use types::{
    CropInfo, CropProfile, Features, FertilizerInfo, FertilizerRecommendation, FieldReadings,
    NutrientReport, NutrientTarget, Prediction, ReadingsError, Sample, TrainingSet,
};

// Re-export ML Engine entry points
pub use ml_engine::{
    predict, synthesize_dataset, top_k, train, train_with, ClassifierError, CropModel,
    DatasetSynthesizer, ForestParams, ModelCache,
};

// Re-export fertilizer analysis
pub use fertilizer::{deficiency_percent, optimal_targets, recommend_fertilizer};

// Re-export advisor
pub use advisor::{CropCandidate, FieldAdvisor, FieldReport};
