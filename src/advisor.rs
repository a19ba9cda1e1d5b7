//! Field advisor: one call from readings to a complete report.
//!
//! ```text
//! FieldReadings ──validate──► CropModel::predict ──top-k──► top crop
//!                                                             │
//!                      NutrientReport ◄── analyze(N,P,K, top crop)
//!                      Fertilizers    ◄── recommend_fertilizer(N,P,K, top crop)
//! ```
//!
//! The report is plain serializable data for downstream presentation (forms,
//! charts, PDF, email). The advisor holds no mutable state; the same readings
//! against the same model always produce the same report.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, InputLimits};
use crate::fertilizer::{analyze, recommend_fertilizer};
use crate::knowledge_base;
use crate::ml_engine::synthesizer::DEFAULT_NOISE_FRACTION;
use crate::ml_engine::CropModel;
use crate::types::{
    CropInfo, FertilizerRecommendation, FieldReadings, NutrientReport, ReadingsError,
    FEATURE_NAMES, NUM_FEATURES,
};

/// One ranked crop with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropCandidate {
    pub label: String,
    pub probability: f64,
    /// Absent when the label has no knowledge-base entry
    pub info: Option<&'static CropInfo>,
}

impl CropCandidate {
    pub fn confidence_percent(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Everything downstream sinks need for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub readings: FieldReadings,
    /// Highest probability first
    pub top_crops: Vec<CropCandidate>,
    /// Nutrient status against the top crop's targets
    pub nutrient_report: NutrientReport,
    /// Primary first, optional crop-suited secondary after it
    pub fertilizers: Vec<FertilizerRecommendation>,
    /// Readings that lie outside the range the model was trained on
    pub warnings: Vec<String>,
    pub summary: String,
}

impl FieldReport {
    pub fn top_crop(&self) -> Option<&CropCandidate> {
        self.top_crops.first()
    }

    pub fn primary_fertilizer(&self) -> Option<&FertilizerRecommendation> {
        self.fertilizers.first()
    }
}

/// Runs the full recommendation flow against a fitted model.
#[derive(Debug, Clone)]
pub struct FieldAdvisor {
    model: Arc<CropModel>,
    top_k: usize,
    limits: InputLimits,
    envelope: [(f64, f64); NUM_FEATURES],
}

impl FieldAdvisor {
    pub fn new(model: Arc<CropModel>, top_k: usize) -> Self {
        Self {
            model,
            top_k: top_k.max(1),
            limits: InputLimits::default(),
            envelope: knowledge_base::feature_envelope(DEFAULT_NOISE_FRACTION),
        }
    }

    /// Advisor using `[recommendation]`, `[input_limits]` and the training
    /// noise band from `config`.
    pub fn from_config(model: Arc<CropModel>, config: &EngineConfig) -> Self {
        Self::new(model, config.recommendation.top_k)
            .with_limits(config.input_limits.clone())
            .with_noise_fraction(config.training.noise_fraction)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_noise_fraction(mut self, noise_fraction: f64) -> Self {
        self.envelope = knowledge_base::feature_envelope(noise_fraction);
        self
    }

    pub fn model(&self) -> &CropModel {
        &self.model
    }

    /// Validate the readings, then rank crops and recommend fertilizers for
    /// the most probable one.
    pub fn advise(&self, readings: &FieldReadings) -> Result<FieldReport, ReadingsError> {
        readings.validate(&self.limits)?;

        let features = readings.to_features();
        let top_crops: Vec<CropCandidate> = self
            .model
            .top_k(&features, self.top_k)
            .into_iter()
            .map(|p| CropCandidate {
                info: knowledge_base::crop_info(&p.label),
                label: p.label,
                probability: p.probability,
            })
            .collect();

        let top_label = top_crops.first().map(|c| c.label.as_str());
        let nutrient_report = analyze(readings.n, readings.p, readings.k, top_label);
        let fertilizers = recommend_fertilizer(readings.n, readings.p, readings.k, top_label);
        let warnings = self.envelope_warnings(readings);
        let summary = summarize(top_crops.first(), fertilizers.first());

        debug!(
            top_crop = top_label.unwrap_or("-"),
            fertilizer = fertilizers.first().map_or("-", |f| f.fertilizer.as_str()),
            warnings = warnings.len(),
            "Field advice assembled"
        );

        Ok(FieldReport {
            readings: *readings,
            top_crops,
            nutrient_report,
            fertilizers,
            warnings,
            summary,
        })
    }

    fn envelope_warnings(&self, readings: &FieldReadings) -> Vec<String> {
        FEATURE_NAMES
            .iter()
            .zip(readings.to_features())
            .zip(self.envelope)
            .filter(|((_, value), (lo, hi))| value < lo || value > hi)
            .map(|((name, value), (lo, hi))| {
                format!(
                    "{name} = {value:.1} is outside the trained range ({lo:.1}-{hi:.1}); \
                     ranking there is an extrapolation"
                )
            })
            .collect()
    }
}

/// One-paragraph summary: top crop with confidence, then the primary
/// fertilizer and its rationale.
fn summarize(top: Option<&CropCandidate>, primary: Option<&FertilizerRecommendation>) -> String {
    let mut text = match top {
        Some(c) => format!(
            "Based on your field conditions, we recommend {} as the optimal crop \
             with a confidence of {:.1}%.",
            c.label,
            c.confidence_percent()
        ),
        None => "No crop could be ranked for these field conditions.".to_string(),
    };
    if let Some(f) = primary {
        text.push_str(&format!(
            " To optimize growth, we recommend using {} as the primary fertilizer. {}",
            f.fertilizer, f.rationale
        ));
    }
    text
}
