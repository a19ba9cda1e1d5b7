//! Crop classifier: label encoding + random forest, wrapped in an explicit model value.
//!
//! `train` returns a [`CropModel`] that owns its encoder and forest; `predict`
//! borrows it. Nothing is stored process-wide, so several models (different
//! seeds, different training sets) can coexist.
//!
//! ## Tie-breaking
//!
//! `predict` sorts by descending probability with a stable sort over classes
//! in label-encoding order, so equal probabilities keep the order in which
//! labels first appeared in the training set. `top_k` relies on the same rule.

use thiserror::Error;
use tracing::info;

use super::forest::RandomForest;
use super::label_encoder::LabelEncoder;
use super::synthesizer::DEFAULT_SEED;
use super::tree::{default_max_features, TreeParams};
use crate::types::{Features, Prediction, TrainingSet, FEATURE_NAMES, NUM_FEATURES};

/// Trees in the default forest
pub const DEFAULT_N_ESTIMATORS: usize = 100;

/// Smallest node that may still be split
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 2;

/// Training-data and parameter errors. Fatal for the training run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Sample {row} has a non-finite {feature} value")]
    NonFiniteFeature { row: usize, feature: &'static str },

    #[error("Invalid forest parameters: {0}")]
    InvalidParams(String),
}

/// Forest hyper-parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_N_ESTIMATORS,
            max_depth: None,
            min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT,
            seed: DEFAULT_SEED,
        }
    }
}

impl ForestParams {
    pub fn from_config(cfg: &crate::config::TrainingConfig) -> Self {
        Self {
            n_estimators: cfg.n_estimators,
            max_depth: cfg.max_depth,
            min_samples_split: cfg.min_samples_split,
            seed: cfg.seed,
        }
    }

    fn tree_params(&self) -> TreeParams {
        TreeParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            max_features: default_max_features(NUM_FEATURES),
        }
    }
}

/// A fitted crop classifier.
#[derive(Debug, Clone)]
pub struct CropModel {
    encoder: LabelEncoder,
    forest: RandomForest,
    training_accuracy: f64,
}

/// Fit a model with default parameters.
pub fn train(set: &TrainingSet) -> Result<CropModel, ClassifierError> {
    train_with(set, &ForestParams::default())
}

/// Fit a model with explicit parameters.
pub fn train_with(set: &TrainingSet, params: &ForestParams) -> Result<CropModel, ClassifierError> {
    if set.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }
    if params.n_estimators == 0 {
        return Err(ClassifierError::InvalidParams(
            "n_estimators must be > 0".to_string(),
        ));
    }

    let x: Vec<Features> = set.samples.iter().map(|s| s.features()).collect();
    for (row, features) in x.iter().enumerate() {
        if let Some(i) = features.iter().position(|v| !v.is_finite()) {
            return Err(ClassifierError::NonFiniteFeature {
                row,
                feature: FEATURE_NAMES[i],
            });
        }
    }

    let encoder = LabelEncoder::fit(set.samples.iter().map(|s| s.label.as_str()));
    // every label was just fed to the encoder
    let y: Vec<usize> = set
        .samples
        .iter()
        .filter_map(|s| encoder.encode(&s.label))
        .collect();

    let forest = RandomForest::fit(
        &x,
        &y,
        encoder.len(),
        params.n_estimators,
        &params.tree_params(),
        params.seed,
    );

    let mut model = CropModel {
        encoder,
        forest,
        training_accuracy: 0.0,
    };
    model.training_accuracy = model.accuracy(set);

    info!(
        samples = set.len(),
        classes = model.encoder.len(),
        trees = model.forest.n_trees(),
        max_depth = model.forest.max_depth(),
        accuracy = format!("{:.3}", model.training_accuracy),
        "Crop classifier trained"
    );

    Ok(model)
}

/// Full class distribution for `features`, highest probability first.
pub fn predict(model: &CropModel, features: &Features) -> Vec<Prediction> {
    model.predict(features)
}

/// First `k` entries of a prediction list after a stable descending sort.
///
/// Ties keep their relative input order; for lists produced by [`predict`]
/// that is label-encoding order.
pub fn top_k(predictions: &[Prediction], k: usize) -> Vec<Prediction> {
    let mut sorted = predictions.to_vec();
    sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    sorted.truncate(k);
    sorted
}

impl CropModel {
    pub fn predict(&self, features: &Features) -> Vec<Prediction> {
        let ranked = self.ranked_indices(features);
        ranked
            .into_iter()
            .filter_map(|(idx, probability)| {
                self.encoder.decode(idx).map(|label| Prediction {
                    label: label.to_string(),
                    probability,
                })
            })
            .collect()
    }

    /// Highest-probability `k` classes, ties broken by encoder index.
    pub fn top_k(&self, features: &Features, k: usize) -> Vec<Prediction> {
        let mut preds = self.predict(features);
        preds.truncate(k);
        preds
    }

    /// Most probable label.
    pub fn best(&self, features: &Features) -> Option<Prediction> {
        self.top_k(features, 1).into_iter().next()
    }

    /// Fraction of `set` whose arg-max prediction matches its label.
    pub fn accuracy(&self, set: &TrainingSet) -> f64 {
        if set.is_empty() {
            return 0.0;
        }
        let correct = set
            .samples
            .iter()
            .filter(|s| {
                self.best(&s.features())
                    .is_some_and(|p| p.label == s.label)
            })
            .count();
        correct as f64 / set.len() as f64
    }

    pub fn training_accuracy(&self) -> f64 {
        self.training_accuracy
    }

    pub fn classes(&self) -> &[String] {
        self.encoder.classes()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.encoder.encode(label)
    }

    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.encoder.decode(index)
    }

    pub fn n_trees(&self) -> usize {
        self.forest.n_trees()
    }

    fn ranked_indices(&self, features: &Features) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .forest
            .predict_proba(features)
            .into_iter()
            .enumerate()
            .collect();
        // stable: equal probabilities stay in encoder order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
