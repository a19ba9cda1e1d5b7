//! Explicit cache of fitted models.
//!
//! Keyed by training-set fingerprint plus forest parameters, so a model is
//! only reused when it would have been fitted on identical data with
//! identical settings. Owned by the caller; there is no process-wide cache.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::classifier::{train_with, ClassifierError, CropModel, ForestParams};
use crate::types::TrainingSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    fingerprint: String,
    params: ForestParams,
}

#[derive(Debug, Default)]
pub struct ModelCache {
    models: HashMap<CacheKey, Arc<CropModel>>,
    hits: u64,
    misses: u64,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached model for `(set, params)`, fitting it on a miss.
    pub fn get_or_train(
        &mut self,
        set: &TrainingSet,
        params: &ForestParams,
    ) -> Result<Arc<CropModel>, ClassifierError> {
        let key = CacheKey {
            fingerprint: set.fingerprint(),
            params: *params,
        };

        if let Some(model) = self.models.get(&key) {
            self.hits += 1;
            debug!(fingerprint = %key.fingerprint, "Model cache hit");
            return Ok(Arc::clone(model));
        }

        self.misses += 1;
        debug!(fingerprint = %key.fingerprint, "Model cache miss, training");
        let model = Arc::new(train_with(set, params)?);
        self.models.insert(key, Arc::clone(&model));
        Ok(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml_engine::synthesize_dataset;

    fn quick() -> ForestParams {
        ForestParams {
            n_estimators: 5,
            ..ForestParams::default()
        }
    }

    #[test]
    fn test_same_inputs_share_model() {
        let mut cache = ModelCache::new();
        let set = synthesize_dataset(42);
        let a = cache.get_or_train(&set, &quick()).unwrap();
        let b = cache.get_or_train(&set, &quick()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_different_params_train_separately() {
        let mut cache = ModelCache::new();
        let set = synthesize_dataset(42);
        cache.get_or_train(&set, &quick()).unwrap();
        let other = ForestParams { seed: 7, ..quick() };
        cache.get_or_train(&set, &other).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_training_error_not_cached() {
        let mut cache = ModelCache::new();
        assert!(cache.get_or_train(&TrainingSet::default(), &quick()).is_err());
        assert!(cache.is_empty());
    }
}
