//! Synthetic Training Data from Authored Crop Profiles
//!
//! Each profile is expanded into a fixed number of noisy samples. Every
//! feature of every sample gets its own multiplicative factor drawn uniformly
//! from `[1 - noise, 1 + noise]`, and the result is rounded to one decimal.
//!
//! The RNG is a `StdRng` seeded once per `generate()` call, so a given seed
//! always reproduces the same table within a build.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::knowledge_base;
use crate::types::{CropProfile, Sample, TrainingSet, NUM_FEATURES};

/// Default seed for dataset synthesis and forest fitting
pub const DEFAULT_SEED: u64 = 42;
/// Samples generated per authored profile
pub const DEFAULT_SAMPLES_PER_PROFILE: usize = 5;
/// Half-width of the multiplicative noise band (0.10 = ±10%)
pub const DEFAULT_NOISE_FRACTION: f64 = 0.10;

/// Feature slots that must never go negative: N, P, K, humidity, rainfall.
const NON_NEGATIVE: [bool; NUM_FEATURES] = [true, true, true, false, true, false, true];

/// Expands crop profiles into a labeled, noised [`TrainingSet`].
#[derive(Debug, Clone)]
pub struct DatasetSynthesizer<'a> {
    profiles: &'a [CropProfile],
    seed: u64,
    samples_per_profile: usize,
    noise_fraction: f64,
}

impl Default for DatasetSynthesizer<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DatasetSynthesizer<'static> {
    /// Synthesizer over the bundled knowledge-base profiles.
    pub fn new(seed: u64) -> Self {
        Self::with_profiles(knowledge_base::profiles(), seed)
    }

    /// Synthesizer configured from the `[training]` config section.
    pub fn from_config(cfg: &crate::config::TrainingConfig) -> Self {
        Self::new(cfg.seed)
            .with_samples_per_profile(cfg.samples_per_profile)
            .with_noise_fraction(cfg.noise_fraction)
    }
}

impl<'a> DatasetSynthesizer<'a> {
    pub fn with_profiles(profiles: &'a [CropProfile], seed: u64) -> Self {
        Self {
            profiles,
            seed,
            samples_per_profile: DEFAULT_SAMPLES_PER_PROFILE,
            noise_fraction: DEFAULT_NOISE_FRACTION,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_samples_per_profile(mut self, n: usize) -> Self {
        self.samples_per_profile = n;
        self
    }

    pub fn with_noise_fraction(mut self, noise: f64) -> Self {
        self.noise_fraction = noise;
        self
    }

    /// Build a fresh training set. Never cached.
    pub fn generate(&self) -> TrainingSet {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let lo = 1.0 - self.noise_fraction;
        let hi = 1.0 + self.noise_fraction;

        let mut samples = Vec::with_capacity(self.profiles.len() * self.samples_per_profile);
        for profile in self.profiles {
            let base = profile.features();
            for _ in 0..self.samples_per_profile {
                let mut noisy = [0.0; NUM_FEATURES];
                for (i, value) in noisy.iter_mut().enumerate() {
                    let factor = if lo < hi { rng.gen_range(lo..=hi) } else { 1.0 };
                    let mut v = base[i] * factor;
                    if NON_NEGATIVE[i] {
                        v = v.max(0.0);
                    }
                    *value = round_to_tenth(v);
                }
                samples.push(Sample::from_features(profile.label, noisy));
            }
        }

        debug!(
            seed = self.seed,
            profiles = self.profiles.len(),
            samples = samples.len(),
            "Synthesized training set"
        );
        TrainingSet::new(samples)
    }
}

/// Synthesize the default training table from the bundled profiles.
pub fn synthesize_dataset(seed: u64) -> TrainingSet {
    DatasetSynthesizer::new(seed).generate()
}

fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
