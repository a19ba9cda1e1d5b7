//! Crop-side types: authored profiles, noised samples, training sets, predictions.

use serde::{Deserialize, Serialize};

/// Number of numeric features fed to the classifier.
pub const NUM_FEATURES: usize = 7;

/// Feature names in the order they appear in a feature vector.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Ordered feature vector: `[N, P, K, temperature, humidity, pH, rainfall]`.
pub type Features = [f64; NUM_FEATURES];

/// Authored agronomic baseline for one cultivation variant of a crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    pub label: &'static str,
    /// Soil nitrogen (kg/ha)
    pub n: u32,
    /// Soil phosphorus (kg/ha)
    pub p: u32,
    /// Soil potassium (kg/ha)
    pub k: u32,
    /// Mean temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    pub ph: f64,
    /// Rainfall (mm)
    pub rainfall: f64,
}

impl CropProfile {
    pub fn features(&self) -> Features {
        [
            f64::from(self.n),
            f64::from(self.p),
            f64::from(self.k),
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// A noised instantiation of a [`CropProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl Sample {
    pub fn from_features(label: &str, f: Features) -> Self {
        Self {
            label: label.to_string(),
            n: f[0],
            p: f[1],
            k: f[2],
            temperature: f[3],
            humidity: f[4],
            ph: f[5],
            rainfall: f[6],
        }
    }

    pub fn features(&self) -> Features {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// Ordered collection of samples produced by one synthesis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    pub samples: Vec<Sample>,
}

impl TrainingSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for s in &self.samples {
            if !seen.contains(&s.label.as_str()) {
                seen.push(&s.label);
            }
        }
        seen
    }

    /// Content hash of the set (labels plus the exact bit patterns of every
    /// feature), hex-encoded. Equal sets always share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut ctx = md5::Context::new();
        for s in &self.samples {
            ctx.consume(s.label.as_bytes());
            ctx.consume([0u8]);
            for v in s.features() {
                ctx.consume(v.to_bits().to_le_bytes());
            }
        }
        format!("{:x}", ctx.compute())
    }
}

/// Descriptive metadata for a crop, used only for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropInfo {
    pub label: &'static str,
    pub description: &'static str,
    pub growing_season: &'static str,
    pub ideal_temp: &'static str,
    pub ideal_ph: &'static str,
    pub water_needs: &'static str,
}

/// Probability assigned to one crop class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub probability: f64,
}

impl Prediction {
    pub fn confidence_percent(&self) -> f64 {
        self.probability * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: &str, n: f64) -> Sample {
        Sample::from_features(label, [n, 40.0, 40.0, 23.0, 80.0, 6.5, 200.0])
    }

    #[test]
    fn test_labels_keep_first_appearance_order() {
        let set = TrainingSet::new(vec![
            sample("rice", 80.0),
            sample("maize", 85.0),
            sample("rice", 81.0),
            sample("wheat", 75.0),
        ]);
        assert_eq!(set.labels(), vec!["rice", "maize", "wheat"]);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = TrainingSet::new(vec![sample("rice", 80.0)]);
        let b = TrainingSet::new(vec![sample("rice", 80.0)]);
        let c = TrainingSet::new(vec![sample("rice", 80.1)]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_feature_round_trip_order() {
        let s = sample("rice", 80.0);
        assert_eq!(s.features()[0], 80.0);
        assert_eq!(s.features()[6], 200.0);
        assert_eq!(FEATURE_NAMES[5], "ph");
    }
}
