//! Field readings supplied by the caller, and boundary validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Features, FEATURE_NAMES};
use crate::config::InputLimits;

/// Rejected field readings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadingsError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// The seven environmental readings for a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldReadings {
    /// Soil nitrogen (kg/ha)
    pub n: f64,
    /// Soil phosphorus (kg/ha)
    pub p: f64,
    /// Soil potassium (kg/ha)
    pub k: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    pub ph: f64,
    /// Rainfall (mm)
    pub rainfall: f64,
}

impl FieldReadings {
    pub fn to_features(&self) -> Features {
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

    /// Reject non-finite or physically impossible readings.
    ///
    /// The engine itself does not re-check ranges; callers run this once at
    /// the boundary.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), ReadingsError> {
        for ((field, value), (_, bounds)) in FEATURE_NAMES
            .into_iter()
            .zip(self.to_features())
            .zip(limits.named())
        {
            if !value.is_finite() {
                return Err(ReadingsError::NotFinite { field, value });
            }
            if !bounds.contains(value) {
                return Err(ReadingsError::OutOfRange {
                    field,
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> FieldReadings {
        FieldReadings {
            n: 90.0,
            p: 42.0,
            k: 43.0,
            temperature: 20.9,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.9,
        }
    }

    #[test]
    fn test_valid_readings_pass() {
        assert!(readings().validate(&InputLimits::default()).is_ok());
    }

    #[test]
    fn test_negative_rainfall_rejected() {
        let r = FieldReadings { rainfall: -5.0, ..readings() };
        let err = r.validate(&InputLimits::default()).unwrap_err();
        assert!(matches!(err, ReadingsError::OutOfRange { field: "rainfall", .. }));
    }

    #[test]
    fn test_humidity_above_saturation_rejected() {
        let r = FieldReadings { humidity: 104.0, ..readings() };
        assert!(r.validate(&InputLimits::default()).is_err());
    }

    #[test]
    fn test_limits_are_inclusive() {
        let edge = FieldReadings { humidity: 100.0, ph: 0.0, ..readings() };
        assert!(edge.validate(&InputLimits::default()).is_ok());

        let mut limits = InputLimits::default();
        limits.temperature = crate::config::Bounds::new(25.0, 35.0);
        let err = readings().validate(&limits).unwrap_err();
        assert_eq!(
            err,
            ReadingsError::OutOfRange {
                field: "temperature",
                value: 20.9,
                min: 25.0,
                max: 35.0
            }
        );
    }

    #[test]
    fn test_nan_rejected() {
        let r = FieldReadings { ph: f64::NAN, ..readings() };
        let err = r.validate(&InputLimits::default()).unwrap_err();
        assert!(matches!(err, ReadingsError::NotFinite { field: "ph", .. }));
    }

    #[test]
    fn test_feature_order() {
        let f = readings().to_features();
        assert_eq!(f, [90.0, 42.0, 43.0, 20.9, 82.0, 6.5, 202.9]);
    }
}
