//! Fitted numeric preprocessing.
//!
//! Provides the standard scaler applied between feature assembly and the
//! model forward pass. The per-column mean/std come from training time and
//! arrive via deserialization; this module only ever transforms, it never
//! fits.

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Standard scaler (per-column mean/std), fitted at training time.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl StandardScaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f32 = 1e-6;

    /// Number of columns this scaler was fitted with.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Z-score a single feature vector.
    ///
    /// Fails when the vector width disagrees with the fitted columns, or
    /// when the artifact itself has mismatched mean/std lengths.
    pub fn transform(&self, features: &[f32]) -> Result<Vec<f32>, PredictError> {
        if self.std.len() != self.mean.len() {
            return Err(PredictError::MalformedModel(format!(
                "scaler has {} means but {} stds",
                self.mean.len(),
                self.std.len()
            )));
        }
        if features.len() != self.mean.len() {
            return Err(PredictError::FeatureWidthMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(&v, (&mean, &std))| (v - mean) / std.max(Self::MIN_STD))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_standardizes_each_column() {
        let scaler = StandardScaler {
            mean: vec![10.0, 0.0],
            std: vec![2.0, 1.0],
        };
        let out = scaler.transform(&[14.0, -3.0]).unwrap();
        assert_eq!(out, vec![2.0, -3.0]);
    }

    #[test]
    fn transform_guards_zero_std() {
        let scaler = StandardScaler {
            mean: vec![1.0],
            std: vec![0.0],
        };
        let out = scaler.transform(&[1.0]).unwrap();
        assert!(out[0].is_finite());
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn transform_rejects_width_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            std: vec![1.0, 1.0],
        };
        let err = scaler.transform(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            PredictError::FeatureWidthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
