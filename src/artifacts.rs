//! Artifact loading.
//!
//! Reads the serialized model and the three fitted preprocessing transforms
//! from their fixed filenames, exactly once, and returns them as one
//! immutable bundle. A missing file is an operator error: the loader
//! collects every absent filename and fails before anything is
//! deserialized. There is no retry path.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::{
    ArtifactConfig, GENDER_ENCODER_FILE, GEOGRAPHY_ENCODER_FILE, MODEL_FILE, SCALER_FILE,
};
use crate::encoding::{LabelEncoder, OneHotEncoder};
use crate::error::PredictError;
use crate::features;
use crate::models::{ChurnClassifier, MlpClassifier};
use crate::preprocessing::StandardScaler;

/// Everything a prediction needs, loaded once at startup and shared
/// read-only by all submissions.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub model: MlpClassifier,
    pub scaler: StandardScaler,
    pub gender_encoder: LabelEncoder,
    pub geography_encoder: OneHotEncoder,
}

impl ArtifactBundle {
    /// Load and validate all artifacts from the configured directory.
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let missing = config.missing_artifacts();
        if !missing.is_empty() {
            return Err(PredictError::MissingArtifacts(missing).into());
        }

        let model: MlpClassifier = read_json(&config.path_of(MODEL_FILE))?;
        let scaler: StandardScaler = read_json(&config.path_of(SCALER_FILE))?;
        let gender_encoder: LabelEncoder = read_json(&config.path_of(GENDER_ENCODER_FILE))?;
        let geography_encoder: OneHotEncoder = read_json(&config.path_of(GEOGRAPHY_ENCODER_FILE))?;

        let bundle = Self {
            model,
            scaler,
            gender_encoder,
            geography_encoder,
        };
        bundle.validate()?;

        log::info!(
            "Loaded artifacts from {} ({} feature columns, geography vocabulary {:?})",
            config.artifact_dir.display(),
            bundle.scaler.width(),
            bundle.geography_encoder.categories(),
        );
        Ok(bundle)
    }

    /// Cross-check the fitted widths so per-submission code never sees a
    /// shape surprise: encoder columns, scaler columns and model inputs
    /// must all agree.
    fn validate(&self) -> Result<(), PredictError> {
        let expected = features::feature_count(&self.geography_encoder);
        if self.scaler.width() != expected {
            return Err(PredictError::FeatureWidthMismatch {
                expected,
                actual: self.scaler.width(),
            });
        }
        if self.model.input_width() != expected {
            return Err(PredictError::FeatureWidthMismatch {
                expected,
                actual: self.model.input_width(),
            });
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open artifact: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse artifact: {}", path.display()))
}
