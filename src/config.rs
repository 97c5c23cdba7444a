use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialized model weights.
pub const MODEL_FILE: &str = "model.json";
/// Fitted per-column scaler.
pub const SCALER_FILE: &str = "scaler.json";
/// Fitted gender label encoder.
pub const GENDER_ENCODER_FILE: &str = "label_encoder_gender.json";
/// Fitted geography one-hot encoder.
pub const GEOGRAPHY_ENCODER_FILE: &str = "onehot_encoder_geo.json";

/// Every artifact a prediction needs. All must be present before any
/// submission is served.
pub const REQUIRED_ARTIFACTS: [&str; 4] = [
    MODEL_FILE,
    SCALER_FILE,
    GENDER_ENCODER_FILE,
    GEOGRAPHY_ENCODER_FILE,
];

/// Where the pretrained artifacts live. Filenames within the directory are
/// fixed; only the directory itself is configurable.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ArtifactConfig {
    pub artifact_dir: PathBuf,
}

impl ArtifactConfig {
    pub fn new<P: AsRef<Path>>(artifact_dir: P) -> Self {
        Self {
            artifact_dir: artifact_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of one of the fixed artifact filenames.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.artifact_dir.join(name)
    }

    /// Names of required artifacts that are absent from the directory.
    pub fn missing_artifacts(&self) -> Vec<String> {
        REQUIRED_ARTIFACTS
            .iter()
            .filter(|name| !self.path_of(name).exists())
            .map(|name| name.to_string())
            .collect()
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("."),
        }
    }
}
