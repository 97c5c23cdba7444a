use std::error::Error;
use std::fmt;

/// Custom error type for prediction pipeline failures
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// One or more required artifact files are absent (operator error, fatal).
    MissingArtifacts(Vec<String>),
    /// A categorical input was never seen when the encoder was fitted.
    UnknownCategory { field: String, value: String },
    /// A feature vector does not match the width an artifact was fitted with.
    FeatureWidthMismatch { expected: usize, actual: usize },
    /// A deserialized model artifact is internally inconsistent.
    MalformedModel(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PredictError::MissingArtifacts(names) => {
                write!(f, "Missing required artifact files: {}", names.join(", "))
            }
            PredictError::UnknownCategory { field, value } => {
                write!(
                    f,
                    "Unknown {} category '{}' (not in fitted vocabulary)",
                    field, value
                )
            }
            PredictError::FeatureWidthMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected a feature vector of width {}, got {}",
                    expected, actual
                )
            }
            PredictError::MalformedModel(reason) => {
                write!(f, "Malformed model artifact: {}", reason)
            }
        }
    }
}

impl Error for PredictError {}
