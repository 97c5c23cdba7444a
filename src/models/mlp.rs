use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::error::PredictError;
use crate::models::classifier_trait::ChurnClassifier;

/// Per-layer activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
}

impl Activation {
    fn apply(self, z: f32) -> f32 {
        match self {
            Activation::Relu => z.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-z).exp()),
        }
    }
}

/// One dense layer. Weights are stored `(outputs, inputs)` so the forward
/// pass is `w.dot(x) + b`.
#[derive(Debug, Clone)]
struct DenseLayer {
    weights: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

/// Pretrained feed-forward classifier with a single sigmoid output unit.
///
/// Deserialized from the model artifact; the raw representation is
/// validated during deserialization so a malformed artifact fails at load
/// time, not per submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawMlp")]
pub struct MlpClassifier {
    layers: Vec<DenseLayer>,
}

#[derive(Debug, Deserialize)]
struct RawMlp {
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
struct RawLayer {
    /// Row-major, one row per output unit.
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
    activation: Activation,
}

impl TryFrom<RawMlp> for MlpClassifier {
    type Error = PredictError;

    fn try_from(raw: RawMlp) -> Result<Self, Self::Error> {
        if raw.layers.is_empty() {
            return Err(PredictError::MalformedModel("no layers".to_string()));
        }

        let mut layers = Vec::with_capacity(raw.layers.len());
        let mut prev_width: Option<usize> = None;

        for (idx, layer) in raw.layers.into_iter().enumerate() {
            let rows = layer.weights.len();
            if rows == 0 {
                return Err(PredictError::MalformedModel(format!(
                    "layer {} has no output units",
                    idx
                )));
            }
            let cols = layer.weights[0].len();
            if cols == 0 {
                return Err(PredictError::MalformedModel(format!(
                    "layer {} has no input columns",
                    idx
                )));
            }
            if layer.weights.iter().any(|row| row.len() != cols) {
                return Err(PredictError::MalformedModel(format!(
                    "layer {} has ragged weight rows",
                    idx
                )));
            }
            if layer.bias.len() != rows {
                return Err(PredictError::MalformedModel(format!(
                    "layer {} has {} bias terms for {} output units",
                    idx,
                    layer.bias.len(),
                    rows
                )));
            }
            if let Some(prev) = prev_width {
                if cols != prev {
                    return Err(PredictError::MalformedModel(format!(
                        "layer {} expects {} inputs but the previous layer emits {}",
                        idx, cols, prev
                    )));
                }
            }
            prev_width = Some(rows);

            let flat: Vec<f32> = layer.weights.into_iter().flatten().collect();
            let weights = Array2::from_shape_vec((rows, cols), flat)
                .map_err(|e| PredictError::MalformedModel(e.to_string()))?;
            layers.push(DenseLayer {
                weights,
                bias: Array1::from_vec(layer.bias),
                activation: layer.activation,
            });
        }

        // One probability out, squashed to [0, 1].
        let last = layers.last().expect("validated non-empty");
        if last.weights.nrows() != 1 {
            return Err(PredictError::MalformedModel(format!(
                "output layer emits {} values, expected 1",
                last.weights.nrows()
            )));
        }
        if last.activation != Activation::Sigmoid {
            return Err(PredictError::MalformedModel(
                "output layer activation must be sigmoid".to_string(),
            ));
        }

        Ok(MlpClassifier { layers })
    }
}

impl ChurnClassifier for MlpClassifier {
    fn input_width(&self) -> usize {
        self.layers[0].weights.ncols()
    }

    fn predict_proba(&self, features: &[f32]) -> f32 {
        debug_assert_eq!(features.len(), self.input_width());

        let mut x = Array1::from_vec(features.to_vec());
        for layer in &self.layers {
            let mut z = layer.weights.dot(&x) + &layer.bias;
            z.mapv_inplace(|v| layer.activation.apply(v));
            x = z;
        }
        x[0]
    }

    fn name(&self) -> &str {
        "mlp"
    }
}
