//! The per-submission prediction pipeline.
//!
//! One synchronous request/response cycle: assemble features, scale,
//! run the forward pass, band the probability, evaluate the explanation
//! rules. The scorer owns the immutable artifact bundle and holds no other
//! state, so repeated invocations with identical input are identical.

use crate::artifacts::ArtifactBundle;
use crate::error::PredictError;
use crate::explain::{self, RiskFlag};
use crate::features;
use crate::models::ChurnClassifier;
use crate::profile::CustomerProfile;
use crate::risk::{percent_of, RiskBand};

/// Outcome of one submission. Created per submission and discarded after
/// rendering, except for the exported report row.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Churn probability in [0, 1].
    pub probability: f32,
    /// Rounded percentage used for banding and display.
    pub percent: u8,
    pub band: RiskBand,
    /// Triggered rule flags, in fixed evaluation order.
    pub flags: Vec<RiskFlag>,
    pub recommendation: &'static str,
}

pub struct ChurnScorer {
    artifacts: ArtifactBundle,
}

impl ChurnScorer {
    pub fn new(artifacts: ArtifactBundle) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &ArtifactBundle {
        &self.artifacts
    }

    /// Score one customer submission.
    pub fn predict(&self, profile: &CustomerProfile) -> Result<Prediction, PredictError> {
        let features = features::assemble(
            profile,
            &self.artifacts.gender_encoder,
            &self.artifacts.geography_encoder,
        )?;
        log::debug!("Assembled feature vector: {:?}", features);

        let scaled = self.artifacts.scaler.transform(&features)?;
        log::debug!("Scaled feature vector: {:?}", scaled);

        let probability = self.artifacts.model.predict_proba(&scaled);
        let percent = percent_of(probability);
        let band = RiskBand::from_percent(percent);
        let flags = explain::risk_flags(profile);
        let recommendation = explain::recommendation(percent);

        log::info!(
            "Churn probability {:.4} ({}%), {} with {} risk factor(s)",
            probability,
            percent,
            band.label(),
            flags.len()
        );

        Ok(Prediction {
            probability,
            percent,
            band,
            flags,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{LabelEncoder, OneHotEncoder};
    use crate::models::MlpClassifier;
    use crate::preprocessing::StandardScaler;

    // Identity scaler over the 12-column schema and a model whose output
    // depends only on the balance column, so expected probabilities are
    // easy to compute by hand.
    fn test_bundle(balance_weight: f32) -> ArtifactBundle {
        let width = 12;
        let mut weights = vec![0.0f32; width];
        weights[4] = balance_weight;
        let model_json = serde_json::json!({
            "layers": [
                {"weights": [weights], "bias": [0.0], "activation": "sigmoid"}
            ]
        });
        ArtifactBundle {
            model: serde_json::from_value::<MlpClassifier>(model_json).unwrap(),
            scaler: StandardScaler {
                mean: vec![0.0; width],
                std: vec![1.0; width],
            },
            gender_encoder: LabelEncoder::new(vec!["Female".to_string(), "Male".to_string()]),
            geography_encoder: OneHotEncoder::new(vec![
                "France".to_string(),
                "Germany".to_string(),
                "Spain".to_string(),
            ]),
        }
    }

    #[test]
    fn zero_model_lands_in_medium_band() {
        let scorer = ChurnScorer::new(test_bundle(0.0));
        let prediction = scorer.predict(&CustomerProfile::sample()).unwrap();
        // sigmoid(0) = 0.5
        assert_eq!(prediction.percent, 50);
        assert_eq!(prediction.band, RiskBand::Medium);
        assert_eq!(prediction.recommendation, "Send personalized engagement offers");
        assert!(prediction.flags.is_empty());
    }

    #[test]
    fn high_probability_maps_to_high_band_and_flags() {
        let scorer = ChurnScorer::new(test_bundle(1.0));
        let mut profile = CustomerProfile::sample();
        profile.balance = 10.0;
        profile.age = 60;
        profile.num_products = 1;
        let prediction = scorer.predict(&profile).unwrap();
        // sigmoid(10) is effectively 1
        assert_eq!(prediction.percent, 100);
        assert_eq!(prediction.band, RiskBand::High);
        assert_eq!(
            prediction.flags,
            vec![RiskFlag::HighAge, RiskFlag::SingleProduct]
        );
        assert_eq!(
            prediction.recommendation,
            "Assign relationship manager & offer loyalty incentives"
        );
    }

    #[test]
    fn identical_submissions_yield_identical_predictions() {
        let scorer = ChurnScorer::new(test_bundle(0.37));
        let profile = CustomerProfile::sample();
        let a = scorer.predict(&profile).unwrap();
        let b = scorer.predict(&profile).unwrap();
        assert_eq!(a.probability, b.probability);
        assert_eq!(a.percent, b.percent);
        assert_eq!(a.band, b.band);
        assert_eq!(a.flags, b.flags);
    }

    #[test]
    fn unknown_category_propagates_from_assembly() {
        let scorer = ChurnScorer::new(test_bundle(0.0));
        let mut profile = CustomerProfile::sample();
        profile.geography = "Mars".to_string();
        let err = scorer.predict(&profile).unwrap_err();
        assert!(matches!(err, PredictError::UnknownCategory { .. }));
    }
}
