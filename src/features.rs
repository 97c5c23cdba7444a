//! Feature assembly.
//!
//! Maps a raw submission into the numeric feature vector the model was
//! trained on. Column order is fixed and must match the training schema
//! exactly: the nine base columns below, then the one-hot geography columns
//! appended last.

use crate::encoding::{LabelEncoder, OneHotEncoder};
use crate::error::PredictError;
use crate::profile::CustomerProfile;

/// Columns before the one-hot geography block.
pub const BASE_FEATURE_COUNT: usize = 9;

/// Total vector width for the given geography encoder.
pub fn feature_count(geography: &OneHotEncoder) -> usize {
    BASE_FEATURE_COUNT + geography.width()
}

/// Column names in assembly order, matching the training schema.
pub fn feature_names(geography: &OneHotEncoder) -> Vec<String> {
    let mut names: Vec<String> = [
        "CreditScore",
        "Gender",
        "Age",
        "Tenure",
        "Balance",
        "NumOfProducts",
        "HasCrCard",
        "IsActiveMember",
        "EstimatedSalary",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    names.extend(geography.feature_names("Geography"));
    names
}

/// Assemble the fixed-order feature vector for one submission.
///
/// Categorical values outside the fitted vocabularies are an explicit
/// error; nothing is defaulted.
pub fn assemble(
    profile: &CustomerProfile,
    gender: &LabelEncoder,
    geography: &OneHotEncoder,
) -> Result<Vec<f32>, PredictError> {
    let gender_code = gender
        .code_of(&profile.gender)
        .ok_or_else(|| PredictError::UnknownCategory {
            field: "gender".to_string(),
            value: profile.gender.clone(),
        })?;
    let geo_columns =
        geography
            .encode(&profile.geography)
            .ok_or_else(|| PredictError::UnknownCategory {
                field: "geography".to_string(),
                value: profile.geography.clone(),
            })?;

    let mut features = Vec::with_capacity(feature_count(geography));
    features.push(profile.credit_score as f32);
    features.push(gender_code as f32);
    features.push(profile.age as f32);
    features.push(profile.tenure as f32);
    features.push(profile.balance as f32);
    features.push(profile.num_products as f32);
    features.push(profile.has_credit_card as u8 as f32);
    features.push(profile.is_active_member as u8 as f32);
    features.push(profile.estimated_salary as f32);
    features.extend(geo_columns);

    Ok(features)
}
