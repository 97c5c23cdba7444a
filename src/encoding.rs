//! Fitted categorical encoders.
//!
//! Both encoders are read-only renditions of their training-time state: a
//! label encoder mapping a category to its ordinal code, and a one-hot
//! encoder mapping a category to indicator columns. The fitted vocabularies
//! arrive via deserialization and are never mutated. Lookups outside the
//! vocabulary return `None`; callers decide how to surface that.

use serde::{Deserialize, Serialize};

/// Ordinal encoder for a single categorical column. Codes are the position
/// of the category in the fitted `classes` list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Fitted vocabulary, in code order. Front ends use this to enumerate
    /// the valid inputs.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Ordinal code of `value`, or `None` when it was never fitted.
    pub fn code_of(&self, value: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == value)
    }
}

/// One-hot encoder for a single categorical column. Produces one indicator
/// column per fitted category, in vocabulary order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OneHotEncoder {
    categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of indicator columns this encoder emits.
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Indicator columns for `value`, or `None` when it was never fitted.
    pub fn encode(&self, value: &str) -> Option<Vec<f32>> {
        let hit = self.categories.iter().position(|c| c == value)?;
        let mut columns = vec![0.0; self.categories.len()];
        columns[hit] = 1.0;
        Some(columns)
    }

    /// Output column names, `<base>_<category>` in vocabulary order.
    pub fn feature_names(&self, base: &str) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", base, c))
            .collect()
    }
}
