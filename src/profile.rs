//! Customer submission record.

use serde::{Deserialize, Serialize};

/// One customer submission. Immutable once constructed; the pipeline reads
/// it, never stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub credit_score: u32,
    pub geography: String,
    pub gender: String,
    pub age: u32,
    /// Years with the bank.
    pub tenure: u32,
    pub balance: f64,
    pub num_products: u32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
}

impl CustomerProfile {
    /// Convenience constructor used by tests and examples; field defaults
    /// match the original form's defaults.
    pub fn sample() -> Self {
        Self {
            credit_score: 600,
            geography: "France".to_string(),
            gender: "Male".to_string(),
            age: 35,
            tenure: 3,
            balance: 0.0,
            num_products: 2,
            has_credit_card: true,
            is_active_member: true,
            estimated_salary: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_roundtrips_through_json() {
        let profile = CustomerProfile::sample();
        let json = serde_json::to_string(&profile).unwrap();
        let back: CustomerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.credit_score, 600);
        assert_eq!(back.geography, "France");
        assert!(back.has_credit_card);
    }
}
