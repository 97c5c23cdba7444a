//! Rule-based explainability and recommended actions.
//!
//! Four independent predicates over the raw submission, evaluated in a
//! fixed order. The thresholds are deliberate literals; there is no
//! configuration surface for them.

use crate::profile::CustomerProfile;
use crate::risk::{HIGH_FLOOR, MEDIUM_FLOOR};

const HIGH_AGE_YEARS: u32 = 50;
const LOW_TENURE_YEARS: u32 = 3;
const HIGH_BALANCE: f64 = 100_000.0;
const SINGLE_PRODUCT: u32 = 1;

/// One triggered risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFlag {
    HighAge,
    LowTenure,
    HighBalance,
    SingleProduct,
}

impl RiskFlag {
    pub fn description(&self) -> &'static str {
        match self {
            RiskFlag::HighAge => "High Age",
            RiskFlag::LowTenure => "Low Tenure",
            RiskFlag::HighBalance => "High Account Balance",
            RiskFlag::SingleProduct => "Single Product Usage",
        }
    }
}

/// Evaluate the flag predicates, in fixed order (age, tenure, balance,
/// products). An empty result is valid: no risk factors detected.
pub fn risk_flags(profile: &CustomerProfile) -> Vec<RiskFlag> {
    let mut flags = Vec::new();
    if profile.age > HIGH_AGE_YEARS {
        flags.push(RiskFlag::HighAge);
    }
    if profile.tenure < LOW_TENURE_YEARS {
        flags.push(RiskFlag::LowTenure);
    }
    if profile.balance > HIGH_BALANCE {
        flags.push(RiskFlag::HighBalance);
    }
    if profile.num_products == SINGLE_PRODUCT {
        flags.push(RiskFlag::SingleProduct);
    }
    flags
}

/// Canned business recommendation for a churn percentage, using the same
/// breakpoints as the risk bands.
pub fn recommendation(percent: u8) -> &'static str {
    if percent >= HIGH_FLOOR {
        "Assign relationship manager & offer loyalty incentives"
    } else if percent >= MEDIUM_FLOOR {
        "Send personalized engagement offers"
    } else {
        "No action required"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_flags_fire_in_fixed_order() {
        let mut profile = CustomerProfile::sample();
        profile.age = 60;
        profile.tenure = 1;
        profile.balance = 150_000.0;
        profile.num_products = 1;
        assert_eq!(
            risk_flags(&profile),
            vec![
                RiskFlag::HighAge,
                RiskFlag::LowTenure,
                RiskFlag::HighBalance,
                RiskFlag::SingleProduct,
            ]
        );
    }

    #[test]
    fn no_flags_is_a_valid_result() {
        // sample(): age 35, tenure 3, balance 0, two products
        assert!(risk_flags(&CustomerProfile::sample()).is_empty());
    }

    #[test]
    fn thresholds_are_strict_where_the_rules_say_so() {
        let mut profile = CustomerProfile::sample();
        profile.age = 50;
        profile.tenure = 3;
        profile.balance = 100_000.0;
        profile.num_products = 2;
        // All on the non-firing side of their predicate.
        assert!(risk_flags(&profile).is_empty());
    }

    #[test]
    fn recommendation_follows_risk_bands() {
        assert_eq!(recommendation(75), "Assign relationship manager & offer loyalty incentives");
        assert_eq!(recommendation(60), "Assign relationship manager & offer loyalty incentives");
        assert_eq!(recommendation(45), "Send personalized engagement offers");
        assert_eq!(recommendation(30), "Send personalized engagement offers");
        assert_eq!(recommendation(29), "No action required");
        assert_eq!(recommendation(0), "No action required");
    }
}
