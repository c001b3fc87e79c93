//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_fund::{Fund, RiskLevel};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for money amounts with two decimal places, 100.00 to 1,000,000.00
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (10_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for NAVs with two decimal places, 1.00 to 5,000.00
pub fn nav_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..500_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy for risk tiers
pub fn risk_strategy() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::LowToMedium),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
        Just(RiskLevel::VeryHigh),
    ]
}

/// Strategy for funds without a minimum investment
pub fn fund_strategy() -> impl Strategy<Value = Fund> {
    (nav_strategy(), risk_strategy())
        .prop_map(|(nav, risk)| Fund::new("GEN001", "Generated Fund", "Generated", nav, risk))
}
