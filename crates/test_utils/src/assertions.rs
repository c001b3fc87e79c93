//! Custom Test Assertions
//!
//! Assertion helpers for portfolio invariants that give more meaningful
//! error messages than standard assertions.

use domain_fund::Portfolio;
use rust_decimal::Decimal;

/// Asserts that two decimals are equal within a tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a portfolio's totals are the sums over its holdings
pub fn assert_totals_consistent(portfolio: &Portfolio) {
    let invested: Decimal = portfolio.holdings.iter().map(|h| h.invested_amount).sum();
    let current: Decimal = portfolio.holdings.iter().map(|h| h.current_value).sum();

    assert_eq!(
        portfolio.total_invested, invested,
        "total_invested {} does not match sum over holdings {}",
        portfolio.total_invested, invested
    );
    assert_eq!(
        portfolio.current_value, current,
        "current_value {} does not match sum over holdings {}",
        portfolio.current_value, current
    );
    assert_eq!(
        portfolio.total_returns,
        current - invested,
        "total_returns {} is not current_value - total_invested",
        portfolio.total_returns
    );
}

/// Asserts that no holding is empty or negative
pub fn assert_holdings_active(portfolio: &Portfolio) {
    for holding in &portfolio.holdings {
        assert!(
            holding.units > Decimal::ZERO,
            "Holding for {} has non-positive units {}",
            holding.fund_id,
            holding.units
        );
    }
}
