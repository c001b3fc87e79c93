//! Comprehensive tests for domain_fund bookkeeping

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{FundId, UserId};
use domain_fund::valuation::{value_portfolio, SimulatedMovement};
use domain_fund::{FundError, Portfolio};
use test_utils::{
    amount_strategy, assert_holdings_active, assert_totals_consistent, fund_strategy,
    FundFixtures, TestFundBuilder,
};

fn portfolio() -> Portfolio {
    Portfolio::new(UserId::from("user-1"))
}

// ============================================================================
// Purchase Tests
// ============================================================================

mod purchase_tests {
    use super::*;

    #[test]
    fn test_first_purchase_opens_holding_at_nav() {
        let fund = FundFixtures::equity_at_100();
        let mut portfolio = portfolio();

        let outcome = portfolio.apply_buy(&fund, dec!(2500)).unwrap();

        assert_eq!(outcome.units, dec!(25));
        let holding = portfolio.holding(&fund.id).unwrap();
        assert_eq!(holding.average_nav, dec!(100));
        assert_eq!(holding.invested_amount, dec!(2500));
        assert_totals_consistent(&portfolio);
    }

    #[test]
    fn test_weighted_average_nav_law() {
        let at_100 = TestFundBuilder::new().with_nav(dec!(100)).build();
        let at_200 = TestFundBuilder::new().with_nav(dec!(200)).build();
        let mut portfolio = portfolio();

        portfolio.apply_buy(&at_100, dec!(1000)).unwrap();
        portfolio.apply_buy(&at_200, dec!(2000)).unwrap();

        let holding = portfolio.holding(&at_100.id).unwrap();
        assert_eq!(holding.units, dec!(20));
        assert_eq!(holding.average_nav, dec!(150));
        assert_eq!(holding.invested_amount, dec!(3000));
        assert_eq!(holding.current_value, dec!(4000));
        assert_eq!(portfolio.total_returns, dec!(1000));
        assert_totals_consistent(&portfolio);
    }

    #[test]
    fn test_below_minimum_is_rejected_without_change() {
        let fund = FundFixtures::equity_at_100();
        let mut portfolio = portfolio();

        let err = portfolio.apply_buy(&fund, dec!(500)).unwrap_err();

        assert_eq!(err.to_string(), "Minimum investment for this fund is 1000");
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_invested, Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        let fund = TestFundBuilder::new().build();
        let mut portfolio = portfolio();

        assert!(matches!(portfolio.apply_buy(&fund, Decimal::ZERO), Err(FundError::InvalidArgument(_))));
        assert!(matches!(portfolio.apply_buy(&fund, dec!(-10)), Err(FundError::InvalidArgument(_))));
    }

    #[test]
    fn test_holdings_keep_purchase_order() {
        let mut portfolio = portfolio();
        portfolio.apply_buy(&FundFixtures::debt_at_250(), dec!(500)).unwrap();
        portfolio.apply_buy(&FundFixtures::equity_at_100(), dec!(1000)).unwrap();
        portfolio.apply_buy(&FundFixtures::debt_at_250(), dec!(500)).unwrap();

        let order: Vec<&str> = portfolio.holdings.iter().map(|h| h.fund_id.as_str()).collect();
        assert_eq!(order, vec!["TST002", "TST001"]);
        assert_totals_consistent(&portfolio);
    }
}

// ============================================================================
// Sale Tests
// ============================================================================

mod sale_tests {
    use super::*;

    #[test]
    fn test_partial_sale_keeps_average_nav() {
        let fund = FundFixtures::equity_at_100();
        let mut portfolio = portfolio();
        portfolio.apply_buy(&fund, dec!(2000)).unwrap();

        let outcome = portfolio.apply_sell(&fund, dec!(5)).unwrap();

        assert_eq!(outcome.amount, dec!(500));
        assert!(!outcome.closed);
        let holding = portfolio.holding(&fund.id).unwrap();
        assert_eq!(holding.units, dec!(15));
        assert_eq!(holding.average_nav, dec!(100));
        assert_eq!(holding.invested_amount, dec!(1500));
        assert_totals_consistent(&portfolio);
    }

    #[test]
    fn test_full_sale_removes_holding() {
        let fund = FundFixtures::index_at_245_67();
        let mut portfolio = portfolio();
        let bought = portfolio.apply_buy(&fund, dec!(1000)).unwrap();

        let outcome = portfolio.apply_sell(&fund, bought.units).unwrap();

        assert!(outcome.closed);
        assert!(portfolio.holding(&fund.id).is_none());
        assert_totals_consistent(&portfolio);
    }

    #[test]
    fn test_oversell_reports_available_units() {
        let fund = FundFixtures::equity_at_100();
        let mut portfolio = portfolio();
        portfolio.apply_buy(&fund, dec!(1000)).unwrap();
        let before = portfolio.clone();

        let err = portfolio.apply_sell(&fund, dec!(10.5)).unwrap_err();

        assert_eq!(err.to_string(), "Insufficient units. Available: 10");
        assert_eq!(portfolio.holdings, before.holdings);
        assert_eq!(portfolio.realized_returns, Decimal::ZERO);
    }

    #[test]
    fn test_sale_rounds_requested_units() {
        let fund = FundFixtures::equity_at_100();
        let mut portfolio = portfolio();
        portfolio.apply_buy(&fund, dec!(1000)).unwrap();

        // Rounds down to exactly the 10 units held
        let outcome = portfolio.apply_sell(&fund, dec!(10.0000001)).unwrap();
        assert_eq!(outcome.units, dec!(10));
        assert!(outcome.closed);
    }

    #[test]
    fn test_units_below_precision_are_rejected() {
        let fund = FundFixtures::equity_at_100();
        let mut portfolio = portfolio();
        portfolio.apply_buy(&fund, dec!(1000)).unwrap();

        let err = portfolio.apply_sell(&fund, dec!(0.0000001)).unwrap_err();
        assert!(matches!(err, FundError::InvalidArgument(_)));
    }
}

// ============================================================================
// Valuation Tests
// ============================================================================

mod valuation_tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_summary_sums_holdings() {
        let mut portfolio = portfolio();
        portfolio.apply_buy(&FundFixtures::equity_at_100(), dec!(1000)).unwrap();
        portfolio.apply_buy(&FundFixtures::debt_at_250(), dec!(500)).unwrap();

        let funds: HashMap<FundId, _> = FundFixtures::all()
            .into_iter()
            .map(|f| (f.id.clone(), f))
            .collect();
        let valuation = value_portfolio(&portfolio, &funds, &SimulatedMovement).unwrap();

        assert_eq!(valuation.holdings.len(), 2);
        assert_eq!(valuation.summary.total_invested, dec!(1500));
        assert_eq!(valuation.summary.current_value, dec!(1500));
        assert_eq!(valuation.summary.return_percentage, Decimal::ZERO);
        assert_eq!(valuation.holdings[0].one_day_change, dec!(1.00));
        assert_eq!(valuation.holdings[1].one_day_change, dec!(2.50));
        assert_eq!(valuation.summary.one_day_change, dec!(12.00));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_buy_then_sell_all_returns_amount(fund in fund_strategy(), amount in amount_strategy()) {
        let mut portfolio = portfolio();
        let bought = portfolio.apply_buy(&fund, amount).unwrap();
        let sold = portfolio.apply_sell(&fund, bought.units).unwrap();

        prop_assert_eq!(sold.amount, amount);
        prop_assert!(sold.closed);
        prop_assert!(portfolio.is_empty());
    }

    #[test]
    fn prop_totals_track_holdings(
        fund in fund_strategy(),
        amounts in prop::collection::vec(amount_strategy(), 1..6),
        sell_fraction in 1u32..100u32,
    ) {
        let mut portfolio = portfolio();
        for amount in &amounts {
            portfolio.apply_buy(&fund, *amount).unwrap();
            assert_totals_consistent(&portfolio);
        }

        let held = portfolio.holding(&fund.id).unwrap().units;
        let to_sell = held * Decimal::new(sell_fraction as i64, 2);
        let average_before = portfolio.holding(&fund.id).unwrap().average_nav;

        if portfolio.apply_sell(&fund, to_sell).is_ok() {
            assert_totals_consistent(&portfolio);
            assert_holdings_active(&portfolio);
            if let Some(holding) = portfolio.holding(&fund.id) {
                prop_assert_eq!(holding.average_nav, average_before);
            }
        }
    }
}
