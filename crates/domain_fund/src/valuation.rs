//! Portfolio valuation
//!
//! Turns a stored portfolio into the figures shown to the investor. Current
//! values are always recomputed from the catalog NAV, so the valuation
//! reflects the latest prices even though cost basis is fixed at purchase.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::FundId;
use crate::error::FundError;
use crate::fund::Fund;
use crate::portfolio::Portfolio;
use crate::{calculate_value, round_money};

/// Source of the "one day change" figures
///
/// There is no market feed behind the catalog, so the default
/// implementation derives placeholder values from current prices.
pub trait MarketMovement: Send + Sync {
    /// Day-over-day change of one unit of the fund
    fn holding_change(&self, fund: &Fund) -> Decimal;

    /// Day-over-day change of a whole portfolio worth `current_value`
    fn portfolio_change(&self, current_value: Decimal) -> Decimal;
}

/// Fixed-ratio placeholder: 1% of NAV per holding, 0.8% of portfolio value
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedMovement;

impl MarketMovement for SimulatedMovement {
    fn holding_change(&self, fund: &Fund) -> Decimal {
        round_money(fund.nav * dec!(0.01))
    }

    fn portfolio_change(&self, current_value: Decimal) -> Decimal {
        round_money(current_value * dec!(0.008))
    }
}

/// A holding joined with its fund and valued at the current NAV
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub fund_id: FundId,
    pub fund_name: String,
    pub fund_category: String,
    pub units: Decimal,
    pub average_nav: Decimal,
    pub invested_amount: Decimal,
    pub current_value: Decimal,
    pub current_nav: Decimal,
    pub returns: Decimal,
    pub return_percentage: Decimal,
    pub one_day_change: Decimal,
}

/// Portfolio-level totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub total_returns: Decimal,
    pub return_percentage: Decimal,
    pub one_day_change: Decimal,
    pub realized_returns: Decimal,
}

impl PortfolioSummary {
    /// The zeroed summary reported for users without a portfolio
    pub fn empty() -> Self {
        Self {
            total_invested: Decimal::ZERO,
            current_value: Decimal::ZERO,
            total_returns: Decimal::ZERO,
            return_percentage: Decimal::ZERO,
            one_day_change: Decimal::ZERO,
            realized_returns: Decimal::ZERO,
        }
    }
}

/// Holdings plus summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValuation {
    pub holdings: Vec<HoldingValuation>,
    pub summary: PortfolioSummary,
}

impl PortfolioValuation {
    pub fn empty() -> Self {
        Self {
            holdings: Vec::new(),
            summary: PortfolioSummary::empty(),
        }
    }
}

/// Returns `returns / invested × 100` rounded to two places, or zero when
/// nothing is invested
pub fn return_percentage(returns: Decimal, invested: Decimal) -> Decimal {
    if invested.is_zero() {
        return Decimal::ZERO;
    }
    round_money(returns / invested * dec!(100))
}

/// Values a portfolio against the given funds
///
/// # Errors
///
/// `FundNotFound` if a holding refers to a fund missing from `funds`.
pub fn value_portfolio(
    portfolio: &Portfolio,
    funds: &HashMap<FundId, Fund>,
    movement: &dyn MarketMovement,
) -> Result<PortfolioValuation, FundError> {
    let mut holdings = Vec::with_capacity(portfolio.holdings.len());

    for holding in &portfolio.holdings {
        let fund = funds
            .get(&holding.fund_id)
            .ok_or_else(|| FundError::FundNotFound(holding.fund_id.clone()))?;

        let current_value = calculate_value(holding.units, fund.nav);
        let returns = current_value - holding.invested_amount;

        holdings.push(HoldingValuation {
            fund_id: holding.fund_id.clone(),
            fund_name: fund.name.clone(),
            fund_category: fund.category.clone(),
            units: holding.units,
            average_nav: holding.average_nav,
            invested_amount: holding.invested_amount,
            current_value,
            current_nav: fund.nav,
            returns: round_money(returns),
            return_percentage: return_percentage(returns, holding.invested_amount),
            one_day_change: movement.holding_change(fund),
        });
    }

    let total_invested: Decimal = holdings.iter().map(|h| h.invested_amount).sum();
    let current_value: Decimal = holdings.iter().map(|h| h.current_value).sum();
    let total_returns = current_value - total_invested;

    let summary = PortfolioSummary {
        total_invested: round_money(total_invested),
        current_value: round_money(current_value),
        total_returns: round_money(total_returns),
        return_percentage: return_percentage(total_returns, total_invested),
        one_day_change: movement.portfolio_change(current_value),
        realized_returns: round_money(portfolio.realized_returns),
    };

    Ok(PortfolioValuation { holdings, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund::RiskLevel;
    use core_kernel::UserId;

    fn catalog(nav: Decimal) -> HashMap<FundId, Fund> {
        let fund = Fund::new("MF900", "Test Fund", "Test", nav, RiskLevel::Medium);
        HashMap::from([(fund.id.clone(), fund)])
    }

    #[test]
    fn test_valuation_uses_current_nav() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        let funds = catalog(dec!(100));
        portfolio.apply_buy(&funds[&FundId::from("MF900")], dec!(1000)).unwrap();

        let valuation = value_portfolio(&portfolio, &catalog(dec!(110)), &SimulatedMovement).unwrap();
        let holding = &valuation.holdings[0];

        assert_eq!(holding.current_value, dec!(1100));
        assert_eq!(holding.returns, dec!(100));
        assert_eq!(holding.return_percentage, dec!(10));
        assert_eq!(holding.one_day_change, dec!(1.10));
        assert_eq!(valuation.summary.total_returns, dec!(100));
        assert_eq!(valuation.summary.one_day_change, dec!(8.80));
    }

    #[test]
    fn test_return_percentage_guards_zero_investment() {
        assert_eq!(return_percentage(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(return_percentage(dec!(-25), dec!(200)), dec!(-12.5));
    }

    #[test]
    fn test_missing_fund_is_reported() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        portfolio.apply_buy(&catalog(dec!(100))[&FundId::from("MF900")], dec!(1000)).unwrap();

        let err = value_portfolio(&portfolio, &HashMap::new(), &SimulatedMovement).unwrap_err();
        assert!(matches!(err, FundError::FundNotFound(_)));
    }
}
