//! Portfolio aggregate
//!
//! A portfolio owns a user's holdings and keeps its totals in step with
//! them. All validation happens before any holding is modified, so a
//! rejected buy or sell leaves the aggregate untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use core_kernel::{FundId, PortfolioId, UserId};
use crate::error::FundError;
use crate::fund::Fund;
use crate::holding::Holding;
use crate::{calculate_units, calculate_value, round_money, round_units, MAX_PURCHASE_AMOUNT};

/// Result of applying a purchase to a portfolio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseOutcome {
    pub units: Decimal,
    pub amount: Decimal,
    pub nav: Decimal,
}

/// Result of applying a sale to a portfolio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleOutcome {
    pub units: Decimal,
    pub amount: Decimal,
    pub nav: Decimal,
    /// Proceeds minus the cost basis of the sold units
    pub realized_gain: Decimal,
    /// Whether the holding was fully liquidated and removed
    pub closed: bool,
}

/// A user's complete set of holdings plus derived totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Unique identifier
    pub id: PortfolioId,
    /// Owner
    pub user_id: UserId,
    /// Holdings in order of first purchase
    pub holdings: Vec<Holding>,
    /// Sum of holdings' cost basis
    pub total_invested: Decimal,
    /// Sum of holdings' current value
    pub current_value: Decimal,
    /// `current_value - total_invested`
    pub total_returns: Decimal,
    /// Accumulated gain or loss booked by sales
    pub realized_returns: Decimal,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Creates an empty portfolio for a user
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: PortfolioId::new_v7(),
            user_id,
            holdings: Vec::new(),
            total_invested: Decimal::ZERO,
            current_value: Decimal::ZERO,
            total_returns: Decimal::ZERO,
            realized_returns: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the holding for a fund, if any
    pub fn holding(&self, fund_id: &FundId) -> Option<&Holding> {
        self.holdings.iter().find(|h| &h.fund_id == fund_id)
    }

    fn holding_mut(&mut self, fund_id: &FundId) -> Option<&mut Holding> {
        self.holdings.iter_mut().find(|h| &h.fund_id == fund_id)
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Applies a purchase of `amount` at the fund's current NAV
    ///
    /// The amount is rounded to currency precision first. Opens a holding on
    /// the first purchase of a fund, otherwise re-weights the existing
    /// holding's average NAV.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the amount is not positive, is below the fund's
    /// minimum investment, is above [`MAX_PURCHASE_AMOUNT`], buys no units at
    /// unit precision, or would push a total past the representable range.
    pub fn apply_buy(&mut self, fund: &Fund, amount: Decimal) -> Result<PurchaseOutcome, FundError> {
        let amount = round_money(amount);
        if amount <= Decimal::ZERO {
            return Err(FundError::invalid("Amount must be greater than 0"));
        }
        if amount > MAX_PURCHASE_AMOUNT {
            return Err(FundError::invalid(format!(
                "Maximum amount for a single purchase is {MAX_PURCHASE_AMOUNT}"
            )));
        }
        fund.validate_investment(amount)?;

        let units = calculate_units(amount, fund.nav);
        if units.is_zero() {
            return Err(FundError::invalid("Amount is too small to purchase any units"));
        }

        let mut staged = self.clone();
        match staged.holding_mut(&fund.id) {
            Some(holding) => holding.add_purchase(units, amount, fund.nav)?,
            None => staged.holdings.push(Holding::open(fund.id.clone(), units, amount, fund.nav)),
        }
        staged.recalculate_totals()?;
        *self = staged;

        Ok(PurchaseOutcome {
            units,
            amount,
            nav: fund.nav,
        })
    }

    /// Applies a sale of `units` at the fund's current NAV
    ///
    /// The requested units are rounded to unit precision first. A holding
    /// whose units reach zero is removed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for non-positive units, `HoldingNotFound` when the
    /// fund is not held, `InsufficientUnits` when selling more than held.
    pub fn apply_sell(&mut self, fund: &Fund, units: Decimal) -> Result<SaleOutcome, FundError> {
        let units = round_units(units);
        if units <= Decimal::ZERO {
            return Err(FundError::invalid("Units to sell must be greater than 0"));
        }

        let mut staged = self.clone();
        let holding = staged
            .holding_mut(&fund.id)
            .ok_or_else(|| FundError::HoldingNotFound(fund.id.clone()))?;

        let amount = calculate_value(units, fund.nav);
        let realized_gain = amount - holding.cost_of(units);
        holding.remove_units(units, fund.nav)?;
        let closed = holding.is_liquidated();

        if closed {
            staged.holdings.retain(|h| h.fund_id != fund.id);
        }
        staged.realized_returns = staged
            .realized_returns
            .checked_add(realized_gain)
            .ok_or_else(FundError::size_exceeded)?;
        staged.recalculate_totals()?;
        *self = staged;

        Ok(SaleOutcome {
            units,
            amount,
            nav: fund.nav,
            realized_gain,
            closed,
        })
    }

    /// Recomputes totals as sums over the holdings
    fn recalculate_totals(&mut self) -> Result<(), FundError> {
        let total_invested = checked_sum(self.holdings.iter().map(|h| h.invested_amount))?;
        let current_value = checked_sum(self.holdings.iter().map(|h| h.current_value))?;

        self.total_returns = current_value
            .checked_sub(total_invested)
            .ok_or_else(FundError::size_exceeded)?;
        self.total_invested = total_invested;
        self.current_value = current_value;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> Result<Decimal, FundError> {
    values.try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).ok_or_else(FundError::size_exceeded)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund::RiskLevel;
    use rust_decimal_macros::dec;

    fn fund(nav: Decimal) -> Fund {
        Fund::new("MF900", "Test Fund", "Test", nav, RiskLevel::Medium)
            .with_min_investment(dec!(1000))
    }

    #[test]
    fn test_weighted_average_across_buys() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        portfolio.apply_buy(&fund(dec!(100)), dec!(1000)).unwrap();
        portfolio.apply_buy(&fund(dec!(200)), dec!(2000)).unwrap();

        let holding = portfolio.holding(&FundId::from("MF900")).unwrap();
        assert_eq!(holding.units, dec!(20));
        assert_eq!(holding.average_nav, dec!(150));
        assert_eq!(portfolio.total_invested, dec!(3000));
    }

    #[test]
    fn test_rejected_buy_leaves_portfolio_untouched() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        let before = portfolio.clone();

        let err = portfolio.apply_buy(&fund(dec!(100)), dec!(500)).unwrap_err();
        assert!(matches!(err, FundError::InvalidArgument(_)));
        assert_eq!(portfolio.holdings, before.holdings);
        assert_eq!(portfolio.total_invested, Decimal::ZERO);
    }

    #[test]
    fn test_amount_above_single_purchase_limit() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));

        let err = portfolio.apply_buy(&fund(dec!(100)), Decimal::MAX).unwrap_err();

        assert_eq!(err.to_string(), "Maximum amount for a single purchase is 1000000000000");
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_running_total_overflow_is_rejected() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        portfolio.apply_buy(&fund(dec!(100)), dec!(1000)).unwrap();
        portfolio.holdings[0].invested_amount = Decimal::MAX - dec!(1);
        let before = portfolio.clone();

        let err = portfolio.apply_buy(&fund(dec!(100)), dec!(1000)).unwrap_err();

        assert_eq!(err.to_string(), "Purchase exceeds the maximum portfolio size");
        assert_eq!(portfolio, before);
    }

    #[test]
    fn test_amount_is_rounded_to_cents() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        let bought = portfolio.apply_buy(&fund(dec!(100)), dec!(1000.004)).unwrap();

        assert_eq!(bought.amount, dec!(1000.00));
        assert_eq!(portfolio.total_invested, dec!(1000.00));

        let sold = portfolio.apply_sell(&fund(dec!(100)), bought.units).unwrap();
        assert_eq!(sold.amount, bought.amount);
        assert_eq!(sold.realized_gain, Decimal::ZERO);
    }

    #[test]
    fn test_sell_everything_removes_holding() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        let bought = portfolio.apply_buy(&fund(dec!(100)), dec!(1000)).unwrap();
        let sold = portfolio.apply_sell(&fund(dec!(100)), bought.units).unwrap();

        assert!(sold.closed);
        assert!(portfolio.is_empty());
        assert_eq!(sold.amount, dec!(1000));
        assert_eq!(portfolio.total_invested, Decimal::ZERO);
    }

    #[test]
    fn test_sell_books_realized_gain() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        portfolio.apply_buy(&fund(dec!(100)), dec!(1000)).unwrap();
        let sold = portfolio.apply_sell(&fund(dec!(120)), dec!(4)).unwrap();

        assert_eq!(sold.amount, dec!(480));
        assert_eq!(sold.realized_gain, dec!(80));
        assert_eq!(portfolio.realized_returns, dec!(80));
    }

    #[test]
    fn test_sell_unknown_holding() {
        let mut portfolio = Portfolio::new(UserId::from("u1"));
        let err = portfolio.apply_sell(&fund(dec!(100)), dec!(1)).unwrap_err();
        assert!(matches!(err, FundError::HoldingNotFound(_)));
    }
}
