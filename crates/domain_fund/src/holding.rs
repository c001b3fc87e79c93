//! Fund holdings

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::FundId;
use crate::error::FundError;
use crate::{calculate_value, round_money, round_units};

/// A user's position in one fund
///
/// `invested_amount` is the cost basis (`units × average_nav`) and
/// `current_value` is `units` valued at the fund's NAV as of the last
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Fund ID
    pub fund_id: FundId,
    /// Number of units held
    pub units: Decimal,
    /// Cost basis per unit
    pub average_nav: Decimal,
    /// Total cost basis
    pub invested_amount: Decimal,
    /// Market value at the last known NAV
    pub current_value: Decimal,
}

impl Holding {
    /// Opens a holding from a first purchase
    pub fn open(fund_id: FundId, units: Decimal, amount: Decimal, nav: Decimal) -> Self {
        let units = round_units(units);
        Self {
            fund_id,
            units,
            average_nav: nav,
            invested_amount: amount,
            current_value: calculate_value(units, nav),
        }
    }

    /// Adds purchased units, re-weighting the average cost
    ///
    /// Leaves the holding unchanged if any running figure would overflow.
    pub fn add_purchase(&mut self, units: Decimal, amount: Decimal, nav: Decimal) -> Result<(), FundError> {
        let total_units = self
            .units
            .checked_add(units)
            .map(round_units)
            .ok_or_else(FundError::size_exceeded)?;
        let total_invested = self
            .invested_amount
            .checked_add(amount)
            .ok_or_else(FundError::size_exceeded)?;
        let average_nav = total_invested
            .checked_div(total_units)
            .ok_or_else(FundError::size_exceeded)?;
        let current_value = total_units
            .checked_mul(nav)
            .map(round_money)
            .ok_or_else(FundError::size_exceeded)?;

        self.average_nav = average_nav;
        self.units = total_units;
        self.invested_amount = total_invested;
        self.current_value = current_value;
        Ok(())
    }

    /// Removes sold units; the per-unit cost basis stays unchanged
    pub fn remove_units(&mut self, units: Decimal, nav: Decimal) -> Result<(), FundError> {
        if units > self.units {
            return Err(FundError::InsufficientUnits {
                available: self.units,
                requested: units,
            });
        }
        self.units = round_units(self.units - units);
        self.invested_amount = calculate_value(self.units, self.average_nav);
        self.current_value = calculate_value(self.units, nav);
        Ok(())
    }

    /// Cost basis of a number of units at the average NAV
    pub fn cost_of(&self, units: Decimal) -> Decimal {
        calculate_value(units, self.average_nav)
    }

    pub fn is_liquidated(&self) -> bool {
        self.units.is_zero()
    }
}
