//! Fund Portfolio Domain
//!
//! This crate implements the bookkeeping core of the mutual fund service:
//! the fund catalog, the transaction ledger and the portfolio aggregator.
//!
//! # Key Concepts
//!
//! - **Fund**: A catalog entry with a fixed NAV and a minimum investment
//! - **Holding**: A user's units in one fund, with their average cost
//! - **Portfolio**: All of a user's holdings plus derived totals
//! - **Transaction**: An immutable BUY or SELL record in the ledger
//!
//! # Unit Precision
//!
//! Units are stored with 6 decimal places, money with 2:
//! - Amount: 1,000
//! - NAV: 845.75
//! - Units: 1.182383

pub mod fund;
pub mod catalog;
pub mod holding;
pub mod transaction;
pub mod portfolio;
pub mod valuation;
pub mod ports;
pub mod service;
pub mod error;

pub use fund::{Fund, RiskLevel};
pub use holding::Holding;
pub use transaction::{Transaction, TransactionType};
pub use portfolio::{Portfolio, PurchaseOutcome, SaleOutcome};
pub use valuation::{
    HoldingValuation, MarketMovement, PortfolioSummary, PortfolioValuation, SimulatedMovement,
};
pub use ports::{FundCatalogPort, LedgerPort, PortfolioStorePort};
pub use service::{BuyReceipt, FundListing, FundRef, HistoryEntry, PortfolioService, SellReceipt};
pub use error::FundError;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard unit precision (6 decimal places)
pub const UNIT_PRECISION: u32 = 6;

/// Currency precision (2 decimal places)
pub const MONEY_PRECISION: u32 = 2;

/// Largest amount accepted for a single purchase
pub const MAX_PURCHASE_AMOUNT: Decimal = dec!(1000000000000);

/// Rounds a value to standard unit precision
pub fn round_units(value: Decimal) -> Decimal {
    value.round_dp(UNIT_PRECISION)
}

/// Rounds a value to currency precision
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(MONEY_PRECISION)
}

/// Calculates units from an amount and NAV
///
/// # Arguments
///
/// * `amount` - The monetary amount to convert
/// * `nav` - The Net Asset Value per unit
///
/// # Returns
///
/// The number of units (rounded to 6 decimal places), zero for a zero NAV
///
/// # Example
///
/// ```rust
/// use domain_fund::calculate_units;
/// use rust_decimal_macros::dec;
///
/// let units = calculate_units(dec!(1000), dec!(845.75));
/// assert_eq!(units, dec!(1.182383));
/// ```
pub fn calculate_units(amount: Decimal, nav: Decimal) -> Decimal {
    if nav.is_zero() {
        return Decimal::ZERO;
    }
    round_units(amount / nav)
}

/// Calculates the value of units at a given NAV, rounded to currency precision
pub fn calculate_value(units: Decimal, nav: Decimal) -> Decimal {
    round_money(units * nav)
}
