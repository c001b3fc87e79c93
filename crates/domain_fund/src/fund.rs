//! Fund definition
//!
//! This module defines the mutual fund entity offered by the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::FundId;
use crate::error::FundError;

/// Risk tier classification shown to investors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Capital preservation
    #[serde(rename = "Low")]
    Low = 1,
    #[serde(rename = "Low to Medium")]
    LowToMedium = 2,
    #[serde(rename = "Medium")]
    Medium = 3,
    #[serde(rename = "High")]
    High = 4,
    /// Aggressive growth, small caps and sector bets
    #[serde(rename = "Very High")]
    VeryHigh = 5,
}

/// A mutual fund available for investment
///
/// Funds are reference data: they are seeded at startup and never mutated,
/// so the NAV is fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Catalog code
    pub id: FundId,
    /// Fund name
    pub name: String,
    /// Category, e.g. "Large-Cap Equity"
    pub category: String,
    /// Current NAV per unit
    pub nav: Decimal,
    /// Historical return in percent
    pub returns: Decimal,
    /// Risk tier
    pub risk: RiskLevel,
    /// Smallest amount accepted for a single purchase
    pub min_investment: Decimal,
    /// Fund description
    pub description: String,
}

impl Fund {
    /// Creates a new fund
    ///
    /// # Arguments
    ///
    /// * `id` - Catalog code
    /// * `name` - Fund name
    /// * `category` - Fund category
    /// * `nav` - Net Asset Value per unit
    /// * `risk` - Risk classification
    pub fn new(
        id: impl Into<FundId>,
        name: impl Into<String>,
        category: impl Into<String>,
        nav: Decimal,
        risk: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            nav,
            returns: Decimal::ZERO,
            risk,
            min_investment: Decimal::ZERO,
            description: String::new(),
        }
    }

    /// Sets the historical return
    pub fn with_returns(mut self, returns: Decimal) -> Self {
        self.returns = returns;
        self
    }

    /// Sets the minimum investment
    pub fn with_min_investment(mut self, min_investment: Decimal) -> Self {
        self.min_investment = min_investment;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks that a purchase amount satisfies this fund's minimum
    pub fn validate_investment(&self, amount: Decimal) -> Result<(), FundError> {
        if amount < self.min_investment {
            return Err(FundError::InvalidArgument(format!(
                "Minimum investment for this fund is {}",
                self.min_investment.normalize()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fund_creation() {
        let fund = Fund::new("MF001", "HDFC Top 100 Fund", "Large-Cap Equity", dec!(845.75), RiskLevel::High)
            .with_min_investment(dec!(1000));

        assert_eq!(fund.id.as_str(), "MF001");
        assert_eq!(fund.risk, RiskLevel::High);
        assert_eq!(fund.min_investment, dec!(1000));
    }

    #[test]
    fn test_minimum_investment() {
        let fund = Fund::new("MF003", "SBI Liquid Fund", "Liquid Debt", dec!(2856.32), RiskLevel::Low)
            .with_min_investment(dec!(500));

        assert!(fund.validate_investment(dec!(500)).is_ok());
        let err = fund.validate_investment(dec!(499.99)).unwrap_err();
        assert_eq!(err.to_string(), "Minimum investment for this fund is 500");
    }

    #[test]
    fn test_risk_serializes_with_display_label() {
        let json = serde_json::to_string(&RiskLevel::LowToMedium).unwrap();
        assert_eq!(json, "\"Low to Medium\"");
        assert!(RiskLevel::Low < RiskLevel::VeryHigh);
    }
}
