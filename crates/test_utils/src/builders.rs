//! Test Data Builders
//!
//! Builder for funds where a test only cares about a few fields.

use core_kernel::FundId;
use domain_fund::{Fund, RiskLevel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test funds
pub struct TestFundBuilder {
    id: FundId,
    name: String,
    category: String,
    nav: Decimal,
    risk: RiskLevel,
    min_investment: Decimal,
}

impl Default for TestFundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFundBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: FundId::from("BLD001"),
            name: "Built Fund".to_string(),
            category: "Multi-Cap".to_string(),
            nav: dec!(100),
            risk: RiskLevel::Medium,
            min_investment: Decimal::ZERO,
        }
    }

    pub fn with_id(mut self, id: impl Into<FundId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_nav(mut self, nav: Decimal) -> Self {
        self.nav = nav;
        self
    }

    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }

    pub fn with_min_investment(mut self, min_investment: Decimal) -> Self {
        self.min_investment = min_investment;
        self
    }

    /// Builds the fund
    pub fn build(self) -> Fund {
        Fund::new(self.id, self.name, self.category, self.nav, self.risk)
            .with_min_investment(self.min_investment)
    }
}
