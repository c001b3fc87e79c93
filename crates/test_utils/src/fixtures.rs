//! Pre-built Test Fixtures
//!
//! Ready-to-use funds, users and services. Funds use round NAVs so
//! expected values can be worked out by hand.

use std::sync::Arc;

use core_kernel::{FundId, UserId};
use domain_fund::{Fund, PortfolioService, RiskLevel};
use infra_memory::{InMemoryFundCatalog, InMemoryLedger, InMemoryPortfolioStore};
use rust_decimal_macros::dec;

/// Fixture for fund test data
pub struct FundFixtures;

impl FundFixtures {
    /// Equity fund at NAV 100, minimum 1000
    pub fn equity_at_100() -> Fund {
        Fund::new("TST001", "Test Equity Fund", "Large-Cap Equity", dec!(100), RiskLevel::High)
            .with_returns(dec!(12.5))
            .with_min_investment(dec!(1000))
            .with_description("Equity fixture")
    }

    /// Debt fund at NAV 250, minimum 500
    pub fn debt_at_250() -> Fund {
        Fund::new("TST002", "Test Debt Fund", "Liquid Debt", dec!(250), RiskLevel::Low)
            .with_returns(dec!(6.5))
            .with_min_investment(dec!(500))
            .with_description("Debt fixture")
    }

    /// Index fund at an awkward NAV, minimum 100
    pub fn index_at_245_67() -> Fund {
        Fund::new("TST003", "Test Index Fund", "Index Fund", dec!(245.67), RiskLevel::Medium)
            .with_returns(dec!(12.1))
            .with_min_investment(dec!(100))
    }

    /// All fixture funds
    pub fn all() -> Vec<Fund> {
        vec![Self::equity_at_100(), Self::debt_at_250(), Self::index_at_245_67()]
    }

    /// A fund code that no catalog contains
    pub fn unknown_id() -> FundId {
        FundId::from("NOPE404")
    }
}

/// Fixture for user identities
pub struct UserFixtures;

impl UserFixtures {
    pub fn alice() -> UserId {
        UserId::from("user-alice")
    }

    pub fn bob() -> UserId {
        UserId::from("user-bob")
    }
}

/// A service wired to in-memory adapters, with handles kept for inspection
pub struct ServiceFixture {
    pub service: Arc<PortfolioService>,
    pub ledger: InMemoryLedger,
    pub portfolios: InMemoryPortfolioStore,
}

impl ServiceFixture {
    /// Service over the fixture funds
    pub fn with_fixture_funds() -> Self {
        Self::with_catalog(InMemoryFundCatalog::with_funds(FundFixtures::all()))
    }

    /// Service over the seeded demo catalog
    pub fn with_seed_catalog() -> Self {
        Self::with_catalog(InMemoryFundCatalog::seeded())
    }

    fn with_catalog(catalog: InMemoryFundCatalog) -> Self {
        let ledger = InMemoryLedger::new();
        let portfolios = InMemoryPortfolioStore::new();
        let service = PortfolioService::new(
            Arc::new(catalog),
            Arc::new(ledger.clone()),
            Arc::new(portfolios.clone()),
        );
        Self {
            service: Arc::new(service),
            ledger,
            portfolios,
        }
    }
}
