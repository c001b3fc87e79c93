//! Fund catalog repository
//!
//! The catalog is reference data, so it is held without a lock and never
//! changes after construction.

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{DomainPort, FundId, HealthCheckResult, HealthCheckable, PortError};
use domain_fund::catalog::seed_funds;
use domain_fund::{Fund, FundCatalogPort};

/// Read-only catalog backed by a vector
#[derive(Debug, Clone)]
pub struct InMemoryFundCatalog {
    funds: Vec<Fund>,
}

impl InMemoryFundCatalog {
    /// Creates a catalog holding the demo funds
    pub fn seeded() -> Self {
        Self::with_funds(seed_funds())
    }

    /// Creates a catalog holding the given funds, in that order
    pub fn with_funds(funds: Vec<Fund>) -> Self {
        Self { funds }
    }
}

impl DomainPort for InMemoryFundCatalog {}

#[async_trait]
impl HealthCheckable for InMemoryFundCatalog {
    async fn health_check(&self) -> HealthCheckResult {
        // Nothing can be bought from an empty catalog
        if self.funds.is_empty() {
            return HealthCheckResult::unhealthy("memory-fund-catalog", "catalog is empty");
        }
        HealthCheckResult::healthy("memory-fund-catalog", format!("{} funds", self.funds.len()))
    }
}

#[async_trait]
impl FundCatalogPort for InMemoryFundCatalog {
    async fn list_funds(&self) -> Result<Vec<Fund>, PortError> {
        Ok(self.funds.clone())
    }

    async fn get_fund(&self, id: &FundId) -> Result<Option<Fund>, PortError> {
        let fund = self.funds.iter().find(|f| &f.id == id).cloned();
        if fund.is_none() {
            debug!(fund = %id, "Fund not in catalog");
        }
        Ok(fund)
    }
}
