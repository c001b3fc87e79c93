//! Portfolio repository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError, UserId};
use domain_fund::{Portfolio, PortfolioStorePort};

/// One portfolio per user, keyed by user ID
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioStore {
    portfolios: Arc<RwLock<HashMap<UserId, Portfolio>>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryPortfolioStore {}

#[async_trait]
impl HealthCheckable for InMemoryPortfolioStore {
    async fn health_check(&self) -> HealthCheckResult {
        let count = self.portfolios.read().await.len();
        HealthCheckResult::healthy("memory-portfolio-store", format!("{count} portfolios"))
    }
}

#[async_trait]
impl PortfolioStorePort for InMemoryPortfolioStore {
    async fn get_portfolio(&self, user_id: &UserId) -> Result<Option<Portfolio>, PortError> {
        Ok(self.portfolios.read().await.get(user_id).cloned())
    }

    async fn upsert_portfolio(&self, portfolio: Portfolio) -> Result<(), PortError> {
        let mut portfolios = self.portfolios.write().await;
        if let Some(existing) = portfolios.get(&portfolio.user_id) {
            if existing.id != portfolio.id {
                return Err(PortError::conflict(format!(
                    "User {} already owns portfolio {}",
                    portfolio.user_id, existing.id
                )));
            }
        }
        debug!(user = %portfolio.user_id, holdings = portfolio.holdings.len(), "Storing portfolio");
        portfolios.insert(portfolio.user_id.clone(), portfolio);
        Ok(())
    }

    async fn remove_portfolio(&self, user_id: &UserId) -> Result<(), PortError> {
        if self.portfolios.write().await.remove(user_id).is_some() {
            debug!(user = %user_id, "Removed portfolio");
        }
        Ok(())
    }
}
