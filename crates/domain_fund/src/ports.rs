//! Fund Domain Ports
//!
//! Port interfaces for the catalog, the transaction ledger and the
//! portfolio store. `PortfolioService` depends only on these traits, so the
//! in-memory adapters can be swapped for a persistent store without
//! touching the bookkeeping logic.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_fund::PortfolioService;
//!
//! let service = PortfolioService::new(
//!     Arc::new(InMemoryFundCatalog::seeded()),
//!     Arc::new(InMemoryLedger::new()),
//!     Arc::new(InMemoryPortfolioStore::new()),
//! );
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, FundId, HealthCheckable, PortError, UserId};

use crate::fund::Fund;
use crate::portfolio::Portfolio;
use crate::transaction::Transaction;

/// Read-only access to the fund catalog
#[async_trait]
pub trait FundCatalogPort: DomainPort + HealthCheckable {
    /// Lists all funds in display order
    async fn list_funds(&self) -> Result<Vec<Fund>, PortError>;

    /// Retrieves a fund by its catalog code
    ///
    /// # Returns
    ///
    /// `None` if the code is not in the catalog
    async fn get_fund(&self, id: &FundId) -> Result<Option<Fund>, PortError>;

    /// Distinct categories in order of first appearance
    async fn categories(&self) -> Result<Vec<String>, PortError> {
        Ok(crate::catalog::categories(&self.list_funds().await?))
    }
}

/// Append-only transaction log
#[async_trait]
pub trait LedgerPort: DomainPort + HealthCheckable {
    /// Appends a transaction
    async fn record(&self, transaction: Transaction) -> Result<(), PortError>;

    /// Returns a user's transactions, most recent first
    ///
    /// Entries with equal timestamps are returned latest-recorded first.
    async fn history_for(&self, user_id: &UserId) -> Result<Vec<Transaction>, PortError>;
}

/// Storage for one portfolio per user
///
/// `PortfolioService` writes the portfolio before appending to the ledger
/// and restores the previous state through this port if the append fails.
#[async_trait]
pub trait PortfolioStorePort: DomainPort + HealthCheckable {
    /// Retrieves a user's portfolio
    async fn get_portfolio(&self, user_id: &UserId) -> Result<Option<Portfolio>, PortError>;

    /// Inserts or replaces a user's portfolio
    async fn upsert_portfolio(&self, portfolio: Portfolio) -> Result<(), PortError>;

    /// Deletes a user's portfolio; absent portfolios are not an error
    async fn remove_portfolio(&self, user_id: &UserId) -> Result<(), PortError>;
}
