//! In-Memory Storage Layer
//!
//! Process-local adapters for the fund domain ports. Nothing survives a
//! restart; the catalog is seeded on construction.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository implements one
//! port trait from `domain_fund::ports` and hides its collection behind a
//! `tokio::sync::RwLock`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_memory::{InMemoryFundCatalog, InMemoryLedger, InMemoryPortfolioStore};
//!
//! let catalog = InMemoryFundCatalog::seeded();
//! let ledger = InMemoryLedger::new();
//! let portfolios = InMemoryPortfolioStore::new();
//! ```

pub mod repositories;

pub use repositories::{InMemoryFundCatalog, InMemoryLedger, InMemoryPortfolioStore};

use std::sync::Arc;

use domain_fund::PortfolioService;

/// Builds a portfolio service over freshly created in-memory adapters
pub fn in_memory_service() -> PortfolioService {
    PortfolioService::new(
        Arc::new(InMemoryFundCatalog::seeded()),
        Arc::new(InMemoryLedger::new()),
        Arc::new(InMemoryPortfolioStore::new()),
    )
}
