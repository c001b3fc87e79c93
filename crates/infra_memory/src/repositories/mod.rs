//! Repository implementations for the fund domain ports
//!
//! Each repository keeps its data in process memory:
//! - `fund`: the read-only seeded catalog
//! - `ledger`: the append-only transaction log
//! - `portfolio`: one portfolio per user, replaced on every upsert

pub mod fund;
pub mod ledger;
pub mod portfolio;

pub use fund::InMemoryFundCatalog;
pub use ledger::InMemoryLedger;
pub use portfolio::InMemoryPortfolioStore;
