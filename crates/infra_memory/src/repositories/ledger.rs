//! Transaction ledger repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError, UserId};
use domain_fund::{LedgerPort, Transaction};

/// Append-only log of every transaction, in recording order
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    entries: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded transactions across all users
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl DomainPort for InMemoryLedger {}

#[async_trait]
impl HealthCheckable for InMemoryLedger {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("memory-ledger", format!("{} transactions", self.len().await))
    }
}

#[async_trait]
impl LedgerPort for InMemoryLedger {
    async fn record(&self, transaction: Transaction) -> Result<(), PortError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|t| t.id == transaction.id) {
            return Err(PortError::conflict(format!("Transaction {} already recorded", transaction.id)));
        }
        debug!(transaction = %transaction.id, user = %transaction.user_id, "Recording transaction");
        entries.push(transaction);
        Ok(())
    }

    async fn history_for(&self, user_id: &UserId) -> Result<Vec<Transaction>, PortError> {
        // Newest-recorded first, so the stable sort keeps ties in that order
        let mut history: Vec<Transaction> = self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }
}
