//! Portfolio application service
//!
//! Coordinates the catalog, ledger and portfolio store for buy, sell and
//! read operations. Mutations of one user's portfolio are serialized by a
//! per-user lock held across the whole read-modify-write.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use core_kernel::{FundId, HealthCheckResult, TransactionId, UserId};

use crate::error::FundError;
use crate::fund::Fund;
use crate::portfolio::Portfolio;
use crate::ports::{FundCatalogPort, LedgerPort, PortfolioStorePort};
use crate::transaction::Transaction;
use crate::valuation::{value_portfolio, MarketMovement, PortfolioValuation, SimulatedMovement};

/// Fund identity echoed back on receipts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundRef {
    pub id: FundId,
    pub name: String,
}

impl From<&Fund> for FundRef {
    fn from(fund: &Fund) -> Self {
        Self {
            id: fund.id.clone(),
            name: fund.name.clone(),
        }
    }
}

/// Confirmation of a completed purchase
#[derive(Debug, Clone, PartialEq)]
pub struct BuyReceipt {
    pub transaction_id: TransactionId,
    pub fund: FundRef,
    pub units: Decimal,
    pub amount: Decimal,
    pub nav: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Confirmation of a completed sale
#[derive(Debug, Clone, PartialEq)]
pub struct SellReceipt {
    pub transaction_id: TransactionId,
    pub fund: FundRef,
    pub units: Decimal,
    pub amount: Decimal,
    pub nav: Decimal,
    pub realized_gain: Decimal,
    pub holding_closed: bool,
    pub timestamp: DateTime<Utc>,
}

/// The catalog together with its categories
#[derive(Debug, Clone)]
pub struct FundListing {
    pub funds: Vec<Fund>,
    pub categories: Vec<String>,
}

/// A ledger entry joined with the fund's display name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub fund_name: String,
}

/// Entry point for all portfolio and transaction operations
pub struct PortfolioService {
    catalog: Arc<dyn FundCatalogPort>,
    ledger: Arc<dyn LedgerPort>,
    portfolios: Arc<dyn PortfolioStorePort>,
    movement: Arc<dyn MarketMovement>,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl PortfolioService {
    /// Creates a service using the simulated daily movement
    pub fn new(
        catalog: Arc<dyn FundCatalogPort>,
        ledger: Arc<dyn LedgerPort>,
        portfolios: Arc<dyn PortfolioStorePort>,
    ) -> Self {
        Self {
            catalog,
            ledger,
            portfolios,
            movement: Arc::new(SimulatedMovement),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the daily movement source
    pub fn with_movement(mut self, movement: Arc<dyn MarketMovement>) -> Self {
        self.movement = movement;
        self
    }

    /// Runs `operation` while holding the user's lock
    ///
    /// The registry entry is dropped again once no other task holds or
    /// awaits it, so the registry only tracks users with work in flight.
    async fn with_user_lock<T>(&self, user_id: &UserId, operation: impl Future<Output = T>) -> T {
        let lock = {
            let mut locks = self.user_locks.lock().await;
            Arc::clone(locks.entry(user_id.clone()).or_default())
        };

        let result = {
            let _guard = lock.lock().await;
            operation.await
        };

        let mut locks = self.user_locks.lock().await;
        // Only the registry and this task still own the lock
        if Arc::strong_count(&lock) == 2 {
            locks.remove(user_id);
        }
        result
    }

    /// Number of users with a buy or sell in flight
    pub async fn locked_users(&self) -> usize {
        self.user_locks.lock().await.len()
    }

    /// Stores the updated portfolio, then appends the transaction
    ///
    /// A failed append puts `previous` back so the store never reflects a
    /// transaction missing from the ledger.
    async fn commit(
        &self,
        previous: Option<Portfolio>,
        updated: Portfolio,
        transaction: Transaction,
    ) -> Result<(), FundError> {
        let user_id = updated.user_id.clone();
        self.portfolios.upsert_portfolio(updated).await?;

        if let Err(e) = self.ledger.record(transaction).await {
            error!(user = %user_id, error = %e, "Ledger append failed, restoring portfolio");
            let restored = match previous {
                Some(portfolio) => self.portfolios.upsert_portfolio(portfolio).await,
                None => self.portfolios.remove_portfolio(&user_id).await,
            };
            if let Err(restore_error) = restored {
                error!(user = %user_id, error = %restore_error, "Failed to restore portfolio");
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn require_fund(&self, fund_id: &FundId) -> Result<Fund, FundError> {
        self.catalog
            .get_fund(fund_id)
            .await?
            .ok_or_else(|| FundError::FundNotFound(fund_id.clone()))
    }

    /// Lists the catalog with its categories
    pub async fn list_funds(&self) -> Result<FundListing, FundError> {
        let funds = self.catalog.list_funds().await?;
        let categories = self.catalog.categories().await?;
        Ok(FundListing { funds, categories })
    }

    /// Retrieves one fund
    pub async fn get_fund(&self, fund_id: &FundId) -> Result<Fund, FundError> {
        self.require_fund(fund_id).await
    }

    /// Buys `amount` worth of a fund at its current NAV
    ///
    /// Creates the user's portfolio on the first purchase.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - amount not positive, below the fund minimum or
    ///   above the single-purchase limit
    /// * `FundNotFound` - unknown fund code
    /// * `Store` - an adapter failed; the portfolio is left as it was
    pub async fn buy(
        &self,
        user_id: &UserId,
        fund_id: &FundId,
        amount: Decimal,
    ) -> Result<BuyReceipt, FundError> {
        if amount <= Decimal::ZERO {
            warn!(user = %user_id, fund = %fund_id, %amount, "Rejected buy with non-positive amount");
            return Err(FundError::invalid("Amount must be greater than 0"));
        }
        let fund = self.require_fund(fund_id).await?;

        self.with_user_lock(user_id, self.buy_locked(user_id, &fund, amount))
            .await
    }

    async fn buy_locked(
        &self,
        user_id: &UserId,
        fund: &Fund,
        amount: Decimal,
    ) -> Result<BuyReceipt, FundError> {
        let previous = self.portfolios.get_portfolio(user_id).await?;
        let mut portfolio = previous
            .clone()
            .unwrap_or_else(|| Portfolio::new(user_id.clone()));

        let outcome = portfolio.apply_buy(fund, amount).map_err(|e| {
            warn!(user = %user_id, fund = %fund.id, %amount, error = %e, "Rejected buy");
            e
        })?;

        let transaction = Transaction::buy(
            user_id.clone(),
            fund.id.clone(),
            outcome.units,
            outcome.amount,
            outcome.nav,
        );
        let receipt = BuyReceipt {
            transaction_id: transaction.id,
            fund: FundRef::from(fund),
            units: outcome.units,
            amount: outcome.amount,
            nav: outcome.nav,
            timestamp: transaction.timestamp,
        };

        self.commit(previous, portfolio, transaction).await?;

        info!(
            user = %user_id,
            fund = %fund.id,
            units = %receipt.units,
            amount = %receipt.amount,
            nav = %receipt.nav,
            "Mutual fund purchase recorded"
        );
        Ok(receipt)
    }

    /// Sells units of a held fund at its current NAV
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - units not positive
    /// * `PortfolioNotFound` - the user never bought anything
    /// * `HoldingNotFound` - the fund is not held
    /// * `InsufficientUnits` - more units requested than held
    pub async fn sell(
        &self,
        user_id: &UserId,
        fund_id: &FundId,
        units: Decimal,
    ) -> Result<SellReceipt, FundError> {
        if units <= Decimal::ZERO {
            warn!(user = %user_id, fund = %fund_id, %units, "Rejected sell with non-positive units");
            return Err(FundError::invalid("Units to sell must be greater than 0"));
        }

        self.with_user_lock(user_id, self.sell_locked(user_id, fund_id, units))
            .await
    }

    async fn sell_locked(
        &self,
        user_id: &UserId,
        fund_id: &FundId,
        units: Decimal,
    ) -> Result<SellReceipt, FundError> {
        let mut portfolio = self
            .portfolios
            .get_portfolio(user_id)
            .await?
            .ok_or_else(|| FundError::PortfolioNotFound(user_id.clone()))?;

        if portfolio.holding(fund_id).is_none() {
            return Err(FundError::HoldingNotFound(fund_id.clone()));
        }
        let fund = self.require_fund(fund_id).await?;
        let previous = portfolio.clone();

        let outcome = portfolio.apply_sell(&fund, units).map_err(|e| {
            warn!(user = %user_id, fund = %fund_id, %units, error = %e, "Rejected sell");
            e
        })?;

        let transaction = Transaction::sell(
            user_id.clone(),
            fund.id.clone(),
            outcome.units,
            outcome.amount,
            outcome.nav,
            outcome.realized_gain,
        );
        let receipt = SellReceipt {
            transaction_id: transaction.id,
            fund: FundRef::from(&fund),
            units: outcome.units,
            amount: outcome.amount,
            nav: outcome.nav,
            realized_gain: outcome.realized_gain,
            holding_closed: outcome.closed,
            timestamp: transaction.timestamp,
        };

        self.commit(Some(previous), portfolio, transaction).await?;

        info!(
            user = %user_id,
            fund = %fund_id,
            units = %receipt.units,
            amount = %receipt.amount,
            closed = receipt.holding_closed,
            "Mutual fund sale recorded"
        );
        Ok(receipt)
    }

    /// Values a user's portfolio at current NAVs
    ///
    /// # Returns
    ///
    /// `None` if the user has never bought anything
    pub async fn get_portfolio(&self, user_id: &UserId) -> Result<Option<PortfolioValuation>, FundError> {
        let Some(portfolio) = self.portfolios.get_portfolio(user_id).await? else {
            debug!(user = %user_id, "No portfolio yet");
            return Ok(None);
        };

        let funds = self.funds_by_id().await?;
        let valuation = value_portfolio(&portfolio, &funds, self.movement.as_ref())?;
        Ok(Some(valuation))
    }

    /// Returns a user's transactions, most recent first, with fund names
    pub async fn history(&self, user_id: &UserId) -> Result<Vec<HistoryEntry>, FundError> {
        let funds = self.funds_by_id().await?;

        self.ledger
            .history_for(user_id)
            .await?
            .into_iter()
            .map(|transaction| -> Result<HistoryEntry, FundError> {
                let fund = funds
                    .get(&transaction.fund_id)
                    .ok_or_else(|| FundError::FundNotFound(transaction.fund_id.clone()))?;
                Ok(HistoryEntry {
                    fund_name: fund.name.clone(),
                    transaction,
                })
            })
            .collect()
    }

    /// Health of every backing adapter
    pub async fn health(&self) -> Vec<HealthCheckResult> {
        vec![
            self.catalog.health_check().await,
            self.ledger.health_check().await,
            self.portfolios.health_check().await,
        ]
    }

    async fn funds_by_id(&self) -> Result<HashMap<FundId, Fund>, FundError> {
        Ok(self
            .catalog
            .list_funds()
            .await?
            .into_iter()
            .map(|fund| (fund.id.clone(), fund))
            .collect())
    }
}
