//! Ledger transactions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use core_kernel::{FundId, TransactionId, UserId};

/// Types of ledger transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Purchase of units
    Buy,
    /// Redemption of units
    Sell,
}

/// An immutable buy or sell event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// User who placed the order
    pub user_id: UserId,
    /// Fund ID
    pub fund_id: FundId,
    /// Transaction type
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Units bought or sold
    pub units: Decimal,
    /// Money paid or received
    pub amount: Decimal,
    /// NAV at execution
    pub nav: Decimal,
    /// Sale proceeds minus cost basis, sells only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realized_gain: Option<Decimal>,
    /// Execution time
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a purchase record
    pub fn buy(user_id: UserId, fund_id: FundId, units: Decimal, amount: Decimal, nav: Decimal) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            fund_id,
            transaction_type: TransactionType::Buy,
            units,
            amount,
            nav,
            realized_gain: None,
            timestamp: Utc::now(),
        }
    }

    /// Creates a sale record
    pub fn sell(
        user_id: UserId,
        fund_id: FundId,
        units: Decimal,
        amount: Decimal,
        nav: Decimal,
        realized_gain: Decimal,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            fund_id,
            transaction_type: TransactionType::Sell,
            units,
            amount,
            nav,
            realized_gain: Some(realized_gain),
            timestamp: Utc::now(),
        }
    }

    /// Overrides the execution time
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_type_serializes_uppercase() {
        let tx = Transaction::buy(UserId::from("u1"), FundId::from("MF001"), dec!(10), dec!(1000), dec!(100));
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["type"], "BUY");
        assert_eq!(json["fundId"], "MF001");
        assert!(json.get("realizedGain").is_none());
    }

    #[test]
    fn test_sell_carries_realized_gain() {
        let tx = Transaction::sell(UserId::from("u1"), FundId::from("MF001"), dec!(5), dec!(1000), dec!(200), dec!(250));
        assert_eq!(tx.transaction_type, TransactionType::Sell);
        assert_eq!(tx.realized_gain, Some(dec!(250)));
    }
}
