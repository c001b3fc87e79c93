//! Transaction DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::TransactionId;
use domain_fund::{BuyReceipt, FundRef, SellReceipt};

/// Decimal places shown for units on a purchase receipt
const RECEIPT_UNIT_DP: u32 = 4;

/// Buy request; fields are optional so absence maps to a 400 message
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    #[validate(required, length(min = 1))]
    pub fund_id: Option<String>,
    #[validate(required)]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SellRequest {
    #[validate(required, length(min = 1))]
    pub fund_id: Option<String>,
    #[validate(required)]
    pub units_to_sell: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyResponse {
    pub transaction_id: TransactionId,
    pub fund: FundRef,
    pub units: Decimal,
    pub amount: Decimal,
    pub nav: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl From<BuyReceipt> for BuyResponse {
    fn from(receipt: BuyReceipt) -> Self {
        Self {
            transaction_id: receipt.transaction_id,
            fund: receipt.fund,
            units: receipt.units.round_dp(RECEIPT_UNIT_DP),
            amount: receipt.amount,
            nav: receipt.nav,
            timestamp: receipt.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellResponse {
    pub transaction_id: TransactionId,
    pub fund: FundRef,
    pub units: Decimal,
    pub amount: Decimal,
    pub nav: Decimal,
    pub realized_gain: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl From<SellReceipt> for SellResponse {
    fn from(receipt: SellReceipt) -> Self {
        Self {
            transaction_id: receipt.transaction_id,
            fund: receipt.fund,
            units: receipt.units,
            amount: receipt.amount,
            nav: receipt.nav,
            realized_gain: receipt.realized_gain,
            timestamp: receipt.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_fields_fail_validation() {
        let request: BuyRequest = serde_json::from_str(r#"{"fundId":"MF001"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: SellRequest = serde_json::from_str(r#"{"fundId":"","unitsToSell":1}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_complete_request_validates() {
        let request: BuyRequest =
            serde_json::from_str(r#"{"fundId":"MF001","amount":1000}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.amount, Some(dec!(1000)));
    }
}
