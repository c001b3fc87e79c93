//! Unit tests for the Identifiers module
//!
//! Tests cover generated (UUID) and externally assigned (code) identifiers,
//! their creation, parsing, conversion, and display formatting.

use core_kernel::{FundId, PortfolioId, TransactionId, UserId};
use std::collections::HashSet;
use uuid::Uuid;

mod transaction_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = TransactionId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = TransactionId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(TransactionId::prefix(), "TXN");
        assert_eq!(PortfolioId::prefix(), "PORT");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: TransactionId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("TXN-not-a-uuid".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_json_serialization_is_bare_uuid() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod code_id_tests {
    use super::*;

    #[test]
    fn test_fund_id_round_trips_through_json() {
        let id: FundId = serde_json::from_str("\"MF007\"").unwrap();
        assert_eq!(id.as_str(), "MF007");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"MF007\"");
    }

    #[test]
    fn test_user_id_equality_and_hashing() {
        let mut users = HashSet::new();
        users.insert(UserId::from("alice"));
        users.insert(UserId::new("alice".to_string()));
        users.insert(UserId::from("bob"));
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(UserId::from("user-42").to_string(), "user-42");
    }
}
