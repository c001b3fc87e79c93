//! Core Kernel - Foundational types shared by the fund portfolio crates
//!
//! This crate provides the building blocks used across all modules:
//! - Strongly-typed identifiers
//! - Ports and adapters infrastructure (errors, health checks)

pub mod identifiers;
pub mod ports;

pub use identifiers::{FundId, UserId, PortfolioId, TransactionId};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
