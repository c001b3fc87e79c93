//! Fund domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{FundId, PortError, UserId};

/// Errors that can occur in the fund domain
///
/// Every variant except `Store` is raised before any state is touched.
#[derive(Debug, Error)]
pub enum FundError {
    #[error("Mutual fund not found: {0}")]
    FundNotFound(FundId),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("No portfolio found for user {0}")]
    PortfolioNotFound(UserId),

    #[error("Holding not found for fund {0}")]
    HoldingNotFound(FundId),

    #[error("Insufficient units. Available: {}", available.normalize())]
    InsufficientUnits {
        available: Decimal,
        requested: Decimal,
    },

    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl FundError {
    pub fn invalid(message: impl Into<String>) -> Self {
        FundError::InvalidArgument(message.into())
    }

    /// Raised when a running total would leave the representable range
    pub fn size_exceeded() -> Self {
        FundError::invalid("Purchase exceeds the maximum portfolio size")
    }
}
