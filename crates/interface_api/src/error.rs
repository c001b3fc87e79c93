//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use domain_fund::FundError;
use crate::dto::ApiResponse;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a domain error to its HTTP form
    ///
    /// Storage faults are logged and replaced by `failure_message` so no
    /// internals reach the client.
    pub fn from_domain(err: FundError, failure_message: &str) -> Self {
        match err {
            FundError::InvalidArgument(message) => ApiError::BadRequest(message),
            FundError::InsufficientUnits { .. } => ApiError::BadRequest(err.to_string()),
            FundError::FundNotFound(_) => ApiError::NotFound("Mutual fund not found".to_string()),
            FundError::PortfolioNotFound(_) => ApiError::NotFound("No portfolio found".to_string()),
            FundError::HoldingNotFound(_) => {
                ApiError::NotFound("Holding not found for this fund".to_string())
            }
            FundError::Store(source) => {
                error!(error = %source, "{failure_message}");
                ApiError::Internal(failure_message.to_string())
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Internal(msg) => msg,
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use core_kernel::{FundId, PortError};

    #[test]
    fn test_domain_mapping() {
        let err = ApiError::from_domain(FundError::FundNotFound(FundId::from("MF999")), "x");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from_domain(
            FundError::InsufficientUnits { available: dec!(2.5), requested: dec!(3) },
            "x",
        );
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Insufficient units. Available: 2.5"));
    }

    #[test]
    fn test_store_errors_are_hidden() {
        let err = ApiError::from_domain(
            FundError::Store(PortError::internal("lock poisoned")),
            "Failed to process sale",
        );
        assert!(matches!(err, ApiError::Internal(ref m) if m == "Failed to process sale"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
