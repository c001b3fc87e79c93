//! Request handlers

pub mod health;
pub mod portfolio;
pub mod transaction;

use axum::{http::StatusCode, Json};

use crate::dto::ApiResponse;

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::failure("API endpoint not found")))
}
