//! Portfolio and catalog handlers

use axum::{extract::{Path, State}, Extension, Json};

use core_kernel::{FundId, UserId};
use domain_fund::{Fund, PortfolioValuation};

use crate::{AppState, error::ApiError};
use crate::dto::ApiResponse;
use crate::dto::portfolio::FundListResponse;

/// Values the caller's portfolio
pub async fn get_portfolio(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<ApiResponse<PortfolioValuation>>, ApiError> {
    let valuation = state
        .service
        .get_portfolio(&user_id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to retrieve portfolio"))?;

    Ok(match valuation {
        Some(valuation) => ApiResponse::ok("Portfolio retrieved successfully", valuation),
        None => ApiResponse::ok(
            "No portfolio found. Start by investing in mutual funds!",
            PortfolioValuation::empty(),
        ),
    })
}

/// Lists the fund catalog
pub async fn list_funds(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FundListResponse>>, ApiError> {
    let listing = state
        .service
        .list_funds()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to retrieve mutual funds"))?;

    Ok(ApiResponse::ok(
        "Mutual funds retrieved successfully",
        FundListResponse::from(listing),
    ))
}

/// Gets one fund
pub async fn get_fund(
    State(state): State<AppState>,
    Path(fund_id): Path<String>,
) -> Result<Json<ApiResponse<Fund>>, ApiError> {
    let fund = state
        .service
        .get_fund(&FundId::from(fund_id))
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to retrieve fund details"))?;

    Ok(ApiResponse::ok("Fund details retrieved successfully", fund))
}
