//! Buy, sell and history handlers

use axum::{extract::{rejection::JsonRejection, State}, Extension, Json};
use validator::Validate;

use core_kernel::{FundId, UserId};
use domain_fund::HistoryEntry;

use crate::{AppState, error::ApiError};
use crate::dto::ApiResponse;
use crate::dto::transaction::*;

/// Buys units of a fund for the caller
pub async fn buy(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    payload: Result<Json<BuyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BuyResponse>>, ApiError> {
    let Json(request) = payload?;
    let missing = || ApiError::BadRequest("Fund ID and amount are required".to_string());
    request.validate().map_err(|_| missing())?;
    let (Some(fund_id), Some(amount)) = (request.fund_id, request.amount) else {
        return Err(missing());
    };

    let receipt = state
        .service
        .buy(&user_id, &FundId::from(fund_id), amount)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to process purchase"))?;

    Ok(ApiResponse::ok("Mutual fund purchase successful", BuyResponse::from(receipt)))
}

/// Sells units of a held fund for the caller
pub async fn sell(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    payload: Result<Json<SellRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SellResponse>>, ApiError> {
    let Json(request) = payload?;
    let missing = || ApiError::BadRequest("Fund ID and units to sell are required".to_string());
    request.validate().map_err(|_| missing())?;
    let (Some(fund_id), Some(units)) = (request.fund_id, request.units_to_sell) else {
        return Err(missing());
    };

    let receipt = state
        .service
        .sell(&user_id, &FundId::from(fund_id), units)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to process sale"))?;

    Ok(ApiResponse::ok("Mutual fund sale successful", SellResponse::from(receipt)))
}

/// Lists the caller's transactions, newest first
pub async fn history(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<ApiResponse<Vec<HistoryEntry>>>, ApiError> {
    let entries = state
        .service
        .history(&user_id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to retrieve transaction history"))?;

    Ok(ApiResponse::ok("Transaction history retrieved successfully", entries))
}
