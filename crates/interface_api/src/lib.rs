//! HTTP API Layer
//!
//! This crate provides the REST API for the mutual fund service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health, portfolio and transactions
//! - **Middleware**: Bearer-token authentication and audit logging
//! - **DTOs**: Request bodies and the `{success, message, data}` envelope
//! - **Error Handling**: Domain errors mapped to status codes and messages
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(infra_memory::in_memory_service()), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_fund::PortfolioService;

use crate::config::ApiConfig;
use crate::middleware::{auth_middleware, audit_middleware};
use crate::handlers::{health, portfolio, transaction};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PortfolioService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Portfolio service backing every route
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: Arc<PortfolioService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let portfolio_routes = Router::new()
        .route("/portfolio", get(portfolio::get_portfolio))
        .route("/portfolio/funds", get(portfolio::list_funds))
        .route("/portfolio/funds/:fund_id", get(portfolio::get_fund));

    let transaction_routes = Router::new()
        .route("/transaction/buy", post(transaction::buy))
        .route("/transaction/sell", post(transaction::sell))
        .route("/transaction/history", get(transaction::history));

    // Protected routes
    let protected_routes = Router::new()
        .merge(portfolio_routes)
        .merge(transaction_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Wrong methods on known paths get the same envelope as unknown paths
    let api_routes = public_routes
        .merge(protected_routes)
        .method_not_allowed_fallback(handlers::not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
