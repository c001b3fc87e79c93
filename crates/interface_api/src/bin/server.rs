//! Mutual Fund API - Server Binary
//!
//! Starts the HTTP API over in-memory stores seeded with the fund catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin fund-api
//!
//! API_PORT=8080 API_JWT_SECRET=... cargo run --bin fund-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 3000)
//! * `API_JWT_SECRET` - HS256 secret for bearer tokens (set in production)
//! * `API_JWT_EXPIRATION_SECS` - Lifetime of issued tokens (default: 3600)
//! * `API_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `API_DEV_TOKEN_USER` - Logs a ready-made token for this user at startup

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use core_kernel::UserId;
use interface_api::{auth::create_token, config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Invalid API configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Mutual Fund API server"
    );

    if let Some(user) = config.dev_token_user.as_deref() {
        let token = create_token(&UserId::from(user), &config.jwt_secret, config.jwt_expiration_secs)?;
        tracing::info!(%user, %token, "Development bearer token");
    }

    let service = Arc::new(infra_memory::in_memory_service());
    let app = create_router(service, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");
    tracing::info!("Health check: http://{addr}/api/health");
    tracing::info!("Portfolio API: http://{addr}/api/portfolio");
    tracing::info!("Transaction API: http://{addr}/api/transaction");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
