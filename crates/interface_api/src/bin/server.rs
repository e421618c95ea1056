//! Insurance Records - API Server Binary
//!
//! This binary starts the HTTP API server for insurance policy records.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin insurance-api
//!
//! # Run against an in-memory store
//! API_STORAGE=memory API_PORT=8080 cargo run --bin insurance-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_STORAGE` - `postgres` or `memory` (default: postgres)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `API_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_ALLOWED_ORIGINS` - Comma-separated CORS origins (default: localhost:3000, localhost:3001)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use domain_policy::ports::memory::InMemoryPolicyPort;
use domain_policy::{InsurancePolicyPort, PolicyService};
use infra_db::{adapters::PostgresPolicyAdapter, create_pool, run_migrations, DatabaseConfig};
use interface_api::config::{ApiConfig, StorageBackend};
use interface_api::create_router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, opens the record store,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Database connection or migration fails
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = ?config.storage,
        "Starting insurance records API server"
    );

    let port = open_store(&config).await?;
    let app = create_router(PolicyService::new(port), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Opens the configured record store.
///
/// For PostgreSQL this creates the connection pool and applies migrations.
async fn open_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn InsurancePolicyPort>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on shutdown");
            Ok(Arc::new(InMemoryPolicyPort::new()))
        }
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::new(config.database_url.clone())
                .max_connections(config.db_max_connections);
            let pool = create_pool(db_config)
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("failed to apply migrations")?;
            Ok(Arc::new(PostgresPolicyAdapter::new(pool)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
