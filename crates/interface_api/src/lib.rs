//! HTTP API Layer
//!
//! This crate provides the REST API for insurance policy records using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One handler per record operation, plus health checks
//! - **Extractors**: JSON bodies are deserialized and validated before handlers run
//! - **Export**: CSV rendering of the full record list
//! - **Middleware**: Request id propagation, tracing, audit logging, CORS
//! - **Error Handling**: Mapping of domain failures to HTTP statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod extractors;
pub mod middleware;
pub mod handlers;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use domain_policy::PolicyService;
use tower_http::cors::{Any, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{health, policy};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PolicyService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Record service over the configured store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: PolicyService, config: ApiConfig) -> Router {
    let cors = cors_layer(&config.allowed_origins);
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let insurance_routes = Router::new()
        .route("/", get(policy::list_policies).post(policy::create_policy))
        .route("/export", get(policy::export_policies))
        .route(
            "/:id",
            get(policy::get_policy)
                .put(policy::update_policy)
                .delete(policy::delete_policy),
        );

    Router::new()
        .merge(public_routes)
        .nest("/api/insurances", insurance_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer for the configured origins
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
