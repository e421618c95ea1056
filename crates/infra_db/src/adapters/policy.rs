//! PostgreSQL Policy Adapter
//!
//! This module provides the internal (database) adapter for the policy
//! records domain, implementing the `InsurancePolicyPort` trait using
//! PostgreSQL via the `InsuranceRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError,
};
use domain_policy::{InsurancePolicy, InsurancePolicyPort, PolicyDraft};

use crate::error::DatabaseError;
use crate::repositories::insurance::{InsuranceRepository, InsuranceRow, NewInsurance};

const ADAPTER_ID: &str = "postgres-policy-adapter";

/// PostgreSQL-backed implementation of the InsurancePolicyPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
/// - `DatabaseError::ConstraintViolation` -> `PortError::Validation`
/// - Connection errors -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresPolicyAdapter {
    repository: InsuranceRepository,
    pool: PgPool,
}

impl PostgresPolicyAdapter {
    /// Creates a new PostgreSQL policy adapter
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InsuranceRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresPolicyAdapter {}

#[async_trait]
impl HealthCheckable for PostgresPolicyAdapter {
    /// Checks database connectivity with a `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl InsurancePolicyPort for PostgresPolicyAdapter {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = self.repository.find_all().await.map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(InsurancePolicy::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PolicyId) -> Result<Option<InsurancePolicy>, PortError> {
        let row = self
            .repository
            .find_by_id(id.value())
            .await
            .map_err(db_to_port_error)?;
        Ok(row.map(InsurancePolicy::from))
    }

    #[instrument(skip(self, draft), fields(policy_number = %draft.policy_number))]
    async fn insert(
        &self,
        draft: PolicyDraft,
        created_at: DateTime<Utc>,
    ) -> Result<InsurancePolicy, PortError> {
        let row = self
            .repository
            .insert(NewInsurance::from_draft(draft, created_at))
            .await
            .map_err(db_to_port_error)?;

        debug!(id = row.id, "Inserted insurance row");
        Ok(row.into())
    }

    #[instrument(skip(self, policy), fields(id = %policy.id))]
    async fn save(&self, policy: InsurancePolicy) -> Result<InsurancePolicy, PortError> {
        let row = InsuranceRow::from(policy);
        let saved = self.repository.update(&row).await.map_err(db_to_port_error)?;
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PolicyId) -> Result<bool, PortError> {
        self.repository
            .delete(id.value())
            .await
            .map_err(db_to_port_error)
    }
}

fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound { id } => PortError::not_found("InsurancePolicy", id),
        DatabaseError::DuplicateEntry { message, .. } => PortError::conflict(message),
        DatabaseError::ConstraintViolation(msg) => PortError::validation(msg),
        e if e.is_connection_error() => PortError::connection(e.to_string()),
        e => PortError::internal(e),
    }
}
