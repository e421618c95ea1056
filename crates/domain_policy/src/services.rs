//! Policy record service
//!
//! `PolicyService` mediates between the API layer and the persistence
//! port. It validates drafts, stamps timestamps, and turns a missing
//! record into [`PolicyError::NotFound`] for update and delete.

use std::sync::Arc;

use core_kernel::{now_micros, HealthCheckResult, PolicyId, PortError};
use tracing::{debug, info, warn};

use crate::error::PolicyError;
use crate::policy::{InsurancePolicy, PolicyDraft};
use crate::ports::InsurancePolicyPort;
use crate::validation::validate_draft;

/// Service for managing insurance policy records
///
/// Each operation performs a single read or write against the port (update
/// and delete look the record up first). Concurrent writers are serialized
/// only by the store.
#[derive(Clone)]
pub struct PolicyService {
    port: Arc<dyn InsurancePolicyPort>,
}

impl PolicyService {
    /// Creates a new service over the given store
    pub fn new(port: Arc<dyn InsurancePolicyPort>) -> Self {
        Self { port }
    }

    /// Returns every record in storage order, without pagination
    pub async fn list_all(&self) -> Result<Vec<InsurancePolicy>, PolicyError> {
        let policies = self.port.find_all().await?;
        debug!(count = policies.len(), "Listed insurance policies");
        Ok(policies)
    }

    /// Retrieves a record by id
    ///
    /// A missing id is `Ok(None)`, never an error.
    pub async fn get_by_id(&self, id: PolicyId) -> Result<Option<InsurancePolicy>, PolicyError> {
        Ok(self.port.find_by_id(id).await?)
    }

    /// Creates a new record
    ///
    /// # Errors
    ///
    /// * `PolicyError::Validation` - a required field is blank or an amount is negative
    /// * `PolicyError::DuplicatePolicyNumber` - the store already holds the policy number
    pub async fn create(&self, draft: PolicyDraft) -> Result<InsurancePolicy, PolicyError> {
        validate_draft(&draft)?;

        let policy = self.port.insert(draft, now_micros()).await.map_err(|e| {
            if e.is_conflict() {
                warn!(error = %e, "Rejected duplicate policy number");
            }
            PolicyError::from(e)
        })?;

        info!(id = %policy.id, policy_number = %policy.policy_number, "Created insurance policy");
        Ok(policy)
    }

    /// Replaces every mutable field of an existing record
    ///
    /// `id` and `created_at` are preserved and `updated_at` moves strictly
    /// forward.
    ///
    /// # Errors
    ///
    /// * `PolicyError::NotFound` - no record has the id; nothing is changed
    /// * `PolicyError::Validation` / `PolicyError::DuplicatePolicyNumber` - as for create
    pub async fn update(
        &self,
        id: PolicyId,
        draft: PolicyDraft,
    ) -> Result<InsurancePolicy, PolicyError> {
        validate_draft(&draft)?;

        let mut policy = self
            .port
            .find_by_id(id)
            .await?
            .ok_or(PolicyError::NotFound(id))?;

        policy.apply(draft, now_micros());

        let saved = self.port.save(policy).await.map_err(|e| not_found_or(id, e))?;
        info!(id = %saved.id, "Updated insurance policy");
        Ok(saved)
    }

    /// Permanently deletes a record
    ///
    /// # Errors
    ///
    /// * `PolicyError::NotFound` - no record has the id
    pub async fn delete(&self, id: PolicyId) -> Result<(), PolicyError> {
        if self.port.find_by_id(id).await?.is_none() {
            return Err(PolicyError::NotFound(id));
        }

        if !self.port.delete(id).await? {
            return Err(PolicyError::NotFound(id));
        }

        info!(id = %id, "Deleted insurance policy");
        Ok(())
    }

    /// Reports the health of the underlying store
    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}

// The record can vanish between lookup and write.
fn not_found_or(id: PolicyId, err: PortError) -> PolicyError {
    if err.is_not_found() {
        PolicyError::NotFound(id)
    } else {
        PolicyError::from(err)
    }
}
