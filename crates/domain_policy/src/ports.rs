//! Persistence port for policy records
//!
//! The `InsurancePolicyPort` trait defines every operation the record
//! service needs from its store. Adapters:
//!
//! - **PostgreSQL** (`infra_db::adapters::PostgresPolicyAdapter`): the
//!   production store, with a unique constraint on the policy number
//! - **In-memory** ([`memory::InMemoryPolicyPort`]): for tests and local runs
//!
//! Policy number uniqueness belongs to the store. A collision is reported
//! as [`PortError::Conflict`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{DomainPort, HealthCheckable, PolicyId, PortError};

use crate::policy::{InsurancePolicy, PolicyDraft};

/// Port trait for policy record storage
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations.
#[async_trait]
pub trait InsurancePolicyPort: DomainPort + HealthCheckable {
    /// Returns every record in the store's default order (ascending id)
    async fn find_all(&self) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Retrieves a record by id, or `None` if absent
    async fn find_by_id(&self, id: PolicyId) -> Result<Option<InsurancePolicy>, PortError>;

    /// Inserts a new record, assigning its id
    ///
    /// # Arguments
    ///
    /// * `draft` - The field values of the new record
    /// * `created_at` - Creation timestamp; also the initial `updated_at`
    ///
    /// # Returns
    ///
    /// The stored record, or `PortError::Conflict` if the policy number is taken
    async fn insert(
        &self,
        draft: PolicyDraft,
        created_at: DateTime<Utc>,
    ) -> Result<InsurancePolicy, PortError>;

    /// Writes every mutable field and `updated_at` of an existing record
    ///
    /// Returns `PortError::NotFound` if the record no longer exists and
    /// `PortError::Conflict` if the new policy number belongs to another record.
    async fn save(&self, policy: InsurancePolicy) -> Result<InsurancePolicy, PortError>;

    /// Removes a record permanently
    ///
    /// # Returns
    ///
    /// `true` if a record was deleted, `false` if none had the id
    async fn delete(&self, id: PolicyId) -> Result<bool, PortError>;
}

/// In-memory adapter for testing and local runs
///
/// Stores records in a `BTreeMap` keyed by id, so listing order matches the
/// ascending-id order of the PostgreSQL adapter. Amounts are rescaled to two
/// decimal places, mirroring the `NUMERIC(19,2)` columns.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use rust_decimal::Decimal;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    const AMOUNT_SCALE: u32 = 2;
    /// Exclusive magnitude bound of a `NUMERIC(19,2)` value (17 integer digits)
    const AMOUNT_LIMIT: u64 = 100_000_000_000_000_000;

    fn to_column_scale(field: &str, mut value: Decimal) -> Result<Decimal, PortError> {
        value.rescale(AMOUNT_SCALE);
        if value.abs() >= Decimal::from(AMOUNT_LIMIT) {
            return Err(PortError::validation(format!(
                "{} {} is out of range for NUMERIC(19,2)",
                field, value
            )));
        }
        Ok(value)
    }

    fn duplicate(policy_number: &str) -> PortError {
        PortError::conflict(format!(
            "InsurancePolicy with policy number '{}' already exists",
            policy_number
        ))
    }

    /// In-memory implementation of InsurancePolicyPort
    #[derive(Debug)]
    pub struct InMemoryPolicyPort {
        records: RwLock<BTreeMap<PolicyId, InsurancePolicy>>,
        next_id: AtomicI64,
    }

    impl Default for InMemoryPolicyPort {
        fn default() -> Self {
            Self {
                records: RwLock::new(BTreeMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl InMemoryPolicyPort {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored records
        pub async fn len(&self) -> usize {
            self.records.read().await.len()
        }

        /// Whether the store holds no records
        pub async fn is_empty(&self) -> bool {
            self.records.read().await.is_empty()
        }
    }

    impl DomainPort for InMemoryPolicyPort {}

    #[async_trait]
    impl HealthCheckable for InMemoryPolicyPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("in-memory-policy-port", 0)
        }
    }

    #[async_trait]
    impl InsurancePolicyPort for InMemoryPolicyPort {
        async fn find_all(&self) -> Result<Vec<InsurancePolicy>, PortError> {
            Ok(self.records.read().await.values().cloned().collect())
        }

        async fn find_by_id(&self, id: PolicyId) -> Result<Option<InsurancePolicy>, PortError> {
            Ok(self.records.read().await.get(&id).cloned())
        }

        async fn insert(
            &self,
            mut draft: PolicyDraft,
            created_at: DateTime<Utc>,
        ) -> Result<InsurancePolicy, PortError> {
            draft.premium = to_column_scale("premium", draft.premium)?;
            draft.coverage_amount = to_column_scale("coverage_amount", draft.coverage_amount)?;

            let mut records = self.records.write().await;
            if records.values().any(|p| p.policy_number == draft.policy_number) {
                return Err(duplicate(&draft.policy_number));
            }

            let id = PolicyId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let policy = InsurancePolicy::from_draft(id, draft, created_at);
            records.insert(id, policy.clone());
            Ok(policy)
        }

        async fn save(&self, mut policy: InsurancePolicy) -> Result<InsurancePolicy, PortError> {
            let mut records = self.records.write().await;
            // A missing row takes precedence, as with `UPDATE ... WHERE id`.
            policy.created_at = records
                .get(&policy.id)
                .map(|stored| stored.created_at)
                .ok_or_else(|| PortError::not_found("InsurancePolicy", policy.id))?;

            policy.premium = to_column_scale("premium", policy.premium)?;
            policy.coverage_amount = to_column_scale("coverage_amount", policy.coverage_amount)?;

            if records
                .values()
                .any(|p| p.id != policy.id && p.policy_number == policy.policy_number)
            {
                return Err(duplicate(&policy.policy_number));
            }

            records.insert(policy.id, policy.clone());
            Ok(policy)
        }

        async fn delete(&self, id: PolicyId) -> Result<bool, PortError> {
            Ok(self.records.write().await.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryPolicyPort;
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn draft(number: &str) -> PolicyDraft {
        PolicyDraft::new(
            number,
            "Auto",
            "Acme",
            dec!(120.5),
            dec!(50000),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let port = InMemoryPolicyPort::new();
        let first = port.insert(draft("P-1"), Utc::now()).await.unwrap();
        let second = port.insert(draft("P-2"), Utc::now()).await.unwrap();

        assert_eq!(first.id, PolicyId::new(1));
        assert_eq!(second.id, PolicyId::new(2));
        assert_eq!(port.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_rescales_amounts() {
        let port = InMemoryPolicyPort::new();
        let policy = port.insert(draft("P-1"), Utc::now()).await.unwrap();
        assert_eq!(policy.premium.to_string(), "120.50");
        assert_eq!(policy.coverage_amount.to_string(), "50000.00");
    }

    #[tokio::test]
    async fn test_duplicate_policy_number_conflicts() {
        let port = InMemoryPolicyPort::new();
        port.insert(draft("P-1"), Utc::now()).await.unwrap();

        let err = port.insert(draft("P-1"), Utc::now()).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(port.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_rejects_number_owned_by_other_record() {
        let port = InMemoryPolicyPort::new();
        port.insert(draft("P-1"), Utc::now()).await.unwrap();
        let mut second = port.insert(draft("P-2"), Utc::now()).await.unwrap();

        second.policy_number = "P-1".to_string();
        assert!(port.save(second).await.unwrap_err().is_conflict());
    }

    #[tokio::test]
    async fn test_save_missing_record_is_not_found() {
        let port = InMemoryPolicyPort::new();
        let ghost = InsurancePolicy::from_draft(PolicyId::new(99), draft("P-9"), Utc::now());
        assert!(port.save(ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_save_missing_record_with_taken_number_is_not_found() {
        let port = InMemoryPolicyPort::new();
        port.insert(draft("P-1"), Utc::now()).await.unwrap();

        let ghost = InsurancePolicy::from_draft(PolicyId::new(99), draft("P-1"), Utc::now());
        assert!(port.save(ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_amounts_beyond_numeric_19_2_are_rejected() {
        let port = InMemoryPolicyPort::new();

        let mut too_large = draft("P-1");
        too_large.premium = dec!(100000000000000000);
        let err = port.insert(too_large, Utc::now()).await.unwrap_err();
        assert!(matches!(err, PortError::Validation { .. }));

        // Rounding to two places can push a value over the bound
        let mut rounds_over = draft("P-1");
        rounds_over.coverage_amount = dec!(99999999999999999.995);
        assert!(port.insert(rounds_over, Utc::now()).await.is_err());

        let mut largest = draft("P-1");
        largest.premium = dec!(99999999999999999.99);
        let stored = port.insert(largest, Utc::now()).await.unwrap();
        assert_eq!(stored.id, PolicyId::new(1));

        let mut changed = stored.clone();
        changed.premium = dec!(-100000000000000000);
        let err = port.save(changed).await.unwrap_err();
        assert!(matches!(err, PortError::Validation { .. }));
        assert_eq!(port.find_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let port = InMemoryPolicyPort::new();
        let policy = port.insert(draft("P-1"), Utc::now()).await.unwrap();

        assert!(port.delete(policy.id).await.unwrap());
        assert!(!port.delete(policy.id).await.unwrap());
        assert!(port.is_empty().await);
    }
}
