//! Insurance policy repository implementation
//!
//! This module provides database access for the `insurances` table.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use core_kernel::PolicyId;
use domain_policy::{InsurancePolicy, PolicyDraft};

use crate::error::{classify, DatabaseError};

const COLUMNS: &str = r#"
    id,
    policy_number,
    insurance_type,
    provider,
    premium,
    coverage_amount,
    start_date,
    end_date,
    status,
    description,
    created_at,
    updated_at
"#;

/// Repository for managing insurance policy rows
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::InsuranceRepository;
///
/// let repo = InsuranceRepository::new(pool);
/// let row = repo.find_by_id(42).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InsuranceRepository {
    pool: PgPool,
}

impl InsuranceRepository {
    /// Creates a new InsuranceRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves every row ordered by id
    pub async fn find_all(&self) -> Result<Vec<InsuranceRow>, DatabaseError> {
        let sql = format!("SELECT {COLUMNS} FROM insurances ORDER BY id ASC");

        let rows = sqlx::query_as::<_, InsuranceRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        debug!(count = rows.len(), "Fetched insurance rows");
        Ok(rows)
    }

    /// Retrieves a row by id
    ///
    /// # Returns
    ///
    /// The row, or `None` if no row has the id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<InsuranceRow>, DatabaseError> {
        let sql = format!("SELECT {COLUMNS} FROM insurances WHERE id = $1");

        sqlx::query_as::<_, InsuranceRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    /// Inserts a new row
    ///
    /// # Arguments
    ///
    /// * `policy` - The row data to insert
    ///
    /// # Returns
    ///
    /// The created row with its generated id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if the policy number already exists
    pub async fn insert(&self, policy: NewInsurance) -> Result<InsuranceRow, DatabaseError> {
        let sql = format!(
            r#"
            INSERT INTO insurances (
                policy_number,
                insurance_type,
                provider,
                premium,
                coverage_amount,
                start_date,
                end_date,
                status,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING {COLUMNS}
            "#
        );

        sqlx::query_as::<_, InsuranceRow>(&sql)
            .bind(policy.policy_number)
            .bind(policy.insurance_type)
            .bind(policy.provider)
            .bind(policy.premium)
            .bind(policy.coverage_amount)
            .bind(policy.start_date)
            .bind(policy.end_date)
            .bind(policy.status)
            .bind(policy.description)
            .bind(policy.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    /// Overwrites the mutable columns of an existing row
    ///
    /// `id` and `created_at` are never written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has the id and
    /// `DatabaseError::DuplicateEntry` if the policy number belongs to another row
    pub async fn update(&self, row: &InsuranceRow) -> Result<InsuranceRow, DatabaseError> {
        let sql = format!(
            r#"
            UPDATE insurances
            SET policy_number = $2,
                insurance_type = $3,
                provider = $4,
                premium = $5,
                coverage_amount = $6,
                start_date = $7,
                end_date = $8,
                status = $9,
                description = $10,
                updated_at = $11
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );

        sqlx::query_as::<_, InsuranceRow>(&sql)
            .bind(row.id)
            .bind(&row.policy_number)
            .bind(&row.insurance_type)
            .bind(&row.provider)
            .bind(row.premium)
            .bind(row.coverage_amount)
            .bind(row.start_date)
            .bind(row.end_date)
            .bind(&row.status)
            .bind(&row.description)
            .bind(row.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?
            .ok_or_else(|| DatabaseError::not_found(row.id))
    }

    /// Deletes a row by id
    ///
    /// # Returns
    ///
    /// `true` if a row was removed
    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM insurances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.rows_affected() > 0)
    }
}

/// Database row representation of an insurance policy
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InsuranceRow {
    pub id: i64,
    pub policy_number: String,
    pub insurance_type: String,
    pub provider: String,
    pub premium: Decimal,
    pub coverage_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new insurance row
#[derive(Debug, Clone)]
pub struct NewInsurance {
    pub policy_number: String,
    pub insurance_type: String,
    pub provider: String,
    pub premium: Decimal,
    pub coverage_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewInsurance {
    /// Builds the insert data for a draft stamped at `created_at`
    pub fn from_draft(draft: PolicyDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            policy_number: draft.policy_number,
            insurance_type: draft.insurance_type,
            provider: draft.provider,
            premium: draft.premium,
            coverage_amount: draft.coverage_amount,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            description: draft.description,
            created_at,
        }
    }
}

impl From<InsuranceRow> for InsurancePolicy {
    fn from(row: InsuranceRow) -> Self {
        InsurancePolicy {
            id: PolicyId::new(row.id),
            policy_number: row.policy_number,
            insurance_type: row.insurance_type,
            provider: row.provider,
            premium: row.premium,
            coverage_amount: row.coverage_amount,
            start_date: row.start_date,
            end_date: row.end_date,
            status: row.status,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<InsurancePolicy> for InsuranceRow {
    fn from(policy: InsurancePolicy) -> Self {
        InsuranceRow {
            id: policy.id.value(),
            policy_number: policy.policy_number,
            insurance_type: policy.insurance_type,
            provider: policy.provider,
            premium: policy.premium,
            coverage_amount: policy.coverage_amount,
            start_date: policy.start_date,
            end_date: policy.end_date,
            status: policy.status,
            description: policy.description,
            created_at: policy.created_at,
            updated_at: policy.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_policy_conversion_round_trips() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
        let draft = PolicyDraft::new(
            "P-7",
            "Home",
            "Initech",
            dec!(42.00),
            dec!(150000.00),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        );
        let policy = InsurancePolicy::from_draft(PolicyId::new(7), draft, created);

        let row = InsuranceRow::from(policy.clone());
        assert_eq!(row.id, 7);
        assert_eq!(InsurancePolicy::from(row), policy);
    }

    #[test]
    fn test_new_insurance_keeps_default_status() {
        let draft = PolicyDraft::new(
            "P-8",
            "Auto",
            "Acme",
            dec!(1),
            dec!(2),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        );
        let new = NewInsurance::from_draft(draft, Utc::now());
        assert_eq!(new.status, "Active");
    }
}
