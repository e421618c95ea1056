//! Insurance policy record
//!
//! [`InsurancePolicy`] is the stored record. [`PolicyDraft`] carries the
//! mutable field set: it is the request body for both create and update,
//! and an update always replaces every field it holds.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{advance_past, PolicyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status given to records created without one
pub const DEFAULT_STATUS: &str = "Active";

/// Maximum description length in characters
pub const DESCRIPTION_MAX_LEN: usize = 500;

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// The mutable fields of a policy record
///
/// `status` is free-form (conventionally Active, Expired or Cancelled) and
/// defaults to [`DEFAULT_STATUS`] when the request omits it. No ordering
/// between `start_date` and `end_date` is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDraft {
    pub policy_number: String,
    pub insurance_type: String,
    pub provider: String,
    pub premium: Decimal,
    pub coverage_amount: Decimal,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl PolicyDraft {
    /// Creates a draft with the required fields and default status
    pub fn new(
        policy_number: impl Into<String>,
        insurance_type: impl Into<String>,
        provider: impl Into<String>,
        premium: Decimal,
        coverage_amount: Decimal,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            policy_number: policy_number.into(),
            insurance_type: insurance_type.into(),
            provider: provider.into(),
            premium,
            coverage_amount,
            start_date,
            end_date: None,
            status: default_status(),
            description: None,
        }
    }
}

/// A persisted insurance policy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub id: PolicyId,
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

impl InsurancePolicy {
    /// Builds a freshly created record; both timestamps are `created_at`
    pub fn from_draft(id: PolicyId, draft: PolicyDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
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
            updated_at: created_at,
        }
    }

    /// Overwrites every mutable field and refreshes `updated_at`
    ///
    /// `id` and `created_at` are untouched. The new `updated_at` is strictly
    /// later than the previous one.
    pub fn apply(&mut self, draft: PolicyDraft, now: DateTime<Utc>) {
        self.policy_number = draft.policy_number;
        self.insurance_type = draft.insurance_type;
        self.provider = draft.provider;
        self.premium = draft.premium;
        self.coverage_amount = draft.coverage_amount;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.status = draft.status;
        self.description = draft.description;
        self.updated_at = advance_past(self.updated_at, now);
    }

    /// Returns the mutable field set of this record
    pub fn to_draft(&self) -> PolicyDraft {
        PolicyDraft {
            policy_number: self.policy_number.clone(),
            insurance_type: self.insurance_type.clone(),
            provider: self.provider.clone(),
            premium: self.premium,
            coverage_amount: self.coverage_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.clone(),
            description: self.description.clone(),
        }
    }
}
