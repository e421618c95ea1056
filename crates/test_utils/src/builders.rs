//! Test Data Builders
//!
//! Provides a builder for constructing policy drafts with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::NaiveDate;
use domain_policy::PolicyDraft;
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing test policy drafts
#[derive(Debug, Clone)]
pub struct PolicyDraftBuilder {
    draft: PolicyDraft,
}

impl Default for PolicyDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyDraftBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            draft: PolicyDraft::new(
                StringFixtures::policy_number(),
                StringFixtures::insurance_type(),
                StringFixtures::provider(),
                AmountFixtures::premium(),
                AmountFixtures::coverage(),
                TemporalFixtures::policy_start(),
            ),
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.draft.policy_number = number.into();
        self
    }

    /// Sets the insurance type
    pub fn with_insurance_type(mut self, insurance_type: impl Into<String>) -> Self {
        self.draft.insurance_type = insurance_type.into();
        self
    }

    /// Sets the provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.draft.provider = provider.into();
        self
    }

    /// Sets the premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.draft.premium = premium;
        self
    }

    /// Sets the coverage amount
    pub fn with_coverage_amount(mut self, amount: Decimal) -> Self {
        self.draft.coverage_amount = amount;
        self
    }

    /// Sets the start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.draft.start_date = date;
        self
    }

    /// Sets the end date
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.draft.end_date = Some(date);
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.draft.status = status.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = Some(description.into());
        self
    }

    /// Builds the draft
    pub fn build(self) -> PolicyDraft {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let draft = PolicyDraftBuilder::new().build();
        assert_eq!(draft.policy_number, "P-100");
        assert_eq!(draft.status, "Active");
        assert!(draft.end_date.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let draft = PolicyDraftBuilder::new()
            .with_policy_number("H-2")
            .with_status("Cancelled")
            .with_end_date(TemporalFixtures::policy_end())
            .with_description("note")
            .build();

        assert_eq!(draft.policy_number, "H-2");
        assert_eq!(draft.status, "Cancelled");
        assert_eq!(draft.end_date, Some(TemporalFixtures::policy_end()));
        assert_eq!(draft.description.as_deref(), Some("note"));
    }
}
