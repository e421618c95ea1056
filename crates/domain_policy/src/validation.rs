//! Field validation for policy drafts
//!
//! Checks are explicit rather than derived so each rule reads in one place:
//! required text must be non-blank, amounts must be non-negative, and the
//! description is bounded. Presence of required fields is already enforced
//! by deserialization.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::PolicyError;
use crate::policy::{PolicyDraft, DESCRIPTION_MAX_LEN};

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn check_text(value: &str, message: &'static str) -> Option<ValidationError> {
    value.trim().is_empty().then(|| error("blank", message))
}

fn check_amount(value: Decimal, message: &'static str) -> Option<ValidationError> {
    (value < Decimal::ZERO).then(|| error("range", message))
}

impl Validate for PolicyDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let checks: [(&'static str, Option<ValidationError>); 6] = [
            ("policyNumber", check_text(&self.policy_number, "Policy number is required")),
            ("insuranceType", check_text(&self.insurance_type, "Insurance type is required")),
            ("provider", check_text(&self.provider, "Provider is required")),
            (
                "premium",
                check_amount(self.premium, "Premium must be greater than or equal to 0"),
            ),
            (
                "coverageAmount",
                check_amount(self.coverage_amount, "Coverage amount must be greater than or equal to 0"),
            ),
            (
                "description",
                self.description
                    .as_deref()
                    .filter(|d| d.chars().count() > DESCRIPTION_MAX_LEN)
                    .map(|_| error("length", "Description must be at most 500 characters")),
            ),
        ];

        let mut errors = ValidationErrors::new();
        let mut failed = false;
        for (field, result) in checks {
            if let Some(err) = result {
                errors.add(field, err);
                failed = true;
            }
        }

        if failed {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

/// Formats validation errors into a single message, ordered by field name
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates a draft, reporting failures as a domain error
pub fn validate_draft(draft: &PolicyDraft) -> Result<(), PolicyError> {
    draft
        .validate()
        .map_err(|e| PolicyError::Validation(describe(&e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valid_draft() -> PolicyDraft {
        PolicyDraft::new(
            "P-100",
            "Auto",
            "Acme",
            dec!(120.50),
            dec!(50000),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_zero_amounts_are_allowed() {
        let mut draft = valid_draft();
        draft.premium = Decimal::ZERO;
        draft.coverage_amount = Decimal::ZERO;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_blank_strings_rejected() {
        let mut draft = valid_draft();
        draft.policy_number = "   ".to_string();
        draft.provider = String::new();

        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("policyNumber"));
        assert!(fields.contains_key("provider"));
        assert!(!fields.contains_key("insuranceType"));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut draft = valid_draft();
        draft.premium = dec!(-0.01);
        draft.coverage_amount = dec!(-5);

        let message = validate_draft(&draft).unwrap_err().to_string();
        assert!(message.contains("Premium must be greater than or equal to 0"));
        assert!(message.contains("Coverage amount must be greater than or equal to 0"));
    }

    #[test]
    fn test_description_length_bound() {
        let mut draft = valid_draft();
        draft.description = Some("x".repeat(DESCRIPTION_MAX_LEN));
        assert!(draft.validate().is_ok());

        draft.description = Some("x".repeat(DESCRIPTION_MAX_LEN + 1));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_end_date_before_start_is_not_checked() {
        let mut draft = valid_draft();
        draft.end_date = Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_describe_orders_by_field() {
        let mut draft = valid_draft();
        draft.provider = String::new();
        draft.coverage_amount = dec!(-1);

        let errors = draft.validate().unwrap_err();
        assert_eq!(
            describe(&errors),
            "Coverage amount must be greater than or equal to 0, Provider is required"
        );
    }
}
