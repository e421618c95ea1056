//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating policy drafts that satisfy
//! the field validation rules.

use chrono::NaiveDate;
use domain_policy::{PolicyDraft, DESCRIPTION_MAX_LEN};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for calendar dates between 2000 and 2049
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2050, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for non-blank text that may contain CSV special characters
pub fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,\"\n-]{0,30}"
}

/// Strategy for free-form status values
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Active".to_string()),
        Just("Expired".to_string()),
        Just("Cancelled".to_string()),
        text_strategy(),
    ]
}

/// Strategy for valid policy drafts
pub fn policy_draft_strategy() -> impl Strategy<Value = PolicyDraft> {
    (
        "[A-Z]{1,3}-[0-9]{1,6}",
        text_strategy(),
        text_strategy(),
        amount_strategy(),
        amount_strategy(),
        date_strategy(),
        proptest::option::of(date_strategy()),
        status_strategy(),
        proptest::option::of(
            proptest::collection::vec(any::<char>(), 0..DESCRIPTION_MAX_LEN)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
        ),
    )
        .prop_map(
            |(
                policy_number,
                insurance_type,
                provider,
                premium,
                coverage_amount,
                start_date,
                end_date,
                status,
                description,
            )| PolicyDraft {
                policy_number,
                insurance_type,
                provider,
                premium,
                coverage_amount,
                start_date,
                end_date,
                status,
                description,
            },
        )
}
