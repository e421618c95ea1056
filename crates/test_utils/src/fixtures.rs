//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for policy records. These fixtures are
//! consistent and predictable for unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for monetary amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// Standard monthly premium
    pub fn premium() -> Decimal {
        dec!(120.50)
    }

    /// Standard coverage amount
    pub fn coverage() -> Decimal {
        dec!(50000)
    }

    /// A free policy
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    /// An amount that fails non-negativity checks
    pub fn negative() -> Decimal {
        dec!(-0.01)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2024)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// A date before the standard start, for unordered ranges
    pub fn before_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
    }

    /// Fixed creation timestamp
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
    }
}

/// Fixture for string field values
pub struct StringFixtures;

impl StringFixtures {
    /// Standard policy number
    pub fn policy_number() -> &'static str {
        "P-100"
    }

    /// Standard insurance type
    pub fn insurance_type() -> &'static str {
        "Auto"
    }

    /// Standard provider
    pub fn provider() -> &'static str {
        "Acme"
    }

    /// A description requiring CSV quoting
    pub fn quoted_description() -> &'static str {
        "He said, \"hi\"\nbye"
    }
}
