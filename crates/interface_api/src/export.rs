//! CSV export of policy records
//!
//! One header row, then one row per record in listing order. Every line
//! ends with `\n`. Dates render as `YYYY-MM-DD`, timestamps as
//! `YYYY-MM-DD HH:MM:SS`, and absent values as empty fields.

use std::borrow::Cow;

use core_kernel::{format_date, format_timestamp};
use domain_policy::InsurancePolicy;

/// File name offered to the client
pub const EXPORT_FILE_NAME: &str = "insurances_export.csv";

/// Column header row
pub const CSV_HEADER: &str = "ID,Policy Number,Insurance Type,Provider,Premium,Coverage Amount,Start Date,End Date,Status,Description,Created At,Updated At";

/// Escapes a single CSV field
///
/// The field is wrapped in double quotes, with internal quotes doubled, if
/// and only if it contains a comma, a double quote, or a newline.
pub fn escape_csv(value: &str) -> Cow<'_, str> {
    if value.contains(&[',', '"', '\n'][..]) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Renders one record as a CSV line, without the terminator
pub fn csv_row(policy: &InsurancePolicy) -> String {
    let fields: [Cow<'_, str>; 12] = [
        Cow::Owned(policy.id.to_string()),
        escape_csv(&policy.policy_number),
        escape_csv(&policy.insurance_type),
        escape_csv(&policy.provider),
        Cow::Owned(policy.premium.to_string()),
        Cow::Owned(policy.coverage_amount.to_string()),
        Cow::Owned(format_date(Some(policy.start_date))),
        Cow::Owned(format_date(policy.end_date)),
        escape_csv(&policy.status),
        escape_csv(policy.description.as_deref().unwrap_or("")),
        Cow::Owned(format_timestamp(Some(policy.created_at))),
        Cow::Owned(format_timestamp(Some(policy.updated_at))),
    ];
    fields.join(",")
}

/// Renders the full export document
pub fn render_csv(policies: &[InsurancePolicy]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + policies.len() * 128);
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for policy in policies {
        csv.push_str(&csv_row(policy));
        csv.push('\n');
    }
    csv
}

/// `Content-Disposition` value for the export download
pub fn content_disposition() -> String {
    format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use core_kernel::PolicyId;
    use domain_policy::PolicyDraft;
    use rust_decimal_macros::dec;

    fn policy() -> InsurancePolicy {
        let draft = PolicyDraft::new(
            "P-100",
            "Auto",
            "Acme",
            dec!(120.50),
            dec!(50000.00),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        InsurancePolicy::from_draft(
            PolicyId::new(1),
            draft,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[test]
    fn test_plain_field_is_unescaped() {
        assert_eq!(escape_csv("simple"), "simple");
        assert!(matches!(escape_csv("simple"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_characters_are_quoted() {
        assert_eq!(
            escape_csv("He said, \"hi\"\nbye"),
            "\"He said, \"\"hi\"\"\nbye\""
        );
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape_csv("\""), "\"\"\"\"");
    }

    #[test]
    fn test_carriage_return_alone_is_not_quoted() {
        assert_eq!(escape_csv("a\rb"), "a\rb");
    }

    #[test]
    fn test_row_with_absent_optionals() {
        assert_eq!(
            csv_row(&policy()),
            "1,P-100,Auto,Acme,120.50,50000.00,2024-01-01,,Active,,2024-01-02 03:04:05,2024-01-02 03:04:05"
        );
    }

    #[test]
    fn test_row_with_all_fields() {
        let mut policy = policy();
        policy.end_date = NaiveDate::from_ymd_opt(2024, 12, 31);
        policy.status = "Cancelled".to_string();
        policy.description = Some("Fleet, 3 vehicles".to_string());

        assert_eq!(
            csv_row(&policy),
            "1,P-100,Auto,Acme,120.50,50000.00,2024-01-01,2024-12-31,Cancelled,\"Fleet, 3 vehicles\",2024-01-02 03:04:05,2024-01-02 03:04:05"
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(render_csv(&[]), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_export_keeps_listing_order() {
        let first = policy();
        let mut second = policy();
        second.id = PolicyId::new(2);
        second.policy_number = "P-200".to_string();

        let csv = render_csv(&[second, first]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2,P-200,"));
        assert!(lines[2].starts_with("1,P-100,"));
    }

    #[test]
    fn test_content_disposition() {
        assert_eq!(
            content_disposition(),
            "attachment; filename=\"insurances_export.csv\""
        );
    }
}
