// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::draft::FormErrors;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation() {
        let err = CoreError::Validation(FormErrors {
            amount: Some("Enter a valid amount.".into()),
            ..FormErrors::default()
        });
        assert_eq!(
            err.to_string(),
            "Expense validation failed: amount: Enter a valid amount."
        );
    }

    #[test]
    fn invalid_date() {
        let err = CoreError::InvalidDate("2024-13-01".into());
        assert_eq!(err.to_string(), "Invalid date '2024-13-01': expected YYYY-MM-DD");
    }

    #[test]
    fn unknown_category() {
        let err = CoreError::UnknownCategory("Foood".into());
        assert_eq!(err.to_string(), "Unknown category: Foood");
    }

    #[test]
    fn unknown_filter() {
        let err = CoreError::UnknownFilter("Rent".into());
        assert_eq!(err.to_string(), "Unknown category filter: Rent");
    }

    #[test]
    fn unknown_sort_key() {
        let err = CoreError::UnknownSortKey("price".into());
        assert_eq!(err.to_string(), "Unknown sort key: price");
    }

    #[test]
    fn invalid_setting() {
        let err = CoreError::InvalidSetting("decimal places must be at most 6, got 9".into());
        assert_eq!(
            err.to_string(),
            "Invalid setting: decimal places must be at most 6, got 9"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("key must be a string".into());
        assert_eq!(err.to_string(), "Serialization error: key must be a string");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_form_errors() {
        let errors = FormErrors {
            date: Some("Date is required.".into()),
            ..FormErrors::default()
        };
        let err: CoreError = errors.clone().into();
        assert!(matches!(err, CoreError::Validation(ref e) if *e == errors));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates() {
        fn parse(s: &str) -> Result<Vec<u32>, CoreError> {
            Ok(serde_json::from_str(s)?)
        }
        assert!(parse("[1]").is_ok());
        assert!(matches!(parse("nope"), Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn debug_contains_variant_name() {
        let err = CoreError::UnknownSortKey("x".into());
        assert!(format!("{err:?}").contains("UnknownSortKey"));
    }
}
