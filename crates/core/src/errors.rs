use thiserror::Error;

use crate::models::draft::FormErrors;

/// Unified error type for the entire expense-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Entry Validation ────────────────────────────────────────────
    #[error("Expense validation failed: {0}")]
    Validation(FormErrors),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    // ── Closed Enumerations ─────────────────────────────────────────
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown category filter: {0}")]
    UnknownFilter(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<FormErrors> for CoreError {
    fn from(errors: FormErrors) -> Self {
        CoreError::Validation(errors)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
