use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::draft::parse_iso_date;
use crate::errors::CoreError;

/// Identifier assigned by the ledger when an expense is recorded.
/// Never reused within a session, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded spending entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on (never empty)
    pub description: String,

    /// Amount spent (finite, positive)
    pub amount: f64,

    /// Spending category
    pub category: Category,

    /// Day of the expense, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Expense {
    /// Attach an identifier to a validated payload.
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            description: new.description,
            amount: new.amount,
            category: new.category,
            date: new.date,
        }
    }
}

/// Validated payload coming out of the entry form; the ledger assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            date,
        }
    }

    /// Build a payload from a `YYYY-MM-DD` date string.
    pub fn on_iso_date(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        date: &str,
    ) -> Result<Self, CoreError> {
        let parsed = parse_iso_date(date.trim())
            .ok_or_else(|| CoreError::InvalidDate(date.to_string()))?;
        Ok(Self::new(description, amount, category, parsed))
    }
}
