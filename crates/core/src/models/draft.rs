use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::expense::NewExpense;

pub const DESCRIPTION_REQUIRED: &str = "Description is required.";
pub const AMOUNT_INVALID: &str = "Enter a valid amount.";
pub const DATE_REQUIRED: &str = "Date is required.";
pub const DATE_INVALID: &str = "Enter a valid date.";
pub const CATEGORY_REQUIRED: &str = "Category is required.";
pub const CATEGORY_INVALID: &str = "Choose a valid category.";

/// Parse a fixed-width `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    // chrono alone would accept padded or signed fields like `2024-01- 5`
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Unvalidated text state of the "Add Expense" form.
///
/// Fields hold exactly what the user typed; nothing reaches the ledger
/// until [`ExpenseDraft::validate`] turns it into a [`NewExpense`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    /// A blank form dated `today`, with the first category preselected.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: Category::Food.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Clear the form back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every field and build the payload, or report all failing fields at once.
    pub fn validate(&self) -> Result<NewExpense, FormErrors> {
        let mut errors = FormErrors::default();

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some(DESCRIPTION_REQUIRED.to_string());
        }

        let amount = match self.amount.trim().parse::<f64>() {
            Ok(a) if a.is_finite() && a > 0.0 => Some(a),
            _ => {
                errors.amount = Some(AMOUNT_INVALID.to_string());
                None
            }
        };

        let date = self.date.trim();
        let date = if date.is_empty() {
            errors.date = Some(DATE_REQUIRED.to_string());
            None
        } else {
            let parsed = parse_iso_date(date);
            if parsed.is_none() {
                errors.date = Some(DATE_INVALID.to_string());
            }
            parsed
        };

        let category = if self.category.trim().is_empty() {
            errors.category = Some(CATEGORY_REQUIRED.to_string());
            None
        } else {
            let parsed = self.category.parse::<Category>().ok();
            if parsed.is_none() {
                errors.category = Some(CATEGORY_INVALID.to_string());
            }
            parsed
        };

        match (amount, category, date) {
            (Some(amount), Some(category), Some(date)) if errors.is_empty() => Ok(NewExpense {
                description: description.to_string(),
                amount,
                category,
                date,
            }),
            _ => Err(errors),
        }
    }
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self::blank(Utc::now().date_naive())
    }
}

/// Which form field an error message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Description,
    Amount,
    Category,
    Date,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Description => write!(f, "description"),
            FormField::Amount => write!(f, "amount"),
            FormField::Category => write!(f, "category"),
            FormField::Date => write!(f, "date"),
        }
    }
}

/// Per-field validation messages shown inline under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Description => self.description.as_deref(),
            FormField::Amount => self.amount.as_deref(),
            FormField::Category => self.category.as_deref(),
            FormField::Date => self.date.as_deref(),
        }
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> Vec<FormField> {
        [
            FormField::Description,
            FormField::Amount,
            FormField::Category,
            FormField::Date,
        ]
        .into_iter()
        .filter(|f| self.get(*f).is_some())
        .collect()
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .into_iter()
            .filter_map(|field| self.get(field).map(|msg| format!("{field}: {msg}")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
