use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::expense::Expense;
use crate::models::settings::Settings;
use crate::models::view::{ExpenseCard, ExpenseSummary, ProjectedView};

/// Turns expenses and views into display strings using the current [`Settings`].
///
/// Presentation only; a render layer is free to use its own formatter instead.
pub struct FormatService;

impl FormatService {
    pub fn new() -> Self {
        Self
    }

    /// `12.5` → `"$12.50"` with default settings.
    pub fn format_amount(&self, settings: &Settings, amount: f64) -> String {
        format!(
            "{}{:.*}",
            settings.currency_symbol,
            usize::from(settings.decimal_places),
            amount
        )
    }

    /// Format per `settings.date_format`, falling back to ISO if the pattern can't render.
    pub fn format_date(&self, settings: &Settings, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&settings.date_format)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn card(&self, settings: &Settings, expense: &Expense) -> ExpenseCard {
        ExpenseCard {
            id: expense.id,
            category: expense.category,
            description: expense.description.clone(),
            date: expense.date,
            display_date: self.format_date(settings, expense.date),
            display_amount: self.format_amount(settings, expense.amount),
        }
    }

    /// One-line list header, e.g. `"Total: $20.50 (2 expenses)"`.
    pub fn view_caption(&self, settings: &Settings, view: &ProjectedView<'_>) -> String {
        format!(
            "Total: {} ({} expenses)",
            self.format_amount(settings, view.total),
            view.count()
        )
    }

    pub fn summary(&self, settings: &Settings, expenses: &[Expense]) -> ExpenseSummary {
        ExpenseSummary {
            period: settings.summary_period.clone(),
            expense_count: expenses.len(),
            total_amount: expenses.iter().fold(0.0, |acc, e| acc + e.amount),
        }
    }

    /// Returns `true` if chrono can render `pattern` for a calendar date.
    ///
    /// Time and offset specifiers parse fine but fail at render time on a
    /// `NaiveDate`, so the pattern is rendered once against a sample date.
    pub fn is_valid_date_format(pattern: &str) -> bool {
        if pattern.trim().is_empty()
            || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
        {
            return false;
        }
        let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 1) else {
            return false;
        };
        let mut out = String::new();
        write!(out, "{}", sample.format(pattern)).is_ok()
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}
