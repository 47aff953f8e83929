use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryFilter};
use super::expense::{Expense, ExpenseId};
use super::selection::SortKey;

/// Shown in place of the list when no expense passes the filter.
pub const EMPTY_LIST_MESSAGE: &str = "No expenses found. Add some expenses to get started!";

/// The visible, ordered slice of the ledger plus its total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedView<'a> {
    /// Expenses passing the filter, in sort order
    pub visible: Vec<&'a Expense>,

    /// Sum of `amount` over `visible`
    pub total: f64,
}

impl<'a> ProjectedView<'a> {
    pub fn empty() -> Self {
        Self {
            visible: Vec::new(),
            total: 0.0,
        }
    }

    /// Number of visible expenses.
    #[must_use]
    pub fn count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Identifiers of the visible expenses, in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<ExpenseId> {
        self.visible.iter().map(|e| e.id).collect()
    }
}

/// Figures for the summary panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Period label, e.g. "This Month"
    pub period: String,

    /// Number of expenses counted
    pub expense_count: usize,

    /// Sum of their amounts
    pub total_amount: f64,
}

/// Display-ready rendering of a single expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCard {
    pub id: ExpenseId,
    pub category: Category,
    pub description: String,
    /// Machine-readable date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Date formatted per settings
    pub display_date: String,
    /// Amount formatted per settings, e.g. "$12.50"
    pub display_amount: String,
}

/// Serializable snapshot of a view together with the selection that produced it.
#[derive(Debug, Serialize)]
pub struct ViewSnapshot<'a> {
    pub filter: CategoryFilter,
    pub sort: SortKey,
    pub expenses: &'a [&'a Expense],
    pub total: f64,
    pub count: usize,
}
