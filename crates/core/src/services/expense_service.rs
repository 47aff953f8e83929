use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::draft::{FormErrors, AMOUNT_INVALID, DESCRIPTION_REQUIRED};
use crate::models::expense::{Expense, ExpenseId, NewExpense};
use crate::models::ledger::Ledger;

/// Adds and removes expenses, enforcing the ledger's record invariants.
///
/// Pure business logic over an in-memory [`Ledger`]. No I/O.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Record a new expense and return its freshly assigned id.
    /// The payload is re-checked so a hand-built `NewExpense` cannot bypass the form rules.
    pub fn add_expense(&self, ledger: &mut Ledger, new: NewExpense) -> Result<ExpenseId, CoreError> {
        if let Err(errors) = self.validate(&new) {
            warn!(%errors, "rejected expense");
            return Err(CoreError::Validation(errors));
        }

        let id = ledger.allocate_id();
        let expense = Expense::from_new(
            id,
            NewExpense {
                description: new.description.trim().to_string(),
                ..new
            },
        );
        info!(
            id = %id,
            category = %expense.category,
            amount = expense.amount,
            date = %expense.date,
            "added expense"
        );
        ledger.expenses.push(expense);
        ledger.touch();
        Ok(id)
    }

    /// Remove the expense with `id`. Removing an unknown id is a no-op.
    pub fn remove_expense(&self, ledger: &mut Ledger, id: ExpenseId) -> Option<Expense> {
        let Some(idx) = ledger.expenses.iter().position(|e| e.id == id) else {
            debug!(id = %id, "remove ignored: no such expense");
            return None;
        };
        let removed = ledger.expenses.remove(idx);
        ledger.touch();
        info!(id = %id, "removed expense");
        Some(removed)
    }

    pub fn get_expense<'a>(&self, ledger: &'a Ledger, id: ExpenseId) -> Option<&'a Expense> {
        ledger.expenses.iter().find(|e| e.id == id)
    }

    /// Record invariants: non-blank description, finite positive amount.
    /// Category and date are already guaranteed by their types.
    pub fn validate(&self, new: &NewExpense) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if new.description.trim().is_empty() {
            errors.description = Some(DESCRIPTION_REQUIRED.to_string());
        }
        if !new.amount.is_finite() || new.amount <= 0.0 {
            errors.amount = Some(AMOUNT_INVALID.to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
