pub mod errors;
pub mod models;
pub mod services;

use models::{
    category::CategoryFilter,
    draft::ExpenseDraft,
    expense::{Expense, ExpenseId, NewExpense},
    ledger::Ledger,
    selection::{Selection, SortKey},
    settings::Settings,
    view::{ExpenseCard, ExpenseSummary, ProjectedView, ViewSnapshot},
};
use services::{
    expense_service::ExpenseService,
    format_service::FormatService,
    projection_service::{ProjectionCache, ViewProjector},
};
use tracing::info;

use errors::CoreError;

/// Largest supported number of decimal places for displayed amounts.
const MAX_DECIMAL_PLACES: u8 = 6;

/// Main entry point for the Expense Tracker core library.
/// Holds the session's expenses, the list selection, and the services that act on them.
#[must_use]
pub struct ExpenseTracker {
    ledger: Ledger,
    selection: Selection,
    expense_service: ExpenseService,
    projector: ViewProjector,
    format_service: FormatService,
    cache: ProjectionCache,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("expenses", &self.ledger.expenses.len())
            .field("selection", &self.selection)
            .field("settings", &self.ledger.settings)
            .field("revision", &self.ledger.revision)
            .finish()
    }
}

impl ExpenseTracker {
    /// Start an empty session with default settings.
    pub fn new() -> Self {
        Self::build(Ledger::default())
    }

    /// Start an empty session with custom display settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self::build(Ledger::new(settings))
    }

    // ── Expense Management ──────────────────────────────────────────

    /// Record a validated expense. Returns the id assigned to it.
    pub fn add_expense(&mut self, new: NewExpense) -> Result<ExpenseId, CoreError> {
        self.expense_service.add_expense(&mut self.ledger, new)
    }

    /// Validate the entry form and record it.
    /// On success the draft is reset to a blank form; on failure it is left untouched
    /// and the per-field messages are returned in `CoreError::Validation`.
    pub fn submit_draft(&mut self, draft: &mut ExpenseDraft) -> Result<ExpenseId, CoreError> {
        let new = draft.validate()?;
        let id = self.add_expense(new)?;
        draft.reset();
        Ok(id)
    }

    /// Remove an expense by id. Unknown ids are ignored and yield `None`.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        self.expense_service.remove_expense(&mut self.ledger, id)
    }

    #[must_use]
    pub fn get_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expense_service.get_expense(&self.ledger, id)
    }

    /// All expenses in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.ledger.expenses.len()
    }

    // ── Selection ───────────────────────────────────────────────────

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.selection.filter != filter {
            info!(filter = %filter, "changed category filter");
        }
        self.selection.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.selection.sort != sort {
            info!(sort = %sort, "changed sort key");
        }
        self.selection.sort = sort;
    }

    /// Set the filter from its text form ("All", "Food", ...).
    /// Unknown values are rejected and the current filter is kept.
    pub fn set_filter_str(&mut self, filter: &str) -> Result<(), CoreError> {
        let filter = filter.parse::<CategoryFilter>()?;
        self.set_filter(filter);
        Ok(())
    }

    /// Set the sort key from its text form ("date", "amount", "category").
    pub fn set_sort_str(&mut self, sort: &str) -> Result<(), CoreError> {
        let sort = sort.parse::<SortKey>()?;
        self.set_sort(sort);
        Ok(())
    }

    /// Back to `All` / `date`, as when the list is first shown.
    pub fn reset_selection(&mut self) {
        self.selection = Selection::default();
    }

    // ── Views ───────────────────────────────────────────────────────

    /// The visible list for the current selection.
    /// Recomputed only when expenses or the selection changed since the last call.
    pub fn view(&mut self) -> ProjectedView<'_> {
        self.cache.get_or_compute(
            &self.projector,
            &self.ledger.expenses,
            self.ledger.revision,
            self.selection,
        )
    }

    /// Project with an explicit selection, bypassing the cache and the current selection.
    #[must_use]
    pub fn project(&self, filter: CategoryFilter, sort: SortKey) -> ProjectedView<'_> {
        self.projector.project(&self.ledger.expenses, filter, sort)
    }

    /// Number of times the visible list was actually recomputed.
    #[must_use]
    pub fn view_computations(&self) -> u64 {
        self.cache.computations()
    }

    /// Display cards for the visible list, in display order.
    pub fn visible_cards(&mut self) -> Vec<ExpenseCard> {
        let view = self.cache.get_or_compute(
            &self.projector,
            &self.ledger.expenses,
            self.ledger.revision,
            self.selection,
        );
        view.visible
            .iter()
            .map(|e| self.format_service.card(&self.ledger.settings, e))
            .collect()
    }

    /// List header for the visible list, e.g. `"Total: $20.50 (2 expenses)"`.
    pub fn view_caption(&mut self) -> String {
        let view = self.cache.get_or_compute(
            &self.projector,
            &self.ledger.expenses,
            self.ledger.revision,
            self.selection,
        );
        self.format_service.view_caption(&self.ledger.settings, &view)
    }

    /// Summary panel figures over every recorded expense, ignoring the filter.
    #[must_use]
    pub fn summary(&self) -> ExpenseSummary {
        self.format_service
            .summary(&self.ledger.settings, &self.ledger.expenses)
    }

    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        self.format_service.format_amount(&self.ledger.settings, amount)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.ledger.settings
    }

    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<(), CoreError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSetting(
                "currency symbol must not be empty".into(),
            ));
        }
        self.ledger.settings.currency_symbol = trimmed.to_string();
        Ok(())
    }

    pub fn set_decimal_places(&mut self, places: u8) -> Result<(), CoreError> {
        if places > MAX_DECIMAL_PLACES {
            return Err(CoreError::InvalidSetting(format!(
                "decimal places must be at most {MAX_DECIMAL_PLACES}, got {places}"
            )));
        }
        self.ledger.settings.decimal_places = places;
        Ok(())
    }

    /// Set the chrono pattern used for display dates (e.g., "%d.%m.%Y").
    pub fn set_date_format(&mut self, pattern: &str) -> Result<(), CoreError> {
        if !FormatService::is_valid_date_format(pattern) {
            return Err(CoreError::InvalidSetting(format!(
                "unsupported date format '{pattern}'"
            )));
        }
        self.ledger.settings.date_format = pattern.to_string();
        Ok(())
    }

    pub fn set_summary_period(&mut self, period: impl Into<String>) {
        self.ledger.settings.summary_period = period.into();
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export every expense (insertion order) as a JSON array.
    pub fn export_expenses_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.expenses)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses to JSON: {e}")))
    }

    /// Export the visible list as JSON: `{ "filter", "sort", "expenses", "total", "count" }`.
    pub fn export_view_to_json(&mut self) -> Result<String, CoreError> {
        let selection = self.selection;
        let view = self.view();
        let snapshot = ViewSnapshot {
            filter: selection.filter,
            sort: selection.sort,
            expenses: &view.visible,
            total: view.total,
            count: view.count(),
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize view to JSON: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            selection: Selection::default(),
            expense_service: ExpenseService::new(),
            projector: ViewProjector::new(),
            format_service: FormatService::new(),
            cache: ProjectionCache::new(),
        }
    }
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new()
    }
}
