use std::cmp::Ordering;

use tracing::debug;

use crate::models::category::CategoryFilter;
use crate::models::expense::Expense;
use crate::models::selection::{Selection, SortKey};
use crate::models::view::ProjectedView;

/// Computes the visible, ordered expense list and its total.
///
/// Pure: same inputs always give the same output, and the input slice is
/// never reordered. Safe to call on every render.
pub struct ViewProjector;

impl ViewProjector {
    pub fn new() -> Self {
        Self
    }

    /// Filter `expenses` by category, sort by `sort`, and total the result.
    pub fn project<'a>(
        &self,
        expenses: &'a [Expense],
        filter: CategoryFilter,
        sort: SortKey,
    ) -> ProjectedView<'a> {
        let order = self.order(expenses, filter, sort);
        Self::materialize(expenses, &order)
    }

    /// Positions into `expenses` of the visible records, in display order.
    pub fn order(&self, expenses: &[Expense], filter: CategoryFilter, sort: SortKey) -> Vec<usize> {
        let mut order: Vec<usize> = expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| filter.matches(e.category))
            .map(|(i, _)| i)
            .collect();

        // sort_by is stable: ties keep their filtered (insertion) order
        order.sort_by(|&a, &b| Self::compare(&expenses[a], &expenses[b], sort));
        order
    }

    /// Ordering predicate for a sort key.
    pub fn compare(a: &Expense, b: &Expense, sort: SortKey) -> Ordering {
        match sort {
            SortKey::Date => b.date.cmp(&a.date),
            SortKey::Amount => b.amount.total_cmp(&a.amount),
            SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
        }
    }

    fn materialize<'a>(expenses: &'a [Expense], order: &[usize]) -> ProjectedView<'a> {
        let visible: Vec<&Expense> = order.iter().filter_map(|&i| expenses.get(i)).collect();
        let total = visible.iter().fold(0.0, |acc, e| acc + e.amount);
        ProjectedView { visible, total }
    }
}

impl Default for ViewProjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Last projection, keyed on the ledger revision and the selection that produced it.
struct CachedProjection {
    revision: u64,
    selection: Selection,
    order: Vec<usize>,
}

/// Memoizes [`ViewProjector`] output until the ledger or the selection changes.
pub struct ProjectionCache {
    entry: Option<CachedProjection>,
    computations: u64,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }

    /// Returns `true` if a projection for exactly these inputs is held.
    #[must_use]
    pub fn is_fresh(&self, revision: u64, selection: Selection) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|c| c.revision == revision && c.selection == selection)
    }

    /// Number of times the projector actually ran.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Return the cached projection if inputs are unchanged, otherwise recompute.
    ///
    /// `revision` must change whenever `expenses` does; the cached positions
    /// are only meaningful for the slice they were computed from.
    pub fn get_or_compute<'a>(
        &mut self,
        projector: &ViewProjector,
        expenses: &'a [Expense],
        revision: u64,
        selection: Selection,
    ) -> ProjectedView<'a> {
        if !self.is_fresh(revision, selection) {
            let order = projector.order(expenses, selection.filter, selection.sort);
            self.computations += 1;
            debug!(
                revision,
                filter = %selection.filter,
                sort = %selection.sort,
                visible = order.len(),
                "recomputed expense view"
            );
            self.entry = Some(CachedProjection {
                revision,
                selection,
                order,
            });
        } else {
            debug!(revision, "expense view cache hit");
        }

        match &self.entry {
            Some(cached) => ViewProjector::materialize(expenses, &cached.order),
            None => ProjectedView::empty(),
        }
    }
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new()
    }
}
