use super::expense::{Expense, ExpenseId};
use super::settings::Settings;

/// The in-memory record store. Lives for one session; nothing is written to disk.
///
/// Contains: expenses in insertion order, display settings, and the id
/// counter that guarantees identifiers are never reused.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// All recorded expenses, oldest insertion first
    pub expenses: Vec<Expense>,

    /// Display settings (currency symbol, date format, etc.)
    pub settings: Settings,

    /// Next identifier to hand out. Only ever grows.
    pub next_id: u64,

    /// Bumped on every mutation of `expenses`; drives view memoization.
    pub revision: u64,
}

impl Ledger {
    pub fn new(settings: Settings) -> Self {
        Self {
            expenses: Vec::new(),
            settings,
            next_id: 1,
            revision: 0,
        }
    }

    /// Hand out the next identifier.
    pub fn allocate_id(&mut self) -> ExpenseId {
        let id = ExpenseId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
