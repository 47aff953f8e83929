use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::category::CategoryFilter;
use crate::errors::CoreError;

/// Ordering applied to the visible expense list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest date first
    #[default]
    Date,
    /// Largest amount first
    Amount,
    /// Category name, A to Z
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Amount, SortKey::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Category => "category",
        }
    }

    /// Label shown next to the option in a sort picker.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date (newest)",
            SortKey::Amount => "Amount (high → low)",
            SortKey::Category => "Category (A → Z)",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownSortKey(s.to_string()))
    }
}

/// Transient list state chosen by the user. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub filter: CategoryFilter,
    pub sort: SortKey,
}

impl Selection {
    pub fn new(filter: CategoryFilter, sort: SortKey) -> Self {
        Self { filter, sort }
    }
}
