use serde::{Deserialize, Serialize};

/// User-configurable display settings, held in memory with the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol prefixed to every displayed amount (e.g., "$", "€", "zł").
    pub currency_symbol: String,

    /// Digits after the decimal point when displaying amounts.
    pub decimal_places: u8,

    /// chrono format string used to display expense dates (e.g., "%-m/%-d/%Y").
    pub date_format: String,

    /// Label of the period shown on the summary panel (e.g., "This Month").
    pub summary_period: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimal_places: 2,
            date_format: "%-m/%-d/%Y".to_string(),
            summary_period: "This Month".to_string(),
        }
    }
}
