//! Monthly summary domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Builds the deterministic document key for one (account, month) pair.
pub fn summary_id(account_id: &str, year: i32, month: u32) -> String {
    format!("{}_{}_{:02}", account_id, year, month)
}

/// Month-windowed snapshot of one account's activity.
///
/// Unlike the account aggregate's `monthly_savings` (which mirrors the full
/// current balance), `monthly_savings` here is genuinely month-scoped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub id: String,
    pub account_id: String,
    pub month: u32,
    pub year: i32,
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    pub monthly_savings: Decimal,
    pub savings_rate: Decimal,
}
