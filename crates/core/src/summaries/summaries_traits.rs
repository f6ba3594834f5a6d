//! Summary repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::summaries_model::MonthlySummary;
use crate::accounts::Account;
use crate::errors::Result;
use crate::transactions::{ExpenseRecord, IncomeRecord};

/// Trait defining the contract for MonthlySummary repository operations.
#[async_trait]
pub trait SummaryRepositoryTrait: Send + Sync {
    /// Create-or-merge write of one summary document.
    async fn upsert(&self, summary: MonthlySummary) -> Result<MonthlySummary>;

    fn get(&self, account_id: &str, year: i32, month: u32) -> Result<MonthlySummary>;

    /// Lists all summary documents for an account, oldest first.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<MonthlySummary>>;

    /// Deletes every summary belonging to an account (cascade path).
    async fn delete_for_account(&self, account_id: &str) -> Result<usize>;
}

/// Trait defining the contract for summary service operations.
#[async_trait]
pub trait SummaryServiceTrait: Send + Sync {
    /// Recomputes and upserts the summary for the month containing `now`.
    /// Historical months are never rewritten by this path.
    async fn upsert_current_month(
        &self,
        account: &Account,
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        now: NaiveDate,
    ) -> Result<MonthlySummary>;

    fn get_history(&self, account_id: &str) -> Result<Vec<MonthlySummary>>;
}
