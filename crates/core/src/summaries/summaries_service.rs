use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::summaries_calculator::calculate_current_month;
use super::summaries_model::MonthlySummary;
use super::summaries_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
use crate::accounts::Account;
use crate::errors::Result;
use crate::transactions::{ExpenseRecord, IncomeRecord};

/// Service writing the per-month snapshot documents.
pub struct SummaryService {
    repository: Arc<dyn SummaryRepositoryTrait>,
}

impl SummaryService {
    /// Creates a new SummaryService instance.
    pub fn new(repository: Arc<dyn SummaryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl SummaryServiceTrait for SummaryService {
    async fn upsert_current_month(
        &self,
        account: &Account,
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        now: NaiveDate,
    ) -> Result<MonthlySummary> {
        let summary = calculate_current_month(account, incomes, expenses, now);
        debug!(
            "Upserting summary {} (income {}, expense {})",
            summary.id, summary.monthly_income, summary.monthly_expense
        );
        self.repository.upsert(summary).await
    }

    fn get_history(&self, account_id: &str) -> Result<Vec<MonthlySummary>> {
        self.repository.list_for_account(account_id)
    }
}
