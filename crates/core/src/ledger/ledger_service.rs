use chrono::Utc;
use log::{debug, warn};
use std::sync::{Arc, RwLock};

use super::ledger_calculator::calculate_aggregate;
use super::ledger_traits::LedgerServiceTrait;
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::errors::Result;
use crate::goals::GoalServiceTrait;
use crate::summaries::SummaryServiceTrait;
use crate::transactions::{ExpenseRecord, IncomeRecord};

/// The aggregation engine.
///
/// Recomputes an account's aggregate fields from the latest record snapshots
/// and unconditionally fires the dependent writers afterwards; no old/new
/// field-diffing decides whether downstream runs.
pub struct LedgerService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    summary_service: Arc<dyn SummaryServiceTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
    /// The account currently selected in the UI. Goal auto-tracking reflects
    /// only this account; recomputes for other accounts skip propagation.
    active_account_id: Arc<RwLock<Option<String>>>,
}

impl LedgerService {
    /// Creates a new LedgerService instance.
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        summary_service: Arc<dyn SummaryServiceTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
    ) -> Self {
        Self {
            account_repository,
            summary_service,
            goal_service,
            active_account_id: Arc::new(RwLock::new(None)),
        }
    }

    /// Marks an account as the active one (or clears the selection).
    pub fn set_active_account(&self, account_id: Option<String>) {
        *self.active_account_id.write().unwrap() = account_id;
    }

    /// Returns the currently active account id, if any.
    pub fn active_account_id(&self) -> Option<String> {
        self.active_account_id.read().unwrap().clone()
    }

    fn is_active(&self, account_id: &str) -> bool {
        self.active_account_id
            .read()
            .unwrap()
            .as_deref()
            .is_some_and(|active| active == account_id)
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn recompute(
        &self,
        account_id: &str,
        incomes: Vec<IncomeRecord>,
        expenses: Vec<ExpenseRecord>,
    ) -> Result<Account> {
        debug!(
            "Recomputing aggregates for account {} ({} incomes, {} expenses)",
            account_id,
            incomes.len(),
            expenses.len()
        );

        // A missing account aborts the recompute with no write. No retry is
        // scheduled; the next upstream change re-triggers the pipeline.
        let account = self.account_repository.get_by_id(account_id)?;
        let aggregate = calculate_aggregate(&account, &incomes, &expenses);
        let updated = self
            .account_repository
            .apply_aggregate(account_id, &aggregate)
            .await?;

        // Independent best-effort side effects: a failure here must not roll
        // back the aggregate write that already succeeded.
        let today = Utc::now().date_naive();
        if let Err(err) = self
            .summary_service
            .upsert_current_month(&updated, &incomes, &expenses, today)
            .await
        {
            warn!(
                "Monthly summary update failed for account {}: {}",
                account_id, err
            );
        }

        if self.is_active(account_id) {
            if let Err(err) = self.goal_service.propagate(&updated).await {
                warn!(
                    "Goal auto-tracking propagation failed for account {}: {}",
                    account_id, err
                );
            }
        }

        Ok(updated)
    }
}
