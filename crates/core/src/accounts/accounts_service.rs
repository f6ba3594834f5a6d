use log::{debug, warn};
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::budgets::BudgetRepositoryTrait;
use crate::errors::Result;
use crate::summaries::{initial_summary, SummaryRepositoryTrait};
use crate::transactions::TransactionRepositoryTrait;

/// Service for managing accounts.
///
/// Coordinates creation (including the creation-month summary snapshot) and
/// cascade deletion across the child collections.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    summary_repository: Arc<dyn SummaryRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        summary_repository: Arc<dyn SummaryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
            budget_repository,
            summary_repository,
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!("Creating account '{}'", new_account.name);

        let account = self.repository.create(new_account).await?;

        // The creation-month snapshot absorbs the opening balance. A failed
        // summary write is not fatal: the next recompute rewrites it.
        if let Err(err) = self.summary_repository.upsert(initial_summary(&account)).await {
            warn!(
                "Failed to write creation-month summary for account {}: {}",
                account.id, err
            );
        }

        Ok(account)
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    async fn delete_account(&self, account_id: &str) -> Result<()> {
        debug!("Deleting account {} and its child records", account_id);

        self.repository.delete(account_id).await?;
        self.transaction_repository
            .delete_for_account(account_id)
            .await?;
        self.budget_repository.delete_for_account(account_id).await?;
        self.summary_repository
            .delete_for_account(account_id)
            .await?;
        Ok(())
    }
}
