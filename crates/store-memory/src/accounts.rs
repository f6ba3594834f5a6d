//! Account repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use pocketfolio_core::accounts::{
    Account, AccountAggregate, AccountRepositoryTrait, NewAccount,
};
use pocketfolio_core::errors::{Error, Result};

use crate::store::StoreInner;

#[derive(Clone)]
pub struct AccountStore {
    inner: Arc<StoreInner>,
}

impl AccountStore {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountStore {
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.inner
            .accounts
            .get(account_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("account {}", account_id)))
    }

    fn list(&self) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .inner
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(accounts)
    }

    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        let now = Utc::now().naive_utc();
        let account = Account {
            id: new_account
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_account.name,
            starting_balance: new_account.starting_balance,
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            // A fresh account's balance is its opening balance until the
            // first recompute lands.
            current_balance: new_account.starting_balance,
            monthly_savings: new_account.starting_balance,
            savings_rate: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        self.inner
            .accounts
            .insert(account.id.clone(), account.clone());
        debug!("Created account {} ({})", account.id, account.name);
        Ok(account)
    }

    async fn apply_aggregate(
        &self,
        account_id: &str,
        aggregate: &AccountAggregate,
    ) -> Result<Account> {
        let mut entry = self
            .inner
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| Error::NotFound(format!("account {}", account_id)))?;
        let now = Utc::now().naive_utc();
        entry.value_mut().apply_aggregate(aggregate, now);
        Ok(entry.value().clone())
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        Ok(self.inner.accounts.remove(account_id).map_or(0, |_| 1))
    }
}
