//! Budget repository implementation.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use pocketfolio_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use pocketfolio_core::errors::{Error, Result};

use crate::store::StoreInner;

#[derive(Clone)]
pub struct BudgetStore {
    inner: Arc<StoreInner>,
}

impl BudgetStore {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetStore {
    fn get_by_id(&self, budget_id: &str) -> Result<Budget> {
        self.inner
            .budgets
            .get(budget_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("budget {}", budget_id)))
    }

    fn list(&self) -> Result<Vec<Budget>> {
        let mut budgets: Vec<Budget> = self
            .inner
            .budgets
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        budgets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(budgets)
    }

    fn list_by_account(&self, account_id: &str) -> Result<Vec<Budget>> {
        let mut budgets: Vec<Budget> = self
            .inner
            .budgets
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect();
        budgets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(budgets)
    }

    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        let budget = Budget {
            id: new_budget.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            account_id: new_budget.account_id,
            category: new_budget.category,
            budget_amount: new_budget.budget_amount,
            period: new_budget.period,
            alert_threshold: new_budget.alert_threshold,
        };
        self.inner.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    async fn update(&self, budget: Budget) -> Result<Budget> {
        if !self.inner.budgets.contains_key(&budget.id) {
            return Err(Error::NotFound(format!("budget {}", budget.id)));
        }
        self.inner.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    async fn delete(&self, budget_id: &str) -> Result<usize> {
        Ok(self.inner.budgets.remove(budget_id).map_or(0, |_| 1))
    }

    async fn delete_for_account(&self, account_id: &str) -> Result<usize> {
        let ids: Vec<String> = self
            .inner
            .budgets
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.key().clone())
            .collect();
        let removed = ids.len();
        for id in ids {
            self.inner.budgets.remove(&id);
        }
        Ok(removed)
    }
}
