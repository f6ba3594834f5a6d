//! Transaction repository implementation.
//!
//! Every mutation republishes the owning account's full collection snapshot
//! to its watch subscribers.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use pocketfolio_core::errors::{Error, Result};
use pocketfolio_core::transactions::{
    CollectionWatch, ExpenseRecord, IncomeRecord, NewExpense, NewIncome,
    TransactionRepositoryTrait,
};

use crate::store::StoreInner;

#[derive(Clone)]
pub struct TransactionStore {
    inner: Arc<StoreInner>,
}

impl TransactionStore {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionStore {
    fn get_incomes(&self, account_id: &str) -> Result<Vec<IncomeRecord>> {
        Ok(self.inner.income_snapshot(account_id))
    }

    fn get_expenses(&self, account_id: &str) -> Result<Vec<ExpenseRecord>> {
        Ok(self.inner.expense_snapshot(account_id))
    }

    async fn create_income(&self, new_income: NewIncome) -> Result<IncomeRecord> {
        let record = IncomeRecord {
            id: new_income.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            account_id: new_income.account_id,
            amount: new_income.amount,
            date: new_income.date,
            is_recurring: new_income.is_recurring,
        };
        self.inner.incomes.insert(record.id.clone(), record.clone());
        self.inner.publish_incomes(&record.account_id);
        Ok(record)
    }

    async fn update_income(&self, income: IncomeRecord) -> Result<IncomeRecord> {
        if !self.inner.incomes.contains_key(&income.id) {
            return Err(Error::NotFound(format!("income {}", income.id)));
        }
        self.inner.incomes.insert(income.id.clone(), income.clone());
        self.inner.publish_incomes(&income.account_id);
        Ok(income)
    }

    async fn delete_income(&self, income_id: &str) -> Result<usize> {
        match self.inner.incomes.remove(income_id) {
            Some((_, record)) => {
                self.inner.publish_incomes(&record.account_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<ExpenseRecord> {
        let record = ExpenseRecord {
            id: new_expense.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            account_id: new_expense.account_id,
            amount: new_expense.amount,
            date: new_expense.date,
            category: new_expense.category,
            is_recurring: new_expense.is_recurring,
            frequency: new_expense.frequency,
        };
        self.inner
            .expenses
            .insert(record.id.clone(), record.clone());
        self.inner.publish_expenses(&record.account_id);
        Ok(record)
    }

    async fn update_expense(&self, expense: ExpenseRecord) -> Result<ExpenseRecord> {
        if !self.inner.expenses.contains_key(&expense.id) {
            return Err(Error::NotFound(format!("expense {}", expense.id)));
        }
        self.inner
            .expenses
            .insert(expense.id.clone(), expense.clone());
        self.inner.publish_expenses(&expense.account_id);
        Ok(expense)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<usize> {
        match self.inner.expenses.remove(expense_id) {
            Some((_, record)) => {
                self.inner.publish_expenses(&record.account_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_for_account(&self, account_id: &str) -> Result<usize> {
        let income_ids: Vec<String> = self
            .inner
            .incomes
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.key().clone())
            .collect();
        let expense_ids: Vec<String> = self
            .inner
            .expenses
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.key().clone())
            .collect();

        let removed = income_ids.len() + expense_ids.len();
        debug!(
            "Deleting {} transactions for account {}",
            removed, account_id
        );
        for id in income_ids {
            self.inner.incomes.remove(&id);
        }
        for id in expense_ids {
            self.inner.expenses.remove(&id);
        }
        self.inner.publish_incomes(account_id);
        self.inner.publish_expenses(account_id);
        Ok(removed)
    }

    fn watch_incomes(&self, account_id: &str) -> Result<CollectionWatch<IncomeRecord>> {
        Ok(self.inner.income_watch(account_id))
    }

    fn watch_expenses(&self, account_id: &str) -> Result<CollectionWatch<ExpenseRecord>> {
        Ok(self.inner.expense_watch(account_id))
    }
}
