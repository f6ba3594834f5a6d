use log::debug;
use std::sync::Arc;

use super::transactions_model::{ExpenseRecord, IncomeRecord, NewExpense, NewIncome};
use super::transactions_traits::TransactionRepositoryTrait;
use crate::errors::Result;

/// Service for managing income and expense records.
///
/// Carries the input-boundary validation; everything downstream of this
/// service assumes amounts are non-negative.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }

    pub fn get_incomes(&self, account_id: &str) -> Result<Vec<IncomeRecord>> {
        self.repository.get_incomes(account_id)
    }

    pub fn get_expenses(&self, account_id: &str) -> Result<Vec<ExpenseRecord>> {
        self.repository.get_expenses(account_id)
    }

    pub async fn create_income(&self, new_income: NewIncome) -> Result<IncomeRecord> {
        new_income.validate()?;
        debug!(
            "Creating income of {} for account {}",
            new_income.amount, new_income.account_id
        );
        self.repository.create_income(new_income).await
    }

    pub async fn update_income(&self, income: IncomeRecord) -> Result<IncomeRecord> {
        self.repository.update_income(income).await
    }

    pub async fn delete_income(&self, income_id: &str) -> Result<usize> {
        self.repository.delete_income(income_id).await
    }

    pub async fn create_expense(&self, new_expense: NewExpense) -> Result<ExpenseRecord> {
        new_expense.validate()?;
        debug!(
            "Creating expense of {} ({}) for account {}",
            new_expense.amount, new_expense.category, new_expense.account_id
        );
        self.repository.create_expense(new_expense).await
    }

    pub async fn update_expense(&self, expense: ExpenseRecord) -> Result<ExpenseRecord> {
        self.repository.update_expense(expense).await
    }

    pub async fn delete_expense(&self, expense_id: &str) -> Result<usize> {
        self.repository.delete_expense(expense_id).await
    }
}
