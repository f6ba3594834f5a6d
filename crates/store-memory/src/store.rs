//! The shared in-memory document store.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::watch;

use pocketfolio_core::accounts::Account;
use pocketfolio_core::budgets::Budget;
use pocketfolio_core::goals::SavingsGoal;
use pocketfolio_core::summaries::MonthlySummary;
use pocketfolio_core::transactions::{ExpenseRecord, IncomeRecord};

use crate::accounts::AccountStore;
use crate::budgets::BudgetStore;
use crate::goals::GoalStore;
use crate::summaries::SummaryStore;
use crate::transactions::TransactionStore;

/// All collections plus the per-account watch publishers.
///
/// Each `DashMap` entry replacement is the store's atomic per-document
/// write; cross-document consistency is only eventual.
pub(crate) struct StoreInner {
    pub accounts: DashMap<String, Account>,
    pub incomes: DashMap<String, IncomeRecord>,
    pub expenses: DashMap<String, ExpenseRecord>,
    pub budgets: DashMap<String, Budget>,
    pub goals: DashMap<String, SavingsGoal>,
    pub summaries: DashMap<String, MonthlySummary>,
    income_channels: DashMap<String, watch::Sender<Vec<IncomeRecord>>>,
    expense_channels: DashMap<String, watch::Sender<Vec<ExpenseRecord>>>,
}

impl StoreInner {
    fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            incomes: DashMap::new(),
            expenses: DashMap::new(),
            budgets: DashMap::new(),
            goals: DashMap::new(),
            summaries: DashMap::new(),
            income_channels: DashMap::new(),
            expense_channels: DashMap::new(),
        }
    }

    /// Current income collection of one account, in a stable order.
    pub fn income_snapshot(&self, account_id: &str) -> Vec<IncomeRecord> {
        let mut records: Vec<IncomeRecord> = self
            .incomes
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
        records
    }

    /// Current expense collection of one account, in a stable order.
    pub fn expense_snapshot(&self, account_id: &str) -> Vec<ExpenseRecord> {
        let mut records: Vec<ExpenseRecord> = self
            .expenses
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
        records
    }

    /// Pushes the latest income snapshot to subscribers, if any.
    pub fn publish_incomes(&self, account_id: &str) {
        if let Some(tx) = self.income_channels.get(account_id) {
            tx.send_replace(self.income_snapshot(account_id));
        }
    }

    /// Pushes the latest expense snapshot to subscribers, if any.
    pub fn publish_expenses(&self, account_id: &str) {
        if let Some(tx) = self.expense_channels.get(account_id) {
            tx.send_replace(self.expense_snapshot(account_id));
        }
    }

    /// Subscribes to the income collection of one account.
    pub fn income_watch(&self, account_id: &str) -> watch::Receiver<Vec<IncomeRecord>> {
        self.income_channels
            .entry(account_id.to_string())
            .or_insert_with(|| watch::channel(self.income_snapshot(account_id)).0)
            .subscribe()
    }

    /// Subscribes to the expense collection of one account.
    pub fn expense_watch(&self, account_id: &str) -> watch::Receiver<Vec<ExpenseRecord>> {
        self.expense_channels
            .entry(account_id.to_string())
            .or_insert_with(|| watch::channel(self.expense_snapshot(account_id)).0)
            .subscribe()
    }
}

/// In-memory watchable document store.
///
/// Cloning is cheap; all clones and all repositories handed out by the
/// accessors share the same underlying collections.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner::new()),
        }
    }

    pub fn accounts(&self) -> AccountStore {
        AccountStore::new(self.inner.clone())
    }

    pub fn transactions(&self) -> TransactionStore {
        TransactionStore::new(self.inner.clone())
    }

    pub fn budgets(&self) -> BudgetStore {
        BudgetStore::new(self.inner.clone())
    }

    pub fn goals(&self) -> GoalStore {
        GoalStore::new(self.inner.clone())
    }

    pub fn summaries(&self) -> SummaryStore {
        SummaryStore::new(self.inner.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
