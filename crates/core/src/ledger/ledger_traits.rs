use async_trait::async_trait;

use crate::accounts::Account;
use crate::errors::Result;
use crate::transactions::{ExpenseRecord, IncomeRecord};

/// Trait defining the contract for the aggregation engine.
///
/// The sync pipeline drives this after every debounce window; it can also be
/// invoked directly for a manual refresh.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Recomputes and persists the aggregate fields of one account from the
    /// given record snapshots, then fires the dependent side effects
    /// (monthly summary, goal auto-tracking for the active account).
    ///
    /// Fails with `NotFound` and writes nothing when the account is missing.
    /// Side-effect failures after a successful aggregate write are logged
    /// and swallowed; they never roll the write back.
    async fn recompute(
        &self,
        account_id: &str,
        incomes: Vec<IncomeRecord>,
        expenses: Vec<ExpenseRecord>,
    ) -> Result<Account>;
}
