//! Tests for the debounced sync pipeline.
//!
//! These use tokio's paused clock so debounce timing is deterministic.

#[cfg(test)]
mod tests {
    use crate::accounts::Account;
    use crate::errors::Result;
    use crate::ledger::LedgerServiceTrait;
    use crate::sync::spawn_account_sync;
    use crate::transactions::{
        CollectionWatch, ExpenseRecord, IncomeRecord, NewExpense, NewIncome,
        TransactionRepositoryTrait,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::watch;
    use tokio::time::sleep;

    // --- Mock TransactionRepository backed by watch channels ---
    struct MockTransactionRepository {
        income_tx: watch::Sender<Vec<IncomeRecord>>,
        expense_tx: watch::Sender<Vec<ExpenseRecord>>,
    }

    impl MockTransactionRepository {
        fn new() -> Self {
            Self {
                income_tx: watch::channel(Vec::new()).0,
                expense_tx: watch::channel(Vec::new()).0,
            }
        }

        fn push_income(&self, amount: rust_decimal::Decimal) {
            let mut incomes = self.income_tx.borrow().clone();
            incomes.push(IncomeRecord {
                id: format!("inc-{}", incomes.len()),
                account_id: "acc-1".to_string(),
                amount,
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                is_recurring: false,
            });
            self.income_tx.send_replace(incomes);
        }

        fn push_expense(&self, amount: rust_decimal::Decimal) {
            let mut expenses = self.expense_tx.borrow().clone();
            expenses.push(ExpenseRecord {
                id: format!("exp-{}", expenses.len()),
                account_id: "acc-1".to_string(),
                amount,
                date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
                category: "misc".to_string(),
                is_recurring: false,
                frequency: Default::default(),
            });
            self.expense_tx.send_replace(expenses);
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn get_incomes(&self, _account_id: &str) -> Result<Vec<IncomeRecord>> {
            Ok(self.income_tx.borrow().clone())
        }

        fn get_expenses(&self, _account_id: &str) -> Result<Vec<ExpenseRecord>> {
            Ok(self.expense_tx.borrow().clone())
        }

        async fn create_income(&self, _new_income: NewIncome) -> Result<IncomeRecord> {
            unimplemented!("not needed in these tests")
        }

        async fn update_income(&self, _income: IncomeRecord) -> Result<IncomeRecord> {
            unimplemented!("not needed in these tests")
        }

        async fn delete_income(&self, _income_id: &str) -> Result<usize> {
            unimplemented!("not needed in these tests")
        }

        async fn create_expense(&self, _new_expense: NewExpense) -> Result<ExpenseRecord> {
            unimplemented!("not needed in these tests")
        }

        async fn update_expense(&self, _expense: ExpenseRecord) -> Result<ExpenseRecord> {
            unimplemented!("not needed in these tests")
        }

        async fn delete_expense(&self, _expense_id: &str) -> Result<usize> {
            unimplemented!("not needed in these tests")
        }

        async fn delete_for_account(&self, _account_id: &str) -> Result<usize> {
            unimplemented!("not needed in these tests")
        }

        fn watch_incomes(&self, _account_id: &str) -> Result<CollectionWatch<IncomeRecord>> {
            Ok(self.income_tx.subscribe())
        }

        fn watch_expenses(&self, _account_id: &str) -> Result<CollectionWatch<ExpenseRecord>> {
            Ok(self.expense_tx.subscribe())
        }
    }

    // --- Counting LedgerService ---
    #[derive(Default)]
    struct CountingLedgerService {
        calls: AtomicUsize,
        last_input: Mutex<Option<(Vec<IncomeRecord>, Vec<ExpenseRecord>)>>,
    }

    impl CountingLedgerService {
        fn count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LedgerServiceTrait for CountingLedgerService {
        async fn recompute(
            &self,
            account_id: &str,
            incomes: Vec<IncomeRecord>,
            expenses: Vec<ExpenseRecord>,
        ) -> Result<Account> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_input.lock().unwrap() = Some((incomes, expenses));
            Ok(Account {
                id: account_id.to_string(),
                ..Default::default()
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_into_one_recompute() {
        let repository = Arc::new(MockTransactionRepository::new());
        let ledger = Arc::new(CountingLedgerService::default());
        let _handle =
            spawn_account_sync("acc-1", repository.clone(), ledger.clone()).unwrap();

        // Five rapid signals, each inside the previous debounce window.
        for _ in 0..5 {
            repository.push_income(dec!(100));
            sleep(Duration::from_millis(50)).await;
        }
        sleep(Duration::from_millis(300)).await;

        assert_eq!(ledger.count(), 1);
        let (incomes, _) = ledger.last_input.lock().unwrap().clone().unwrap();
        // The single invocation sees the latest full snapshot.
        assert_eq!(incomes.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_recompute_before_window_elapses() {
        let repository = Arc::new(MockTransactionRepository::new());
        let ledger = Arc::new(CountingLedgerService::default());
        let _handle =
            spawn_account_sync("acc-1", repository.clone(), ledger.clone()).unwrap();

        repository.push_expense(dec!(10));
        sleep(Duration::from_millis(100)).await;
        assert_eq!(ledger.count(), 0);

        sleep(Duration::from_millis(150)).await;
        assert_eq!(ledger.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_signal_resets_timer() {
        let repository = Arc::new(MockTransactionRepository::new());
        let ledger = Arc::new(CountingLedgerService::default());
        let _handle =
            spawn_account_sync("acc-1", repository.clone(), ledger.clone()).unwrap();

        repository.push_income(dec!(1));
        sleep(Duration::from_millis(150)).await;
        repository.push_income(dec!(2));
        sleep(Duration::from_millis(100)).await;
        // t = 250ms: the first timer would have fired at 200ms, but the
        // second signal reset it to 350ms.
        assert_eq!(ledger.count(), 0);

        sleep(Duration::from_millis(150)).await;
        assert_eq!(ledger.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_income_and_expense_signals_share_one_window() {
        let repository = Arc::new(MockTransactionRepository::new());
        let ledger = Arc::new(CountingLedgerService::default());
        let _handle =
            spawn_account_sync("acc-1", repository.clone(), ledger.clone()).unwrap();

        repository.push_income(dec!(500));
        sleep(Duration::from_millis(50)).await;
        repository.push_expense(dec!(200));
        sleep(Duration::from_millis(300)).await;

        assert_eq!(ledger.count(), 1);
        let (incomes, expenses) = ledger.last_input.lock().unwrap().clone().unwrap();
        assert_eq!(incomes.len(), 1);
        assert_eq!(expenses.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_recompute() {
        let repository = Arc::new(MockTransactionRepository::new());
        let ledger = Arc::new(CountingLedgerService::default());
        let handle = spawn_account_sync("acc-1", repository.clone(), ledger.clone()).unwrap();

        repository.push_income(dec!(100));
        handle.cancel();
        sleep(Duration::from_millis(500)).await;

        // The pending debounce timer died with the subscription.
        assert_eq!(ledger.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipelines_are_independent_per_account() {
        let repo_a = Arc::new(MockTransactionRepository::new());
        let repo_b = Arc::new(MockTransactionRepository::new());
        let ledger_a = Arc::new(CountingLedgerService::default());
        let ledger_b = Arc::new(CountingLedgerService::default());
        let _handle_a = spawn_account_sync("acc-a", repo_a.clone(), ledger_a.clone()).unwrap();
        let _handle_b = spawn_account_sync("acc-b", repo_b.clone(), ledger_b.clone()).unwrap();

        repo_a.push_income(dec!(100));
        sleep(Duration::from_millis(300)).await;

        assert_eq!(ledger_a.count(), 1);
        assert_eq!(ledger_b.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_reports_account_id() {
        let repository = Arc::new(MockTransactionRepository::new());
        let ledger = Arc::new(CountingLedgerService::default());
        let handle = spawn_account_sync("acc-1", repository, ledger).unwrap();
        assert_eq!(handle.account_id(), "acc-1");
    }
}
