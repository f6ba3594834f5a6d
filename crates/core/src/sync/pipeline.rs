//! Per-account sync pipeline task.
//!
//! One task per subscribed account: it owns the two watch subscriptions and
//! a debounce timer. Any change notification (re)arms the timer; when the
//! timer fires with no intervening signal, the aggregation engine runs
//! exactly once with the latest (incomes, expenses) pair. There is no
//! backlog: intermediate snapshots are superseded, never merged
//! (last-write-wins, recomputation is idempotent and stateless).
//!
//! Pipelines for different accounts are independent tasks; one never blocks
//! another.

use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::time::sleep;

use crate::constants::DEBOUNCE_DURATION;
use crate::errors::Result;
use crate::ledger::LedgerServiceTrait;
use crate::transactions::{
    CollectionWatch, ExpenseRecord, IncomeRecord, TransactionRepositoryTrait,
};

/// Handle owning one account's sync pipeline.
///
/// Dropping the handle (or calling [`SyncHandle::cancel`]) tears down both
/// watch subscriptions and discards any pending debounce timer, so no stray
/// write can land after the account is deselected.
pub struct SyncHandle {
    account_id: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl SyncHandle {
    /// The account this pipeline is subscribed to.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Cancels the pipeline explicitly.
    pub fn cancel(mut self) {
        self.shutdown_now();
    }

    fn shutdown_now(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            // The task may already have ended (e.g. store dropped); fine.
            let _ = tx.send(());
        }
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.shutdown_now();
    }
}

/// Spawns the sync pipeline for one account.
///
/// Opens both watch subscriptions up front so a subscription failure
/// surfaces to the caller instead of dying inside the task.
pub fn spawn_account_sync(
    account_id: impl Into<String>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ledger_service: Arc<dyn LedgerServiceTrait>,
) -> Result<SyncHandle> {
    let account_id = account_id.into();
    let income_rx = transaction_repository.watch_incomes(&account_id)?;
    let expense_rx = transaction_repository.watch_expenses(&account_id)?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let task_account_id = account_id.clone();
    tokio::spawn(async move {
        run_pipeline(
            task_account_id,
            income_rx,
            expense_rx,
            ledger_service,
            shutdown_rx,
        )
        .await;
    });

    Ok(SyncHandle {
        account_id,
        shutdown: Some(shutdown_tx),
    })
}

async fn run_pipeline(
    account_id: String,
    mut income_rx: CollectionWatch<IncomeRecord>,
    mut expense_rx: CollectionWatch<ExpenseRecord>,
    ledger_service: Arc<dyn LedgerServiceTrait>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    debug!("Sync pipeline started for account {}", account_id);

    // Whether a change notification is waiting on the debounce timer.
    let mut dirty = false;

    loop {
        if dirty {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                changed = income_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    // Timer re-arms on the next loop iteration.
                }
                changed = expense_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = sleep(DEBOUNCE_DURATION) => {
                    dirty = false;
                    let incomes = income_rx.borrow_and_update().clone();
                    let expenses = expense_rx.borrow_and_update().clone();
                    if let Err(err) = ledger_service
                        .recompute(&account_id, incomes, expenses)
                        .await
                    {
                        // No retry here: the next change event naturally
                        // re-runs the whole computation.
                        warn!(
                            "Ledger recompute failed for account {}: {}",
                            account_id, err
                        );
                    }
                }
            }
        } else {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                changed = income_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    dirty = true;
                }
                changed = expense_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    dirty = true;
                }
            }
        }
    }

    debug!("Sync pipeline stopped for account {}", account_id);
}
