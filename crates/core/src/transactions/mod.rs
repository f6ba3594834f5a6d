//! Transactions module - income and expense records.
//!
//! Records are append/mutate/delete-only facts owned by exactly one account;
//! the engine never mutates them, it only derives aggregates from them.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

// Re-export the public interface
pub use transactions_model::{
    ExpenseRecord, Frequency, IncomeRecord, NewExpense, NewIncome,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{CollectionWatch, TransactionRepositoryTrait};
