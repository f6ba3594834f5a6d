//! Ledger module - the aggregation engine.
//!
//! Turns the latest (incomes, expenses) snapshot pair into the account's
//! derived aggregate fields and propagates them to the dependent entities
//! (monthly summary, savings goals).

mod ledger_calculator;
mod ledger_service;
mod ledger_traits;

// Re-export the public interface
pub use ledger_calculator::calculate_aggregate;
pub use ledger_service::LedgerService;
pub use ledger_traits::LedgerServiceTrait;
