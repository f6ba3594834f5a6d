//! Pocketfolio Core - Domain entities, services, and the ledger sync engine.
//!
//! This crate contains the core business logic for Pocketfolio: account
//! aggregates, income/expense records, budgets, savings goals, monthly
//! summaries, and the reactive pipeline that keeps the derived aggregates
//! current. It is storage-agnostic and defines repository traits that are
//! implemented by the `store-memory` crate (or any other document store).

pub mod accounts;
pub mod budgets;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod ledger;
pub mod summaries;
pub mod sync;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
