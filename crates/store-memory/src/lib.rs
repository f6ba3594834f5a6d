//! In-memory storage implementation for Pocketfolio.
//!
//! This crate provides a watchable document store backed by concurrent maps.
//! It implements the repository traits defined in `pocketfolio-core` and
//! contains:
//! - Per-collection document maps with atomic per-document writes
//! - Watch subscriptions that push the full current collection state on
//!   every change (never deltas)
//! - Repository implementations for all domain entities
//!
//! # Architecture
//!
//! The core crate is store-agnostic and works with traits only.
//!
//! ```text
//! core (domain, sync engine)
//!          │
//!          ▼
//!   store-memory (this crate)
//!          │
//!          ▼
//!   concurrent in-memory maps
//! ```

mod store;

// Repository implementations
pub mod accounts;
pub mod budgets;
pub mod goals;
pub mod summaries;
pub mod transactions;

pub use accounts::AccountStore;
pub use budgets::BudgetStore;
pub use goals::GoalStore;
pub use store::MemoryStore;
pub use summaries::SummaryStore;
pub use transactions::TransactionStore;

// Re-export from pocketfolio-core for convenience
pub use pocketfolio_core::errors::{Error, Result, StoreError};
