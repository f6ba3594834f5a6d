//! Budgets module - spend-vs-limit progress per category.
//!
//! Progress is a pure, on-demand computation over the expense snapshot; it is
//! never persisted and never gated by the recompute debounce.

mod budgets_calculator;
mod budgets_model;
mod budgets_service;
mod budgets_traits;

// Re-export the public interface
pub use budgets_calculator::calculate_progress;
pub use budgets_model::{Budget, BudgetPeriod, BudgetProgress, BudgetStatus, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
