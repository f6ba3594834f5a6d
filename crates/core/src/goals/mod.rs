//! Goals module - savings goals and auto-tracking propagation.
//!
//! Goals are global, not scoped to a single account. Auto-tracking mirrors
//! the currently active account's balance into every goal.

mod goals_model;
mod goals_service;
mod goals_traits;

// Re-export the public interface
pub use goals_model::{NewGoal, SavingsGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

#[cfg(test)]
mod goals_service_tests;
