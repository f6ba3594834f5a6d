use async_trait::async_trait;
use rust_decimal::Decimal;

use super::goals_model::{NewGoal, SavingsGoal};
use crate::accounts::Account;
use crate::errors::Result;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<SavingsGoal>;
    async fn update_goal(&self, goal_update: SavingsGoal) -> Result<SavingsGoal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
    /// Writes only the auto-tracked amount of one goal.
    async fn set_auto_tracked(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<SavingsGoal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<SavingsGoal>;
    async fn update_goal(&self, updated_goal_data: SavingsGoal) -> Result<SavingsGoal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;

    /// Pushes the active account's balance into every goal's auto-tracked
    /// amount (`max(0, current_balance)`). Returns the number of goals whose
    /// stored amount actually changed. Per-goal write failures are logged
    /// and skipped; the loop continues (best-effort propagation).
    async fn propagate(&self, active_account: &Account) -> Result<usize>;
}
