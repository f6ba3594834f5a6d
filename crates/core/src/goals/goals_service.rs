use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_model::{NewGoal, SavingsGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::accounts::Account;
use crate::errors::Result;

/// Service for managing savings goals, including auto-tracking propagation.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance.
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<SavingsGoal>> {
        self.repository.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<SavingsGoal> {
        new_goal.validate()?;
        self.repository.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, updated_goal_data: SavingsGoal) -> Result<SavingsGoal> {
        self.repository.update_goal(updated_goal_data).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.repository.delete_goal(goal_id).await
    }

    async fn propagate(&self, active_account: &Account) -> Result<usize> {
        let tracked = active_account.current_balance.max(Decimal::ZERO);
        debug!(
            "Propagating balance {} of account {} to savings goals",
            tracked, active_account.id
        );

        let mut updated = 0;
        for goal in self.repository.load_goals()? {
            if goal.auto_tracked_amount == tracked {
                continue;
            }
            match self.repository.set_auto_tracked(&goal.id, tracked).await {
                Ok(_) => updated += 1,
                Err(err) => {
                    warn!("Failed to auto-track goal {}: {}", goal.id, err);
                }
            }
        }
        Ok(updated)
    }
}
