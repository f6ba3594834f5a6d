//! Goal repository implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use pocketfolio_core::errors::{Error, Result};
use pocketfolio_core::goals::{GoalRepositoryTrait, NewGoal, SavingsGoal};

use crate::store::StoreInner;

#[derive(Clone)]
pub struct GoalStore {
    inner: Arc<StoreInner>,
}

impl GoalStore {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalStore {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>> {
        let mut goals: Vec<SavingsGoal> = self
            .inner
            .goals
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        goals.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(goals)
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<SavingsGoal> {
        let goal = SavingsGoal {
            id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: new_goal.title,
            target_amount: new_goal.target_amount,
            current_amount: new_goal.current_amount,
            auto_tracked_amount: Decimal::ZERO,
            target_date: new_goal.target_date,
        };
        self.inner.goals.insert(goal.id.clone(), goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: SavingsGoal) -> Result<SavingsGoal> {
        if !self.inner.goals.contains_key(&goal_update.id) {
            return Err(Error::NotFound(format!("goal {}", goal_update.id)));
        }
        self.inner
            .goals
            .insert(goal_update.id.clone(), goal_update.clone());
        Ok(goal_update)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        Ok(self.inner.goals.remove(goal_id).map_or(0, |_| 1))
    }

    async fn set_auto_tracked(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal> {
        let mut entry = self
            .inner
            .goals
            .get_mut(goal_id)
            .ok_or_else(|| Error::NotFound(format!("goal {}", goal_id)))?;
        entry.value_mut().auto_tracked_amount = amount;
        Ok(entry.value().clone())
    }
}
