//! Tests for goal auto-tracking propagation.

#[cfg(test)]
mod tests {
    use crate::accounts::Account;
    use crate::errors::{Error, Result};
    use crate::goals::{GoalRepositoryTrait, GoalService, GoalServiceTrait, NewGoal, SavingsGoal};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock GoalRepository ---
    #[derive(Default)]
    struct MockGoalRepository {
        goals: Mutex<HashMap<String, SavingsGoal>>,
    }

    impl MockGoalRepository {
        fn with_goals(goals: Vec<SavingsGoal>) -> Self {
            let map = goals.into_iter().map(|g| (g.id.clone(), g)).collect();
            Self {
                goals: Mutex::new(map),
            }
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self) -> Result<Vec<SavingsGoal>> {
            let mut goals: Vec<SavingsGoal> =
                self.goals.lock().unwrap().values().cloned().collect();
            goals.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(goals)
        }

        async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<SavingsGoal> {
            let goal = SavingsGoal {
                id: new_goal.id.unwrap_or_else(|| "goal-new".to_string()),
                title: new_goal.title,
                target_amount: new_goal.target_amount,
                current_amount: new_goal.current_amount,
                auto_tracked_amount: Decimal::ZERO,
                target_date: new_goal.target_date,
            };
            self.goals
                .lock()
                .unwrap()
                .insert(goal.id.clone(), goal.clone());
            Ok(goal)
        }

        async fn update_goal(&self, goal_update: SavingsGoal) -> Result<SavingsGoal> {
            self.goals
                .lock()
                .unwrap()
                .insert(goal_update.id.clone(), goal_update.clone());
            Ok(goal_update)
        }

        async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
            Ok(self.goals.lock().unwrap().remove(goal_id).map_or(0, |_| 1))
        }

        async fn set_auto_tracked(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .get_mut(goal_id)
                .ok_or_else(|| Error::NotFound(format!("goal {}", goal_id)))?;
            goal.auto_tracked_amount = amount;
            Ok(goal.clone())
        }
    }

    fn goal(id: &str, target: Decimal, current: Decimal, tracked: Decimal) -> SavingsGoal {
        SavingsGoal {
            id: id.to_string(),
            title: format!("Goal {}", id),
            target_amount: target,
            current_amount: current,
            auto_tracked_amount: tracked,
            target_date: None,
        }
    }

    fn account_with_balance(id: &str, balance: Decimal) -> Account {
        Account {
            id: id.to_string(),
            name: format!("Account {}", id),
            current_balance: balance,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_propagate_sets_every_goal() {
        let repository = Arc::new(MockGoalRepository::with_goals(vec![
            goal("g1", dec!(10000), dec!(100), dec!(0)),
            goal("g2", dec!(5000), dec!(0), dec!(0)),
        ]));
        let service = GoalService::new(repository.clone());

        let updated = service
            .propagate(&account_with_balance("acc-a", dec!(300)))
            .await
            .unwrap();
        assert_eq!(updated, 2);
        for g in repository.load_goals().unwrap() {
            assert_eq!(g.auto_tracked_amount, dec!(300));
        }
    }

    #[tokio::test]
    async fn test_propagate_clamps_negative_balance_to_zero() {
        let repository = Arc::new(MockGoalRepository::with_goals(vec![goal(
            "g1",
            dec!(10000),
            dec!(100),
            dec!(250),
        )]));
        let service = GoalService::new(repository.clone());

        service
            .propagate(&account_with_balance("acc-a", dec!(-40)))
            .await
            .unwrap();
        let goals = repository.load_goals().unwrap();
        assert_eq!(goals[0].auto_tracked_amount, dec!(0));
    }

    #[tokio::test]
    async fn test_propagate_skips_unchanged_goals() {
        let repository = Arc::new(MockGoalRepository::with_goals(vec![
            goal("g1", dec!(10000), dec!(0), dec!(900)),
            goal("g2", dec!(5000), dec!(0), dec!(100)),
        ]));
        let service = GoalService::new(repository.clone());

        let updated = service
            .propagate(&account_with_balance("acc-b", dec!(900)))
            .await
            .unwrap();
        // g1 already carries 900; only g2 needs a write.
        assert_eq!(updated, 1);
    }

    #[tokio::test]
    async fn test_switching_active_account_retracks_all_goals() {
        // Switching from A (300) to B (900) moves every goal.
        let repository = Arc::new(MockGoalRepository::with_goals(vec![
            goal("g1", dec!(10000), dec!(0), dec!(0)),
            goal("g2", dec!(5000), dec!(0), dec!(0)),
        ]));
        let service = GoalService::new(repository.clone());

        service
            .propagate(&account_with_balance("acc-a", dec!(300)))
            .await
            .unwrap();
        service
            .propagate(&account_with_balance("acc-b", dec!(900)))
            .await
            .unwrap();

        for g in repository.load_goals().unwrap() {
            assert_eq!(g.auto_tracked_amount, dec!(900));
        }
    }

    #[test]
    fn test_effective_progress_takes_max_of_manual_and_tracked() {
        let g = goal("g1", dec!(1000), dec!(200), dec!(450));
        assert_eq!(g.effective_progress(), dec!(45));

        let g = goal("g2", dec!(1000), dec!(700), dec!(450));
        assert_eq!(g.effective_progress(), dec!(70));
    }

    #[test]
    fn test_effective_progress_zero_target() {
        let g = goal("g1", dec!(0), dec!(200), dec!(450));
        assert_eq!(g.effective_progress(), dec!(0));
    }
}
