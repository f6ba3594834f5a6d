//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{PERCENT_DECIMAL_PRECISION, PERCENT_SCALE};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a savings goal.
///
/// `current_amount` is maintained manually by the user; `auto_tracked_amount`
/// is mirrored from the active account's balance by the propagator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub auto_tracked_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl SavingsGoal {
    /// Effective progress percent for display: the larger of the manual and
    /// auto-tracked amounts against the target. Computed, never persisted.
    pub fn effective_progress(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let tracked = self.current_amount.max(self.auto_tracked_amount);
        (tracked / self.target_amount * PERCENT_SCALE).round_dp(PERCENT_DECIMAL_PRECISION)
    }
}

/// Input model for creating a new savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal target amount must be positive".to_string(),
            )));
        }
        if self.current_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NegativeAmount(
                self.current_amount,
            )));
        }
        Ok(())
    }
}
