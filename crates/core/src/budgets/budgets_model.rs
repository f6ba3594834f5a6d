//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Calendar window a budget is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

/// Domain model representing a budget, scoped to one account and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub account_id: String,
    pub category: String,
    pub budget_amount: Decimal,
    pub period: BudgetPeriod,
    /// Percent of the budget at which the status flips to `Alert`.
    pub alert_threshold: Decimal,
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub category: String,
    pub budget_amount: Decimal,
    pub period: BudgetPeriod,
    pub alert_threshold: Decimal,
}

impl NewBudget {
    /// Validates the new budget data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "category".to_string(),
            )));
        }
        if self.budget_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NegativeAmount(
                self.budget_amount,
            )));
        }
        if self.alert_threshold < Decimal::ZERO || self.alert_threshold > Decimal::ONE_HUNDRED {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Alert threshold must be between 0 and 100".to_string(),
            )));
        }
        Ok(())
    }
}

/// Status tier of a budget, evaluated in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    OnTrack,
    Alert,
    OverBudget,
}

/// Computed spend-vs-limit progress for one budget. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub budget_id: String,
    /// Windowed spend total for the budget's category.
    pub spent: Decimal,
    /// Percent of the budget consumed; zero when the budget amount is zero.
    pub progress: Decimal,
    pub status: BudgetStatus,
}
