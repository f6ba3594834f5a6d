//! Income and expense record domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Billing cadence for a recurring expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    #[default]
    Monthly,
    Yearly,
}

/// A single income fact belonging to one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub is_recurring: bool,
}

/// A single expense fact belonging to one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub is_recurring: bool,
    pub frequency: Frequency,
}

/// Input model for creating a new income record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub is_recurring: bool,
}

impl NewIncome {
    /// Validates the new income data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NegativeAmount(
                self.amount,
            )));
        }
        Ok(())
    }
}

/// Input model for creating a new expense record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub is_recurring: bool,
    pub frequency: Frequency,
}

impl NewExpense {
    /// Validates the new expense data.
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
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NegativeAmount(
                self.amount,
            )));
        }
        Ok(())
    }
}
