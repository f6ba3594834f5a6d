//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing an account in the system.
///
/// The aggregate fields (`total_income` through `savings_rate`) are derived
/// and owned by the ledger engine; they are never edited directly by user
/// actions. Invariant after any recompute:
/// `current_balance == starting_balance + total_income - total_expense`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Opening balance, tracked separately and never folded into income.
    pub starting_balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub current_balance: Decimal,
    /// Whole-balance savings figure (equals `current_balance`). The genuinely
    /// month-windowed savings number lives on `MonthlySummary`.
    pub monthly_savings: Decimal,
    /// Percent of total income retained; zero when there is no income.
    pub savings_rate: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub starting_balance: Decimal,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.starting_balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NegativeAmount(
                self.starting_balance,
            )));
        }
        Ok(())
    }
}

/// Aggregate fields produced by the ledger engine for one account.
///
/// Applied to the account document as a single atomic upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountAggregate {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub current_balance: Decimal,
    pub monthly_savings: Decimal,
    pub savings_rate: Decimal,
}

impl Account {
    /// Applies recomputed aggregate fields, refreshing `updated_at`.
    pub fn apply_aggregate(&mut self, aggregate: &AccountAggregate, now: NaiveDateTime) {
        self.total_income = aggregate.total_income;
        self.total_expense = aggregate.total_expense;
        self.current_balance = aggregate.current_balance;
        self.monthly_savings = aggregate.monthly_savings;
        self.savings_rate = aggregate.savings_rate;
        self.updated_at = now;
    }
}
