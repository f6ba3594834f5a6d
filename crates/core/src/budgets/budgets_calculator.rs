//! Budget progress calculation.
//!
//! Pure function over the budget and the account's expense snapshot. The
//! window is the calendar month or calendar year containing `now`, depending
//! on the budget's period. Recurring expenses are treated as always-active:
//! a monthly recurring expense counts at face value regardless of its date,
//! a yearly recurring expense is spread to `amount / 12` under a monthly
//! window and counts at face value under a yearly window. Non-recurring
//! expenses count only when dated inside the window.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetPeriod, BudgetProgress, BudgetStatus};
use crate::constants::{MONTHS_PER_YEAR, PERCENT_DECIMAL_PRECISION, PERCENT_SCALE};
use crate::transactions::{ExpenseRecord, Frequency};

/// Calculates the spend-vs-limit progress of one budget as of `now`.
pub fn calculate_progress(
    budget: &Budget,
    expenses: &[ExpenseRecord],
    now: NaiveDate,
) -> BudgetProgress {
    let spent: Decimal = expenses
        .iter()
        .filter(|expense| expense.category == budget.category)
        .map(|expense| windowed_amount(expense, budget.period, now))
        .sum();

    let progress = if budget.budget_amount > Decimal::ZERO {
        (spent / budget.budget_amount * PERCENT_SCALE).round_dp(PERCENT_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    let status = if progress >= PERCENT_SCALE {
        BudgetStatus::OverBudget
    } else if progress >= budget.alert_threshold {
        BudgetStatus::Alert
    } else {
        BudgetStatus::OnTrack
    };

    BudgetProgress {
        budget_id: budget.id.clone(),
        spent,
        progress,
        status,
    }
}

/// Contribution of a single expense to the budget window.
fn windowed_amount(expense: &ExpenseRecord, period: BudgetPeriod, now: NaiveDate) -> Decimal {
    if expense.is_recurring {
        return match (expense.frequency, period) {
            // Always-active, counted at face value per month.
            (Frequency::Monthly, _) => expense.amount,
            // Spread over twelve months under a monthly window.
            (Frequency::Yearly, BudgetPeriod::Monthly) => expense.amount / MONTHS_PER_YEAR,
            (Frequency::Yearly, BudgetPeriod::Yearly) => expense.amount,
        };
    }

    let in_window = match period {
        BudgetPeriod::Monthly => {
            expense.date.year() == now.year() && expense.date.month() == now.month()
        }
        BudgetPeriod::Yearly => expense.date.year() == now.year(),
    };

    if in_window {
        expense.amount
    } else {
        Decimal::ZERO
    }
}
