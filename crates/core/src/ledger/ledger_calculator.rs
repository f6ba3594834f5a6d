//! Aggregate recomputation.
//!
//! Pure and idempotent: identical inputs always yield identical outputs, and
//! no state is carried between calls. Ordering across calls does not matter;
//! only the latest call's result must ultimately persist.

use rust_decimal::Decimal;

use crate::accounts::{Account, AccountAggregate};
use crate::constants::{PERCENT_DECIMAL_PRECISION, PERCENT_SCALE};
use crate::transactions::{ExpenseRecord, IncomeRecord};

/// Recomputes the derived aggregate fields for one account.
///
/// `total_income` and `total_expense` are transaction-derived only; the
/// starting balance is tracked separately and never folded into income.
/// `monthly_savings` mirrors the current balance (the month-windowed figure
/// lives on `MonthlySummary` instead).
pub fn calculate_aggregate(
    account: &Account,
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
) -> AccountAggregate {
    let total_income: Decimal = incomes.iter().map(|income| income.amount).sum();
    let total_expense: Decimal = expenses.iter().map(|expense| expense.amount).sum();
    let current_balance = account.starting_balance + total_income - total_expense;
    let monthly_savings = current_balance;
    let savings_rate = if total_income > Decimal::ZERO {
        (monthly_savings / total_income * PERCENT_SCALE).round_dp(PERCENT_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    AccountAggregate {
        total_income,
        total_expense,
        current_balance,
        monthly_savings,
        savings_rate,
    }
}
