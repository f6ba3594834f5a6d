//! Monthly summary calculation.
//!
//! Pure functions over the account and its record snapshots. The creation
//! month's snapshot absorbs the opening balance into `monthly_income`; every
//! other month reflects transactions alone.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::summaries_model::{summary_id, MonthlySummary};
use crate::accounts::Account;
use crate::constants::{PERCENT_DECIMAL_PRECISION, PERCENT_SCALE};
use crate::transactions::{ExpenseRecord, IncomeRecord};

/// Computes the summary document for the calendar month containing `now`.
pub fn calculate_current_month(
    account: &Account,
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    now: NaiveDate,
) -> MonthlySummary {
    let year = now.year();
    let month = now.month();

    let mut monthly_income: Decimal = incomes
        .iter()
        .filter(|income| in_month(income.date, year, month))
        .map(|income| income.amount)
        .sum();

    let created = account.created_at.date();
    if created.year() == year && created.month() == month {
        monthly_income += account.starting_balance;
    }

    let monthly_expense: Decimal = expenses
        .iter()
        .filter(|expense| in_month(expense.date, year, month))
        .map(|expense| expense.amount)
        .sum();

    let monthly_savings = monthly_income - monthly_expense;
    let savings_rate = if monthly_income > Decimal::ZERO {
        (monthly_savings / monthly_income * PERCENT_SCALE).round_dp(PERCENT_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    MonthlySummary {
        id: summary_id(&account.id, year, month),
        account_id: account.id.clone(),
        month,
        year,
        monthly_income,
        monthly_expense,
        monthly_savings,
        savings_rate,
    }
}

/// Computes the creation-month summary for a freshly created account: no
/// transactions yet, so the opening balance is the whole month's income.
pub fn initial_summary(account: &Account) -> MonthlySummary {
    calculate_current_month(account, &[], &[], account.created_at.date())
}

fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
