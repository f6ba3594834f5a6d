//! Shared constants for the ledger engine.

use rust_decimal::Decimal;
use std::time::Duration;

/// Debounce window for coalescing change notifications into one recompute.
///
/// Creating an account and then writing several transactions in quick
/// succession must produce a single aggregate write, not one per change.
pub const DEBOUNCE_DURATION: Duration = Duration::from_millis(200);

/// Scale factor for percentage figures (savings rate, budget progress).
pub const PERCENT_SCALE: Decimal = Decimal::ONE_HUNDRED;

/// Decimal places kept on displayed percentage figures.
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;

/// Months per year, used to spread yearly recurring expenses over months.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
