//! Summaries module - one snapshot document per (account, calendar month).
//!
//! Only the current month's document is ever written by the engine; past
//! months become immutable snapshots once their month has elapsed.

mod summaries_calculator;
mod summaries_model;
mod summaries_service;
mod summaries_traits;

// Re-export the public interface
pub use summaries_calculator::{calculate_current_month, initial_summary};
pub use summaries_model::{summary_id, MonthlySummary};
pub use summaries_service::SummaryService;
pub use summaries_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
