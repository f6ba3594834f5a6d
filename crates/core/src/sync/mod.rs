//! Sync module - per-account reactive recompute pipeline.
//!
//! Subscribes to an account's income and expense collections, coalesces
//! bursts of change notifications through a debounce window, and drives the
//! aggregation engine with the latest snapshot pair.

mod pipeline;

// Re-export the public interface
pub use pipeline::{spawn_account_sync, SyncHandle};

#[cfg(test)]
mod pipeline_tests;
