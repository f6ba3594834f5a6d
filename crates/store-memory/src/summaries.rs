//! Monthly summary repository implementation.

use async_trait::async_trait;
use std::sync::Arc;

use pocketfolio_core::errors::{Error, Result};
use pocketfolio_core::summaries::{summary_id, MonthlySummary, SummaryRepositoryTrait};

use crate::store::StoreInner;

#[derive(Clone)]
pub struct SummaryStore {
    inner: Arc<StoreInner>,
}

impl SummaryStore {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SummaryRepositoryTrait for SummaryStore {
    async fn upsert(&self, summary: MonthlySummary) -> Result<MonthlySummary> {
        self.inner
            .summaries
            .insert(summary.id.clone(), summary.clone());
        Ok(summary)
    }

    fn get(&self, account_id: &str, year: i32, month: u32) -> Result<MonthlySummary> {
        let key = summary_id(account_id, year, month);
        self.inner
            .summaries
            .get(&key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("summary {}", key)))
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<MonthlySummary>> {
        let mut summaries: Vec<MonthlySummary> = self
            .inner
            .summaries
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect();
        summaries.sort_by_key(|s| (s.year, s.month));
        Ok(summaries)
    }

    async fn delete_for_account(&self, account_id: &str) -> Result<usize> {
        let ids: Vec<String> = self
            .inner
            .summaries
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.key().clone())
            .collect();
        let removed = ids.len();
        for id in ids {
            self.inner.summaries.remove(&id);
        }
        Ok(removed)
    }
}
