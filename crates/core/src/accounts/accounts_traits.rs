//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountAggregate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn list(&self) -> Result<Vec<Account>>;

    /// Creates a new account.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Upserts the engine-owned aggregate fields of an account as one
    /// atomic per-document write. Returns the updated account.
    async fn apply_aggregate(
        &self,
        account_id: &str,
        aggregate: &AccountAggregate,
    ) -> Result<Account>;

    /// Deletes an account by its ID.
    ///
    /// Returns the number of deleted records. Cascade deletion of child
    /// records is coordinated by the service layer.
    async fn delete(&self, account_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation and writes the
    /// creation-month summary snapshot.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn get_all_accounts(&self) -> Result<Vec<Account>>;

    /// Deletes an account and cascade-deletes its child records
    /// (transactions, budgets, summaries). Goals are global and survive.
    async fn delete_account(&self, account_id: &str) -> Result<()>;
}
