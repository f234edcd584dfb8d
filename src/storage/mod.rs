mod account_storage;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::models::{Account, AccountError};
use crate::types::Monetary;

pub use account_storage::AccountStorage;

/// Registry of accounts. An id, once registered, resolves to the same
/// [`Account`] instance for the lifetime of the store.
pub trait Storage: Send + Sync + 'static {
    fn register(&self, account_id: &str, balance: Monetary) -> Result<Arc<Account>, AccountError>;
    fn get(&self, account_id: &str) -> Result<Arc<Account>, AccountError>;
    fn clear(&self);
}
