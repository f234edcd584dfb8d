use crate::models::{Account, AccountError};
use crate::storage::Storage;
use crate::types::{AccountId, Monetary};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

pub struct AccountStorage {
    cache: DashMap<AccountId, Arc<Account>>
}

impl AccountStorage {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new()
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Current balances sorted by account id. Each balance is read under its
    /// own lock, so the set as a whole is only consistent once transfers settle.
    pub fn snapshot(&self) -> Vec<(AccountId, Monetary)> {
        let mut balances: Vec<_> = self.cache.iter()
            .map(|item| (item.key().clone(), item.value().balance()))
            .collect();

        balances.sort_by(|(left, _), (right, _)| left.cmp(right));
        balances
    }

    pub fn total_balance(&self) -> Option<Monetary> {
        self.cache.iter()
            .try_fold(Monetary::ZERO, |total, item| total.checked_add(item.value().balance()))
    }
}

impl Default for AccountStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for AccountStorage {
    fn register(&self, account_id: &str, balance: Monetary) -> Result<Arc<Account>, AccountError> {
        match self.cache.entry(account_id.to_string()) {
            Entry::Occupied(_) => Err(AccountError::conflict(account_id)),
            Entry::Vacant(entry) => {
                let account = Arc::new(Account::new(account_id, balance));
                entry.insert(account.clone());
                debug!("Registered account [{account_id}] with balance {balance}");
                Ok(account)
            }
        }
    }

    fn get(&self, account_id: &str) -> Result<Arc<Account>, AccountError> {
        self.cache.get(account_id)
            .map(|item| item.value().clone())
            .ok_or_else(|| AccountError::not_found(account_id))
    }

    fn clear(&self) {
        self.cache.clear();
    }
}
