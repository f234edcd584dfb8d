use crate::models::errors::AccountError;
use crate::types::{AccountId, Monetary};
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

/// A single named balance cell.
///
/// Every read and write of the balance goes through the account's own lock, so
/// unrelated accounts never contend with each other. The lock is also handed out
/// through [`Account::lock`] so that a transfer can hold it across both legs of
/// a debit and credit.
#[derive(Debug)]
pub struct Account {
    /// The unique identifier of the account, fixed at registration.
    pub account_id: AccountId,
    balance: Mutex<Monetary>
}

impl Account {
    pub fn new(account_id: impl Into<AccountId>, balance: Monetary) -> Self {
        Self {
            account_id: account_id.into(),
            balance: Mutex::new(balance)
        }
    }

    pub fn balance(&self) -> Monetary {
        *self.balance.lock()
    }

    /// Overwrites the balance. Only meant for initialization and inspection,
    /// transfers never go through here.
    pub fn set_balance(&self, balance: Monetary) {
        *self.balance.lock() = balance;
    }

    /// Credits `amount`. Fails without mutating only if the result would exceed
    /// the decimal range.
    pub fn deposit(&self, amount: Monetary) -> Result<(), AccountError> {
        self.lock().deposit(amount)
    }

    /// Debits `amount` if the balance is strictly greater than it.
    ///
    /// A withdrawal of the entire balance is rejected.
    pub fn withdraw(&self, amount: Monetary) -> bool {
        self.lock().withdraw(amount)
    }

    /// Acquires the account's exclusive lock for a compound operation.
    pub fn lock(&self) -> BalanceGuard<'_> {
        BalanceGuard {
            account_id: &self.account_id,
            balance: self.balance.lock()
        }
    }
}

/// Exclusive access to one account's balance. The lock is released on drop.
pub struct BalanceGuard<'a> {
    account_id: &'a str,
    balance: MutexGuard<'a, Monetary>
}

impl BalanceGuard<'_> {
    pub fn account_id(&self) -> &str {
        self.account_id
    }

    pub fn balance(&self) -> Monetary {
        *self.balance
    }

    /// Whether the balance is strictly greater than `amount`.
    pub fn covers(&self, amount: Monetary) -> bool {
        *self.balance > amount
    }

    /// The balance a withdrawal of `amount` would leave, if it is allowed and
    /// exactly representable.
    pub fn checked_withdraw(&self, amount: Monetary) -> Option<Monetary> {
        if self.covers(amount) {
            self.balance.checked_sub(amount)
        } else {
            None
        }
    }

    /// The balance a deposit of `amount` would leave, if it is exactly representable.
    pub fn checked_deposit(&self, amount: Monetary) -> Option<Monetary> {
        self.balance.checked_add(amount)
    }

    pub fn withdraw(&mut self, amount: Monetary) -> bool {
        let Some(balance) = self.checked_withdraw(amount) else {
            return false
        };

        *self.balance = balance;
        debug!("Withdrawn {amount} from account [{}]. New balance: {balance}", self.account_id);

        true
    }

    pub fn deposit(&mut self, amount: Monetary) -> Result<(), AccountError> {
        let balance = self.checked_deposit(amount)
            .ok_or_else(|| AccountError::overflow(self.account_id))?;

        *self.balance = balance;
        debug!("Deposited {amount} to account [{}]. New balance: {balance}", self.account_id);

        Ok(())
    }
}
