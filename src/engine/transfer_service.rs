use std::sync::Arc;

use tracing::{info, warn};

use crate::engine::lock_order::LockedPair;
use crate::models::{Account, AccountError, TransferRequest};
use crate::notifications::{NotificationSink, TransferNotice};
use crate::storage::Storage;
use crate::types::Monetary;

/// Moves money between two accounts atomically.
///
/// A transfer holds both account locks across the debit and the credit, taking
/// them in the global id order so that concurrent transfers in opposite
/// directions cannot deadlock. Notifications are dispatched only after both
/// locks have been released.
pub struct TransferService<S: Storage> {
    storage: Arc<S>,
    notifier: Arc<dyn NotificationSink>
}

impl<S: Storage> TransferService<S> {
    pub fn new(storage: Arc<S>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            storage,
            notifier
        }
    }

    /// Executes a single transfer request.
    ///
    /// # Errors
    /// Returns `AccountError` if:
    /// - The amount is negative (no account is looked up or locked).
    /// - Either account does not exist.
    /// - The sender's balance is not strictly greater than the amount.
    /// - Either new balance would overflow or need rounding.
    ///
    /// On any error neither balance has changed.
    pub fn transfer(&self, request: &TransferRequest) -> Result<(), AccountError> {
        let amount = Monetary::new(request.amount)
            .map_err(|_| AccountError::invalid_amount(request.amount))?;

        let sender = self.storage.get(&request.sender_account_id)?;
        let receiver = self.storage.get(&request.receiver_account_id)?;

        let result = Self::move_balance(&sender, &receiver, amount);

        match &result {
            Ok(()) => {
                info!("Transferred {amount} from account [{}] to account [{}]", sender.account_id, receiver.account_id);
                TransferNotice::Completed.dispatch(self.notifier.as_ref(), &sender, &receiver, amount);
            }
            Err(error @ AccountError::InsufficientBalance { .. }) => {
                info!("{error}");
                TransferNotice::InsufficientBalance.dispatch(self.notifier.as_ref(), &sender, &receiver, amount);
            }
            Err(error) => warn!("{error}")
        }

        result
    }

    /// Reads two balances as one consistent pair, under both locks.
    pub fn balances(&self, left_id: &str, right_id: &str) -> Result<(Monetary, Monetary), AccountError> {
        let left = self.storage.get(left_id)?;
        let right = self.storage.get(right_id)?;

        if left.account_id == right.account_id {
            let balance = left.balance();
            return Ok((balance, balance))
        }

        let mut pair = LockedPair::acquire(&left, &right);

        Ok((pair.left().balance(), pair.right().balance()))
    }

    fn move_balance(sender: &Account, receiver: &Account, amount: Monetary) -> Result<(), AccountError> {
        let insufficient = || AccountError::insufficient_balance(&sender.account_id, &receiver.account_id, amount);

        if sender.account_id == receiver.account_id {
            let mut guard = sender.lock();

            if !guard.covers(amount) {
                return Err(insufficient())
            }

            if guard.checked_withdraw(amount).and_then(|debited| debited.checked_add(amount)).is_none() {
                return Err(AccountError::overflow(&sender.account_id))
            }

            guard.withdraw(amount);

            return guard.deposit(amount)
        }

        let mut pair = LockedPair::acquire(sender, receiver);

        if !pair.left().covers(amount) {
            return Err(insufficient())
        }

        if pair.left().checked_withdraw(amount).is_none() {
            return Err(AccountError::overflow(&sender.account_id))
        }

        if pair.right().checked_deposit(amount).is_none() {
            return Err(AccountError::overflow(&receiver.account_id))
        }

        if !pair.left().withdraw(amount) {
            return Err(insufficient())
        }

        pair.right().deposit(amount)
    }
}
