use tracing::info;

use crate::models::Account;
use crate::types::Monetary;

/// Receives human readable transfer outcomes for an account holder.
///
/// Implementations are fire-and-forget from the engine's point of view, and are
/// never called while an account lock is held.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, account: &Account, message: &str);
}

/// Emits every notification as a structured log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, account: &Account, message: &str) {
        info!(account = %account.account_id, notice = message, "Notification sent");
    }
}

/// The outcome of a transfer as it is reported to both parties.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransferNotice {
    Completed,
    InsufficientBalance
}

impl TransferNotice {
    pub fn receiver_message(self, sender: &Account, amount: Monetary) -> String {
        match self {
            TransferNotice::Completed => {
                format!("Transfer of {amount} amount completed from {}", sender.account_id)
            }
            TransferNotice::InsufficientBalance => {
                format!("Transfer of {amount} amount cannot be done from {} due to insufficient balance amount", sender.account_id)
            }
        }
    }

    pub fn sender_message(self, receiver: &Account, amount: Monetary) -> String {
        match self {
            TransferNotice::Completed => {
                format!("Transfer of {amount} amount completed to {}", receiver.account_id)
            }
            TransferNotice::InsufficientBalance => {
                format!("Transfer of {amount} amount cannot be done to {} due to insufficient balance amount", receiver.account_id)
            }
        }
    }

    /// Sends the receiver's message first, then the sender's.
    pub fn dispatch(self, sink: &dyn NotificationSink, sender: &Account, receiver: &Account, amount: Monetary) {
        sink.notify(receiver, &self.receiver_message(sender, amount));
        sink.notify(sender, &self.sender_message(receiver, amount));
    }
}
