use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{AccountId, Monetary};

/// A request to move `amount` from `sender` to `receiver`.
///
/// The amount is kept as a raw decimal so that a negative value reaches the
/// transfer service and is rejected there, instead of being lost at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "sender")]
    pub sender_account_id: AccountId,
    #[serde(rename = "receiver")]
    pub receiver_account_id: AccountId,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal
}

impl TransferRequest {
    pub fn new(sender: impl Into<AccountId>, receiver: impl Into<AccountId>, amount: Decimal) -> Self {
        Self {
            sender_account_id: sender.into(),
            receiver_account_id: receiver.into(),
            amount
        }
    }
}

/// A single row of the account registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRow {
    #[serde(rename = "account")]
    pub account_id: AccountId,
    pub balance: Monetary
}
