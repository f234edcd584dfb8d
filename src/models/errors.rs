use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{AccountId, Monetary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account [{account_id}] was not found")]
    AccountNotFound {
        account_id: AccountId
    },
    #[error("Account [{account_id}] already exists")]
    AccountConflict {
        account_id: AccountId
    },
    #[error("Insufficient balance in account [{sender}] to transfer {amount} to account [{receiver}]")]
    InsufficientBalance {
        sender: AccountId,
        receiver: AccountId,
        amount: Monetary
    },
    #[error("Transfer amount [{amount}] must not be negative")]
    InvalidAmount {
        amount: Decimal
    },
    #[error("Balance of account [{account_id}] cannot be updated without overflow or rounding")]
    Overflow {
        account_id: AccountId
    }
}

impl AccountError {
    pub fn not_found(account_id: &str) -> Self {
        Self::AccountNotFound { account_id: account_id.to_string() }
    }

    pub fn conflict(account_id: &str) -> Self {
        Self::AccountConflict { account_id: account_id.to_string() }
    }

    pub fn insufficient_balance(sender: &str, receiver: &str, amount: Monetary) -> Self {
        Self::InsufficientBalance {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount
        }
    }

    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }

    pub fn overflow(account_id: &str) -> Self {
        Self::Overflow { account_id: account_id.to_string() }
    }
}
