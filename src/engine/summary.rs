use crate::models::AccountError;

/// Tally of transfer outcomes for a single run.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct TransferSummary {
    pub completed: usize,
    pub insufficient_balance: usize,
    pub not_found: usize,
    pub invalid: usize,
    pub overflow: usize
}

impl TransferSummary {
    pub fn record(&mut self, outcome: &Result<(), AccountError>) {
        match outcome {
            Ok(()) => self.completed += 1,
            Err(AccountError::InsufficientBalance { .. }) => self.insufficient_balance += 1,
            Err(AccountError::AccountNotFound { .. }) => self.not_found += 1,
            Err(AccountError::Overflow { .. }) => self.overflow += 1,
            Err(AccountError::InvalidAmount { .. } | AccountError::AccountConflict { .. }) => self.invalid += 1
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.insufficient_balance + self.not_found + self.invalid + self.overflow
    }
}
