//! Concurrent balance transfers between named in-memory accounts.
//!
//! Each [`models::Account`] owns its own lock. [`engine::TransferService`] holds
//! both locks of a transfer across the debit and the credit, always acquiring
//! them in descending account id order, which keeps the total balance conserved
//! and rules out deadlock between opposing transfers.

pub mod config;
pub mod engine;
pub mod models;
pub mod notifications;
pub mod storage;
pub mod types;
