mod account;
mod errors;
mod transfer;

pub use account::{Account, BalanceGuard};
pub use errors::AccountError;
pub use transfer::{AccountRow, TransferRequest};
