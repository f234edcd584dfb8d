use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: negative value [{0}] is not allowed")]
    Negative(Decimal)
}
