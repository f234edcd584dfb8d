use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A non-negative, exact decimal amount of money.
///
/// Balances and transfer amounts never go through binary floating point, so
/// repeated deposits and withdrawals cannot drift.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub const ZERO: Monetary = Monetary(Decimal::ZERO);

    pub fn new(mut value: Decimal) -> Result<Self, MonetaryError> {
        if value < Decimal::ZERO {
            return Err(MonetaryError::Negative(value))
        }

        // Negative zero compares equal to zero but would render as "-0".
        value.set_sign_positive(true);

        Ok(Monetary(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `None` on overflow, or when the sum needs more significant
    /// digits than a `Decimal` holds and would otherwise be rounded.
    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        let sum = self.0.checked_add(rhs.0)?;

        is_exact(sum, self.0, rhs.0).then_some(Monetary(sum))
    }

    /// Returns `None` when the result would drop below zero, or would be rounded.
    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        if self.0 < rhs.0 {
            return None
        }

        let difference = self.0.checked_sub(rhs.0)?;

        is_exact(self.0, difference, rhs.0).then_some(Monetary(difference))
    }
}

/// Whether `sum == left + right` holds without rounding. A rounded sum cannot
/// give back both operands when either one is subtracted from it.
fn is_exact(sum: Decimal, left: Decimal, right: Decimal) -> bool {
    sum.checked_sub(left) == Some(right) && sum.checked_sub(right) == Some(left)
}

impl TryFrom<Decimal> for Monetary {
    type Error = MonetaryError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Monetary::new(value)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value).map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value [{value}] is not a decimal: {error}"))
        })?;

        Monetary::new(decimal)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
