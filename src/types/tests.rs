use super::{Monetary, MonetaryError};
use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1000", "1000"),
        ("1.1234", "1.1234"),
        ("0.0001", "0.0001"),
        ("  10.50  ", "10.50"),
        ("0", "0"),
        ("123456789.123456789", "123456789.123456789"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(matches!(Monetary::from_str(""), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("abc"), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("1.2.3"), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("-1.5"), Err(MonetaryError::Negative(_))));
}

#[test]
fn test_monetary_rejects_negative_decimals() {
    assert!(Monetary::new(dec!(-0.01)).is_err());
    assert!(Monetary::try_from(dec!(-100)).is_err());
    assert!(Monetary::new(Decimal::ZERO).is_ok());
}

#[test]
fn test_monetary_checked_sub_never_goes_negative() -> Result<()> {
    let balance = Monetary::new(dec!(10.0))?;

    assert_eq!(balance.checked_sub(Monetary::new(dec!(2.5))?), Some(Monetary::new(dec!(7.5))?));
    assert_eq!(balance.checked_sub(balance), Some(Monetary::ZERO));
    assert_eq!(balance.checked_sub(Monetary::new(dec!(10.0001))?), None);

    Ok(())
}

#[test]
fn test_monetary_checked_add_detects_overflow() -> Result<()> {
    let max = Monetary::new(Decimal::MAX)?;

    assert!(max.checked_add(Monetary::new(dec!(1))?).is_none());
    assert_eq!(Monetary::new(dec!(0.1))?.checked_add(Monetary::new(dec!(0.2))?), Some(Monetary::new(dec!(0.3))?));

    Ok(())
}

#[test]
fn test_monetary_refuses_sums_that_would_be_rounded() -> Result<()> {
    let large = Monetary::from_str("50000000000000000000000000000")?;
    let half = Monetary::from_str("0.5")?;
    let fine_grained = Monetary::from_str("1.0000000000000000000000000001")?;

    assert_eq!(large.checked_add(half), None);
    assert_eq!(fine_grained.checked_add(Monetary::from_str("10")?), None);
    assert_eq!(half.checked_add(large), None);
    assert_eq!(large.checked_add(Monetary::from_str("1")?), Some(Monetary::from_str("50000000000000000000000000001")?));

    Ok(())
}

#[test]
fn test_monetary_refuses_differences_that_would_be_rounded() -> Result<()> {
    let large = Monetary::from_str("50000000000000000000000000000")?;
    let fine_grained = Monetary::from_str("1.0000000000000000000000000001")?;

    assert_eq!(large.checked_sub(Monetary::from_str("0.5")?), None);
    assert_eq!(large.checked_sub(fine_grained), None);
    assert_eq!(large.checked_sub(Monetary::from_str("1")?), Some(Monetary::from_str("49999999999999999999999999999")?));
    assert_eq!(fine_grained.checked_sub(Monetary::from_str("0.0000000000000000000000000001")?), Some(Monetary::from_str("1")?));

    Ok(())
}

#[test]
fn test_monetary_normalizes_negative_zero() -> Result<()> {
    assert_eq!(Monetary::from_str("-0")?.to_string(), "0");
    assert_eq!(Monetary::from_str("-0.00")?.to_string(), "0.00");
    assert!(Monetary::new(dec!(-0))?.value().is_sign_positive());

    Ok(())
}
