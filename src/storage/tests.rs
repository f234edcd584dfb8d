use super::{AccountStorage, Storage};
use crate::models::AccountError;
use crate::types::Monetary;
use anyhow::Result;
use rust_decimal_macros::dec;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

#[test]
fn test_storage_basic_register_and_get_operations() -> Result<()> {
    let storage = AccountStorage::new();

    assert_eq!(storage.get("Id-0099").err(), Some(AccountError::not_found("Id-0099")));

    storage.register("Id-0001", Monetary::from_str("100.0")?)?;

    let retrieved_account = storage.get("Id-0001")?;

    assert_eq!(retrieved_account.account_id, "Id-0001");
    assert_eq!(retrieved_account.balance().to_string(), "100.0");

    Ok(())
}

#[test]
fn test_storage_rejects_duplicate_registration() -> Result<()> {
    let storage = AccountStorage::new();
    storage.register("Id-0001", Monetary::from_str("10")?)?;

    let result = storage.register("Id-0001", Monetary::from_str("20")?);

    assert_eq!(result.err(), Some(AccountError::conflict("Id-0001")));
    assert_eq!(storage.get("Id-0001")?.balance().to_string(), "10");

    Ok(())
}

#[test]
fn test_storage_always_resolves_to_the_same_instance() -> Result<()> {
    let storage = AccountStorage::new();
    let registered = storage.register("Id-0001", Monetary::ZERO)?;

    registered.deposit(Monetary::new(dec!(5))?)?;

    let first = storage.get("Id-0001")?;
    let second = storage.get("Id-0001")?;

    assert!(Arc::ptr_eq(&registered, &first));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.balance(), Monetary::new(dec!(5))?);

    Ok(())
}

#[test]
fn test_storage_concurrent_registration_has_a_single_winner() -> Result<()> {
    let storage = Arc::new(AccountStorage::new());

    let handles: Vec<_> = (0..8).map(|_| {
        let storage = storage.clone();
        thread::spawn(move || storage.register("Id-0001", Monetary::ZERO).is_ok())
    }).collect();

    let mut winners = 0;
    for handle in handles {
        if handle.join().map_err(|_| anyhow::anyhow!("worker thread panicked"))? {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(storage.len(), 1);

    Ok(())
}

#[test]
fn test_storage_snapshot_is_sorted_and_totals_balances() -> Result<()> {
    let storage = AccountStorage::new();
    storage.register("Id-0003", Monetary::from_str("3.5")?)?;
    storage.register("Id-0001", Monetary::from_str("1")?)?;
    storage.register("Id-0002", Monetary::from_str("2")?)?;

    let ids: Vec<_> = storage.snapshot().into_iter().map(|(id, _)| id).collect();

    assert_eq!(ids, vec!["Id-0001", "Id-0002", "Id-0003"]);
    assert_eq!(storage.total_balance(), Some(Monetary::new(dec!(6.5))?));

    Ok(())
}

#[test]
fn test_storage_clear_removes_all_accounts() -> Result<()> {
    let storage = AccountStorage::new();
    storage.register("Id-0001", Monetary::ZERO)?;
    storage.register("Id-0002", Monetary::ZERO)?;

    storage.clear();

    assert!(storage.is_empty());
    assert!(storage.get("Id-0001").is_err());

    Ok(())
}
