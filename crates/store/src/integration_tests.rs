//! End-to-end tests: coordinator over the file-backed stores.

use chrono::Utc;

use pocket_core::{UserRecord, WalletError};
use pocket_ledger::{calculate_balance, LedgerCoordinator, RecordStore, TxKind, TxRecord};

use crate::{CsvRecordStore, JsonUserDirectory};

fn sample_user(name: &str, balance: f64) -> UserRecord {
    UserRecord {
        username: name.to_string(),
        email: format!("{name}@example.com"),
        password: "$2b$12$fake-hash".to_string(),
        balance,
    }
}

fn setup(
    dir: &tempfile::TempDir,
    users: &[(&str, f64)],
) -> LedgerCoordinator<CsvRecordStore, JsonUserDirectory> {
    let users_path = dir.path().join("users.json");
    let seeded: Vec<_> = users
        .iter()
        .map(|(name, balance)| sample_user(name, *balance))
        .collect();
    JsonUserDirectory::seed(&users_path, &seeded).unwrap();

    LedgerCoordinator::new(
        CsvRecordStore::new(dir.path().join("transactions.csv")),
        JsonUserDirectory::new(users_path),
    )
}

#[test]
fn deposit_and_transfer_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let coord = setup(&dir, &[("sender", 1000.0), ("receiver", 500.0)]);

    coord.deposit("sender", 100.0, "bank").unwrap();
    coord.transfer("sender", "receiver", 200.0).unwrap();
    drop(coord);

    // Fresh store instances replay the same balances from disk.
    let coord = setup(&dir, &[("sender", 1000.0), ("receiver", 500.0)]);
    assert_eq!(coord.current_balance("sender").unwrap(), 900.0);
    assert_eq!(coord.current_balance("receiver").unwrap(), 700.0);
}

#[test]
fn transfer_writes_both_legs_in_one_append() {
    let dir = tempfile::tempdir().unwrap();
    let coord = setup(&dir, &[("sender", 1000.0), ("receiver", 500.0)]);

    coord.transfer("sender", "receiver", 200.0).unwrap();

    let store = CsvRecordStore::new(dir.path().join("transactions.csv"));
    let rows = store.read_all().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, TxKind::TransferOut);
    assert_eq!(rows[1].kind, TxKind::TransferIn);
    assert_eq!(rows[0].date, rows[1].date);
    assert_eq!(rows[0].balance, 800.0);
    assert_eq!(rows[1].balance, 700.0);
}

#[test]
fn failed_operations_leave_the_log_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let coord = setup(&dir, &[("sender", 100.0), ("receiver", 0.0)]);

    assert!(matches!(
        coord.transfer("sender", "receiver", 1000.0).unwrap_err(),
        WalletError::InsufficientFunds(_)
    ));
    assert!(matches!(
        coord.deposit("sender", -5.0, "external").unwrap_err(),
        WalletError::InvalidAmount(_)
    ));
    assert!(matches!(
        coord.deposit("ghost", 5.0, "external").unwrap_err(),
        WalletError::UserNotFound(_)
    ));

    assert!(!dir.path().join("transactions.csv").exists());
}

#[test]
fn replay_of_a_seeded_log_matches_the_recorded_balances() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvRecordStore::new(dir.path().join("transactions.csv"));

    // Log written by an earlier run, including a row of a kind this build
    // does not act on.
    let now = Utc::now();
    let mut fee = TxRecord::deposit("user1", "external", 3.0, 0.0, now);
    fee.kind = TxKind::Other("fee".to_string());
    store
        .append(&[
            TxRecord::deposit("user1", "external", 500.0, 1500.0, now),
            TxRecord::transfer_legs("user1", "user2", 200.0, 1300.0, 200.0, now).0,
            TxRecord::transfer_legs("user3", "user1", 100.0, 0.0, 1400.0, now).1,
            fee,
        ])
        .unwrap();

    let rows = store.read_all().unwrap();
    assert_eq!(calculate_balance(&rows, 1000.0, "user1"), 1400.0);
}
