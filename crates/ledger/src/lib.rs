//! `pocket-ledger` — the wallet ledger core.
//!
//! Balances are never stored directly: each user has a baseline balance in
//! the directory and an append-only transaction log, and the current balance
//! is derived by replaying that user's records over the baseline. This crate
//! owns the replay, the account invariants, and the coordinator that ties
//! validation, mutation, and persistence together.

pub mod account;
pub mod balance;
pub mod coordinator;
pub mod record;
pub mod store;

pub use account::Account;
pub use balance::calculate_balance;
pub use coordinator::LedgerCoordinator;
pub use record::{TxKind, TxRecord};
pub use store::RecordStore;
