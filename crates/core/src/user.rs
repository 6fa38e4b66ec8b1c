//! Stored user model and the directory port that serves it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::WalletResult;

/// A user as persisted in the directory.
///
/// `balance` is the **baseline balance**: the balance stored at account
/// creation, before any transaction-log replay is applied. It never changes
/// after seeding; the current balance is always baseline + replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    /// Salted credential hash (opaque to the ledger core).
    pub password: String,
    pub balance: f64,
}

/// Read-only lookup of user identity, credential hash, and baseline balance.
///
/// Users are created out-of-band (seed data); this core only reads them.
/// A missing backing file is an empty directory, not an error.
pub trait UserDirectory: Send + Sync {
    fn lookup(&self, username: &str) -> WalletResult<Option<UserRecord>>;
}

impl<D> UserDirectory for Arc<D>
where
    D: UserDirectory + ?Sized,
{
    fn lookup(&self, username: &str) -> WalletResult<Option<UserRecord>> {
        (**self).lookup(username)
    }
}
