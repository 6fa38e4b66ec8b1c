//! In-memory implementations of both ports.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use pocket_core::{UserDirectory, UserRecord, WalletError, WalletResult};
use pocket_ledger::{RecordStore, TxRecord};

/// Append-only log held in a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    rows: RwLock<Vec<TxRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for InMemoryRecordStore {
    fn append(&self, records: &[TxRecord]) -> WalletResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| WalletError::persistence("lock poisoned"))?;
        rows.extend_from_slice(records);
        Ok(())
    }

    fn read_all(&self) -> WalletResult<Vec<TxRecord>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| WalletError::persistence("lock poisoned"))?;
        Ok(rows.clone())
    }
}

/// User directory held in a `HashMap`, keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let directory = Self::new();
        for user in users {
            directory.insert(user);
        }
        directory
    }

    pub fn insert(&self, user: UserRecord) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user.username.clone(), user);
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn lookup(&self, username: &str) -> WalletResult<Option<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|_| WalletError::persistence("lock poisoned"))?;
        Ok(users.get(username).cloned())
    }
}
