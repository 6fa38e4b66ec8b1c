//! User entity: identity plus credential verification.

use pocket_core::{Entity, UserRecord, WalletError, WalletResult};

/// A user loaded from the directory.
///
/// Wraps the stored record with behavior: credential verification against
/// the salted bcrypt hash. The credential check is pass/fail only; the hash
/// itself stays opaque to everything downstream.
#[derive(Debug, Clone)]
pub struct User {
    record: UserRecord,
}

impl User {
    pub fn new(record: UserRecord) -> Self {
        Self { record }
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }

    /// Baseline balance stored at account creation, before log replay.
    pub fn baseline_balance(&self) -> f64 {
        self.record.balance
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Verify a password against the stored hash.
    ///
    /// Fails closed: a malformed or non-bcrypt hash verifies false rather
    /// than surfacing an error.
    pub fn check_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.record.password).unwrap_or(false)
    }

    /// Hash a password for seeding user records.
    pub fn hash_password(password: &str) -> WalletResult<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| WalletError::persistence(format!("password hashing failed: {e}")))
    }
}

impl Entity for User {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.record.username
    }
}
