//! Ledger coordinator: validation, balance loading, mutation, persistence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use pocket_core::{UserDirectory, UserRecord, WalletError, WalletResult};

use crate::account::Account;
use crate::balance::calculate_balance;
use crate::record::TxRecord;
use crate::store::RecordStore;

/// Default counterpart label for deposits with no named source.
pub const EXTERNAL_SOURCE: &str = "external";

/// Orchestrates deposits and transfers over the two ports.
///
/// Each operation runs load → mutate → persist: replay the owner's history
/// to the current balance, apply the mutation through [`Account`] (which
/// enforces the amount and funds invariants), then append the resulting
/// record(s) in one batch. Nothing is persisted for a failed operation.
///
/// Operations touching the same user are serialized through a per-username
/// mutex; without it two concurrent operations could replay the same
/// snapshot and both append records derived from it, double-counting or
/// losing one of them. Disjoint users never contend.
pub struct LedgerCoordinator<S, D> {
    records: S,
    users: D,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S, D> LedgerCoordinator<S, D>
where
    S: RecordStore,
    D: UserDirectory,
{
    pub fn new(records: S, users: D) -> Self {
        Self {
            records,
            users,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Current balance: baseline from the directory plus full log replay.
    pub fn current_balance(&self, username: &str) -> WalletResult<f64> {
        let user = self.load_user(username)?;
        self.replayed_balance(&user)
    }

    /// All of this user's records, in log (append) order.
    pub fn history(&self, username: &str) -> WalletResult<Vec<TxRecord>> {
        self.load_user(username)?;

        let mut records = self.records.read_all()?;
        records.retain(|r| r.owner == username);
        Ok(records)
    }

    /// Credit `amount` to `username` from an external source.
    ///
    /// Returns the persisted `deposit` record. Fails with `UserNotFound`
    /// for an unknown user and `InvalidAmount` for a non-positive amount;
    /// neither failure reaches the log.
    pub fn deposit(&self, username: &str, amount: f64, source: &str) -> WalletResult<TxRecord> {
        let user = self.load_user(username)?;

        let lock = self.user_lock(username);
        let _guard = acquire(&lock);

        let current = self.replayed_balance(&user)?;
        let mut account = Account::new(username, current);
        let new_balance = account.add_funds(amount)?;

        let record = TxRecord::deposit(username, source, amount, new_balance, Utc::now());
        self.records.append(std::slice::from_ref(&record))?;

        tracing::info!(user = username, amount, balance = new_balance, "deposit recorded");
        Ok(record)
    }

    /// Move `amount` from `from_user` to `to_user`.
    ///
    /// Both users must exist and the amount must be positive before any
    /// balance is loaded. The debit is checked against the sender's
    /// *computed* current balance. On the (amount-validation-only) failure
    /// path of the receiver credit, the in-memory debit is compensated and
    /// the error returned with nothing persisted. On success the two legs
    /// share one timestamp and are appended as a single batch, so the log
    /// never carries one leg without the other. Returns the sender's
    /// `transfer_out` leg.
    pub fn transfer(&self, from_user: &str, to_user: &str, amount: f64) -> WalletResult<TxRecord> {
        let sender = self.load_user(from_user)?;
        let receiver = self.load_user(to_user)?;

        if !(amount > 0.0) || !amount.is_finite() {
            return Err(WalletError::invalid_amount(
                "transfer amount must be positive",
            ));
        }
        if from_user == to_user {
            return Err(WalletError::invalid_amount(
                "sender and receiver must differ",
            ));
        }

        // Sorted acquisition order so two opposing transfers cannot deadlock.
        let (first, second) = if from_user < to_user {
            (from_user, to_user)
        } else {
            (to_user, from_user)
        };
        let first_lock = self.user_lock(first);
        let second_lock = self.user_lock(second);
        let _first_guard = acquire(&first_lock);
        let _second_guard = acquire(&second_lock);

        // Two independent snapshot reads, one per ledger.
        let sender_current = self.replayed_balance(&sender)?;
        let receiver_current = self.replayed_balance(&receiver)?;

        let mut sender_account = Account::new(from_user, sender_current);
        let mut receiver_account = Account::new(to_user, receiver_current);

        let sender_balance = sender_account.remove_funds(amount)?;
        let receiver_balance = match receiver_account.add_funds(amount) {
            Ok(balance) => balance,
            Err(err) => {
                // Compensate the in-memory debit; the log is untouched.
                let _ = sender_account.add_funds(amount);
                tracing::warn!(
                    from = from_user,
                    to = to_user,
                    amount,
                    "receiver credit failed, transfer rolled back"
                );
                return Err(err);
            }
        };

        let (out_leg, in_leg) = TxRecord::transfer_legs(
            from_user,
            to_user,
            amount,
            sender_balance,
            receiver_balance,
            Utc::now(),
        );
        self.records.append(&[out_leg.clone(), in_leg])?;

        tracing::info!(
            from = from_user,
            to = to_user,
            amount,
            sender_balance,
            receiver_balance,
            "transfer recorded"
        );
        Ok(out_leg)
    }

    fn load_user(&self, username: &str) -> WalletResult<UserRecord> {
        self.users
            .lookup(username)?
            .ok_or_else(|| WalletError::user_not_found(username))
    }

    fn replayed_balance(&self, user: &UserRecord) -> WalletResult<f64> {
        let records = self.records.read_all()?;
        Ok(calculate_balance(&records, user.balance, &user.username))
    }

    fn user_lock(&self, username: &str) -> Arc<Mutex<()>> {
        let mut locks = self
            .user_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(username.to_string()).or_default().clone()
    }
}

// The per-user locks guard no data of their own, so a poisoned lock is still
// a valid serialization point.
fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}
