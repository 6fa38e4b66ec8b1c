//! Balance replay: fold a user's records over their baseline balance.

use crate::record::{TxKind, TxRecord};

/// Derive a user's current balance from their transaction history.
///
/// Only records whose `owner` equals `user` participate; appearing as the
/// counterpart of someone else's record never moves a balance. Deposits and
/// incoming transfers add, outgoing transfers subtract, unknown kinds are
/// skipped. Pure function: no I/O, deterministic, and an empty history
/// returns `baseline` unchanged.
pub fn calculate_balance(records: &[TxRecord], baseline: f64, user: &str) -> f64 {
    records
        .iter()
        .filter(|r| r.owner == user)
        .fold(baseline, |balance, record| match record.kind {
            TxKind::Deposit | TxKind::TransferIn => balance + record.amount,
            TxKind::TransferOut => balance - record.amount,
            TxKind::Other(_) => balance,
        })
}
