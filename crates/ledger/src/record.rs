//! Immutable transaction records (one row of the append-only log).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a ledger row.
///
/// The log on disk may contain kinds this build does not know about; those
/// are preserved as `Other` and skipped during replay rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxKind {
    Deposit,
    TransferIn,
    TransferOut,
    Other(String),
}

impl TxKind {
    pub fn as_str(&self) -> &str {
        match self {
            TxKind::Deposit => "deposit",
            TxKind::TransferIn => "transfer_in",
            TxKind::TransferOut => "transfer_out",
            TxKind::Other(s) => s,
        }
    }
}

impl From<String> for TxKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "deposit" => TxKind::Deposit,
            "transfer_in" => TxKind::TransferIn,
            "transfer_out" => TxKind::TransferOut,
            _ => TxKind::Other(value),
        }
    }
}

impl From<TxKind> for String {
    fn from(value: TxKind) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for TxKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transaction record, owned by exactly one user's ledger.
///
/// `owner` is authoritative for replay: a record only affects the balance of
/// the user it belongs to, never the counterpart named in `from_user` /
/// `to_user`. Records are immutable once written; the log is append-only and
/// no record is ever updated or deleted.
///
/// Field order matches the log columns:
/// `date,owner,type,from_user,to_user,amount,balance,description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxRecord {
    pub date: DateTime<Utc>,
    pub owner: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub from_user: String,
    pub to_user: String,
    /// Always positive; the sign is carried by `kind`.
    pub amount: f64,
    /// Owner's balance immediately after this record.
    pub balance: f64,
    pub description: String,
}

impl TxRecord {
    /// Build a deposit row: money arriving from an external source.
    pub fn deposit(
        owner: &str,
        source: &str,
        amount: f64,
        balance: f64,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            date: at,
            owner: owner.to_string(),
            kind: TxKind::Deposit,
            from_user: source.to_string(),
            to_user: owner.to_string(),
            amount,
            balance,
            description: format!("Deposit of {amount} from {source}"),
        }
    }

    /// Build the two legs of a transfer: the sender's debit and the
    /// receiver's credit. Both legs share one timestamp and amount.
    pub fn transfer_legs(
        from_user: &str,
        to_user: &str,
        amount: f64,
        sender_balance: f64,
        receiver_balance: f64,
        at: DateTime<Utc>,
    ) -> (Self, Self) {
        let out_leg = Self {
            date: at,
            owner: from_user.to_string(),
            kind: TxKind::TransferOut,
            from_user: from_user.to_string(),
            to_user: to_user.to_string(),
            amount,
            balance: sender_balance,
            description: format!("Transfer of {amount} to {to_user}"),
        };
        let in_leg = Self {
            date: at,
            owner: to_user.to_string(),
            kind: TxKind::TransferIn,
            from_user: from_user.to_string(),
            to_user: to_user.to_string(),
            amount,
            balance: receiver_balance,
            description: format!("Transfer of {amount} from {from_user}"),
        };
        (out_leg, in_leg)
    }
}
