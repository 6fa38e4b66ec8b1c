//! Append-only record store boundary.
//!
//! The port the coordinator persists through, without making any storage
//! assumptions. The CSV-backed implementation lives in `pocket-store`;
//! tests use in-memory implementations.

use std::sync::Arc;

use pocket_core::WalletResult;

use crate::record::TxRecord;

/// Append-only transaction log.
///
/// Implementations must:
/// - append a batch as one unit: all records in the call become visible
///   together or not at all (a transfer's two legs are one batch)
/// - preserve append order on read
/// - treat a missing or empty log as an empty sequence, not an error
pub trait RecordStore: Send + Sync {
    /// Append a batch of records to the log.
    fn append(&self, records: &[TxRecord]) -> WalletResult<()>;

    /// Read the full log in append order.
    fn read_all(&self) -> WalletResult<Vec<TxRecord>>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn append(&self, records: &[TxRecord]) -> WalletResult<()> {
        (**self).append(records)
    }

    fn read_all(&self) -> WalletResult<Vec<TxRecord>> {
        (**self).read_all()
    }
}
