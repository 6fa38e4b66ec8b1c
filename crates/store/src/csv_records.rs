//! CSV-backed append-only transaction log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use pocket_core::{WalletError, WalletResult};
use pocket_ledger::{RecordStore, TxRecord};

/// Transaction log stored as one CSV file.
///
/// Rows carry the columns `date,owner,type,from_user,to_user,amount,balance,
/// description`; amounts and balances are decimal strings in the file and
/// typed `f64` in memory (parsing happens here, at the store boundary).
///
/// A batch is serialized to a buffer first and written with a single
/// `write_all` under the writer lock, so the two legs of a transfer land in
/// the file together or not at all.
pub struct CsvRecordStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvRecordStore {
    fn append(&self, records: &[TxRecord]) -> WalletResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let _guard = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let need_header = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        // Serialize the whole batch before touching the file.
        let mut buf = csv::WriterBuilder::new()
            .has_headers(need_header)
            .from_writer(Vec::new());
        for record in records {
            buf.serialize(record)
                .map_err(|e| WalletError::persistence(format!("csv encode failed: {e}")))?;
        }
        let bytes = buf
            .into_inner()
            .map_err(|e| WalletError::persistence(format!("csv encode failed: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    WalletError::persistence(format!("creating {} failed: {e}", parent.display()))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                WalletError::persistence(format!("opening {} failed: {e}", self.path.display()))
            })?;
        file.write_all(&bytes)
            .and_then(|()| file.flush())
            .map_err(|e| {
                WalletError::persistence(format!("appending {} failed: {e}", self.path.display()))
            })?;

        tracing::debug!(rows = records.len(), path = %self.path.display(), "log appended");
        Ok(())
    }

    fn read_all(&self) -> WalletResult<Vec<TxRecord>> {
        // A log that was never written reads as empty, not as a failure.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            WalletError::persistence(format!("reading {} failed: {e}", self.path.display()))
        })?;

        reader
            .deserialize::<TxRecord>()
            .map(|row| {
                row.map_err(|e| WalletError::persistence(format!("malformed log row: {e}")))
            })
            .collect()
    }
}
