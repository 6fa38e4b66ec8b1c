//! `pocket-store` — storage adapters for the wallet ledger.
//!
//! File-backed implementations of the two ports (CSV transaction log, JSON
//! user directory) plus in-memory implementations for tests and dev. Backing
//! file locations are injected through the constructors; nothing in this
//! crate reads a process-wide path.

pub mod csv_records;
pub mod in_memory;
pub mod json_users;

#[cfg(test)]
mod integration_tests;

pub use csv_records::CsvRecordStore;
pub use in_memory::{InMemoryRecordStore, InMemoryUserDirectory};
pub use json_users::JsonUserDirectory;
