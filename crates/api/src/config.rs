//! Runtime configuration.
//!
//! Backing file locations are explicit configuration handed to the store
//! constructors, never process-wide constants, so tests and deployments can
//! point the same binaries at different data directories.

use std::path::PathBuf;

/// API process configuration, read from the environment with dev defaults.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// JSON user directory (`POCKET_USERS_FILE`).
    pub users_file: PathBuf,
    /// CSV transaction log (`POCKET_TRANSACTIONS_FILE`).
    pub transactions_file: PathBuf,
    /// Listen address (`POCKET_BIND`).
    pub bind: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            users_file: std::env::var("POCKET_USERS_FILE")
                .unwrap_or_else(|_| "data/users.json".to_string())
                .into(),
            transactions_file: std::env::var("POCKET_TRANSACTIONS_FILE")
                .unwrap_or_else(|_| "data/transactions.csv".to_string())
                .into(),
            bind: std::env::var("POCKET_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        }
    }
}
