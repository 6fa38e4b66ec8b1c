//! Service wiring: file-backed stores behind the coordinator and auth.

use std::sync::Arc;

use pocket_auth::AuthService;
use pocket_ledger::LedgerCoordinator;
use pocket_store::{CsvRecordStore, JsonUserDirectory};

use crate::config::ApiConfig;

/// Everything the handlers need, built once at startup.
///
/// The coordinator and the auth service share one user directory instance.
pub struct AppServices {
    coordinator: LedgerCoordinator<CsvRecordStore, Arc<JsonUserDirectory>>,
    auth: AuthService<Arc<JsonUserDirectory>>,
}

impl AppServices {
    pub fn from_config(config: &ApiConfig) -> Self {
        let directory = Arc::new(JsonUserDirectory::new(&config.users_file));

        Self {
            coordinator: LedgerCoordinator::new(
                CsvRecordStore::new(&config.transactions_file),
                Arc::clone(&directory),
            ),
            auth: AuthService::new(directory),
        }
    }

    pub fn coordinator(&self) -> &LedgerCoordinator<CsvRecordStore, Arc<JsonUserDirectory>> {
        &self.coordinator
    }

    pub fn auth(&self) -> &AuthService<Arc<JsonUserDirectory>> {
        &self.auth
    }
}
