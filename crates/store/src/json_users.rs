//! JSON-backed user directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pocket_core::{UserDirectory, UserRecord, WalletError, WalletResult};

#[derive(Debug, Serialize, Deserialize)]
struct UsersFile {
    users: Vec<UserRecord>,
}

/// User directory stored as a JSON document: `{"users": [...]}` with
/// `balance` as a numeric field.
///
/// Lookups re-read the file so out-of-band edits to the seed data are
/// visible; a missing file is an empty directory.
pub struct JsonUserDirectory {
    path: PathBuf,
}

impl JsonUserDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write seed data, replacing whatever the file held before.
    ///
    /// Users are otherwise created out-of-band; this exists for dev setups
    /// and tests.
    pub fn seed(path: impl AsRef<Path>, users: &[UserRecord]) -> WalletResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    WalletError::persistence(format!("creating {} failed: {e}", parent.display()))
                })?;
            }
        }

        let doc = UsersFile {
            users: users.to_vec(),
        };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| WalletError::persistence(format!("encoding users failed: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            WalletError::persistence(format!("writing {} failed: {e}", path.display()))
        })
    }

    fn load(&self) -> WalletResult<Vec<UserRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            WalletError::persistence(format!("reading {} failed: {e}", self.path.display()))
        })?;
        let doc: UsersFile = serde_json::from_str(&text).map_err(|e| {
            WalletError::persistence(format!("malformed users file {}: {e}", self.path.display()))
        })?;
        Ok(doc.users)
    }
}

impl UserDirectory for JsonUserDirectory {
    fn lookup(&self, username: &str) -> WalletResult<Option<UserRecord>> {
        let users = self.load()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }
}
