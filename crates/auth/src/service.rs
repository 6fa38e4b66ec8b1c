//! Authentication service over the user directory.

use pocket_core::{UserDirectory, WalletResult};

use crate::user::User;

/// Credential validation and user loading.
pub struct AuthService<D> {
    directory: D,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Load a user as a business entity.
    pub fn get_user(&self, username: &str) -> WalletResult<Option<User>> {
        Ok(self.directory.lookup(username)?.map(User::new))
    }

    /// Validate credentials; `None` for unknown users and bad passwords
    /// alike, so callers cannot tell the two apart.
    pub fn authenticate(&self, username: &str, password: &str) -> WalletResult<Option<User>> {
        let Some(user) = self.get_user(username)? else {
            tracing::debug!(user = username, "login for unknown user");
            return Ok(None);
        };

        if user.check_password(password) {
            Ok(Some(user))
        } else {
            tracing::debug!(user = username, "login with bad credentials");
            Ok(None)
        }
    }
}
