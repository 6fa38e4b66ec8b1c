//! Domain error model.

use thiserror::Error;

/// Result type used across the wallet domain.
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet-level error.
///
/// Four kinds, kept distinct so callers can map each to a different
/// response instead of collapsing them into a generic failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// An amount failed validation (zero, negative, or non-finite).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A username was not present in the user directory.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// A debit exceeded the computed current balance.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// The underlying store failed to read or write. Not retried.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl WalletError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound(username.into())
    }

    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::InsufficientFunds(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
