//! Account entity: in-memory balance with its own invariants.

use pocket_core::{Entity, WalletError, WalletResult};

/// A user's account, reconstructed per operation.
///
/// Not persisted directly: the coordinator rebuilds it as baseline balance
/// plus log replay, applies one mutation, and discards it. The balance never
/// goes negative; any mutation that would violate that is rejected before
/// state changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    owner: String,
    balance: f64,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: f64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Increase the balance. Returns the new balance.
    ///
    /// Rejects zero, negative, and non-finite amounts with `InvalidAmount`.
    pub fn add_funds(&mut self, amount: f64) -> WalletResult<f64> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(WalletError::invalid_amount("deposit amount must be positive"));
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// Decrease the balance. Returns the new balance.
    ///
    /// Rejects non-positive amounts with `InvalidAmount` and debits larger
    /// than the current balance with `InsufficientFunds`.
    pub fn remove_funds(&mut self, amount: f64) -> WalletResult<f64> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(WalletError::invalid_amount(
                "withdrawal amount must be positive",
            ));
        }
        if amount > self.balance {
            return Err(WalletError::insufficient_funds(format!(
                "current balance {} is less than {}",
                self.balance, amount
            )));
        }

        self.balance -= amount;
        Ok(self.balance)
    }
}

impl Entity for Account {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.owner
    }
}
