use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub username: String,
    pub amount: f64,
    /// Deposit source label ("bank", "card", ...); defaults to "external".
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from_user: String,
    pub to_user: String,
    pub amount: f64,
}
