//! `pocket-auth` — user identity and credential validation.

pub mod service;
pub mod user;

pub use service::AuthService;
pub use user::User;
