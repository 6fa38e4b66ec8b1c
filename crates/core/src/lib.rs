//! `pocket-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod user;

pub use entity::Entity;
pub use error::{WalletError, WalletResult};
pub use user::{UserDirectory, UserRecord};
