//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! a SQLite persistence gateway (SeaORM), Argon2 password hashing and
//! JWT-signed session tokens.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtTokenService, SessionConfig};
pub use database::{
    DatabaseConfig, DatabaseGateway, SqlitePostRepository, SqliteUserRepository,
};
