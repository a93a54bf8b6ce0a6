//! Persistence gateway: connection handling, schema and repositories.

mod connections;
pub mod entity;
pub mod migrations;
mod sqlite_repo;

pub use connections::{DatabaseConfig, DatabaseGateway};
pub use migrations::Migrator;
pub use sqlite_repo::{SqlitePostRepository, SqliteUserRepository};
