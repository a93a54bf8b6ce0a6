use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;
use super::sqlite_repo::{SqlitePostRepository, SqliteUserRepository};

/// Configuration for the single-file relational store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Load from `DATABASE_URL`, `DB_MAX_CONNECTIONS` and `DB_MIN_CONNECTIONS`.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://scribe.sqlite?mode=rwc".to_string()),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            min_connections: std::env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        }
    }

    /// Config for a SQLite file at `path`, created on first open.
    pub fn sqlite_file(path: &std::path::Path) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Handle to the relational store.
///
/// Statements check a connection out of the handle and return it when they finish,
/// whether they succeed or fail.
#[derive(Clone)]
pub struct DatabaseGateway {
    conn: DbConn,
}

impl DatabaseGateway {
    /// Open the store described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Opening database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            "Database opened (max connections: {})",
            config.max_connections
        );

        Ok(Self { conn })
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Drop and recreate every table. Destroys all data.
    pub async fn initialize_schema(&self) -> Result<(), DbErr> {
        tracing::warn!("Re-initializing database schema");
        Migrator::refresh(&self.conn).await
    }

    pub fn user_repository(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(self.conn.clone())
    }

    pub fn post_repository(&self) -> SqlitePostRepository {
        SqlitePostRepository::new(self.conn.clone())
    }
}
