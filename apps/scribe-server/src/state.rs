//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbErr;

use scribe_core::ports::TokenService;
use scribe_core::{AuthService, BlogService};
use scribe_infra::{Argon2PasswordService, DatabaseGateway, JwtTokenService, SessionConfig};

use crate::config::AppConfig;

/// Shared application state.
///
/// Holds no per-request data; the principal travels in a `RequestContext`.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub blog: Arc<BlogService>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Wire the services onto an open database.
    pub fn new(gateway: &DatabaseGateway, session: SessionConfig) -> Self {
        let auth = AuthService::new(
            Arc::new(gateway.user_repository()),
            Arc::new(Argon2PasswordService::new()),
        );
        let blog = BlogService::new(Arc::new(gateway.post_repository()));

        tracing::info!("Application state initialized");

        Self {
            auth: Arc::new(auth),
            blog: Arc::new(blog),
            tokens: Arc::new(JwtTokenService::new(session)),
        }
    }

    /// Open the configured database and build the state on top of it.
    pub async fn connect(config: &AppConfig) -> Result<Self, DbErr> {
        let gateway = DatabaseGateway::connect(&config.database).await?;
        Ok(Self::new(&gateway, config.session.clone()))
    }
}
