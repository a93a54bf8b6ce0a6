//! Registration, login and session principal resolution.

use std::sync::Arc;

use crate::domain::{NewUser, User, UserId};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, UserRepository};

/// Authentication use cases.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Register a new user.
    ///
    /// Rules are checked in order and the first failure wins: username present, password
    /// present, username not taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, DomainError> {
        if username.is_empty() {
            return Err(DomainError::validation("Username is required."));
        }
        if password.is_empty() {
            return Err(DomainError::validation("Password is required."));
        }
        if self.users.find_by_username(username).await?.is_some() {
            return Err(already_registered(username));
        }

        let password_hash = self.passwords.hash(password)?;

        // The unique index catches a registration that raced past the check above.
        let user = match self.users.insert(NewUser::new(username, password_hash)).await {
            Ok(user) => user,
            Err(RepoError::Constraint(_)) => return Err(already_registered(username)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Check credentials and return the id the new session should carry.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserId, DomainError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::warn!(username = %username, "Login failed: unknown username");
            return Err(DomainError::validation("Incorrect username."));
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "Login failed: wrong password");
            return Err(DomainError::validation("Incorrect password."));
        }

        tracing::info!(user_id = user.id, username = %user.username, "User logged in");
        Ok(user.id)
    }

    /// Load the user a session points at.
    ///
    /// A session whose user no longer exists resolves to no principal instead of an error.
    pub async fn resolve_principal(
        &self,
        user_id: Option<UserId>,
    ) -> Result<Option<User>, DomainError> {
        let Some(id) = user_id else {
            return Ok(None);
        };

        let user = self.users.find_by_id(id).await?;
        if user.is_none() {
            tracing::debug!(user_id = id, "Session refers to a missing user");
        }
        Ok(user)
    }
}

fn already_registered(username: &str) -> DomainError {
    DomainError::Validation(format!("User {username} is already registered."))
}
