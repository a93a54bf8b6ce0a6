use crate::error::DomainError;

use super::user::User;

/// Per-request state threaded explicitly into the use cases.
///
/// Built once per request after the session has been resolved and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    principal: Option<User>,
}

impl RequestContext {
    pub fn new(principal: Option<User>) -> Self {
        Self { principal }
    }

    /// Context for a visitor without a session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn principal(&self) -> Option<&User> {
        self.principal.as_ref()
    }

    /// The current user, or `Unauthenticated`.
    pub fn require_user(&self) -> Result<&User, DomainError> {
        self.principal.as_ref().ok_or(DomainError::Unauthenticated)
    }
}
