//! Error handling - maps use-case failures onto HTTP responses.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

use scribe_core::DomainError;

use crate::handlers::LOGIN_PATH;
use crate::views;

/// Application-level error type.
///
/// Validation problems are normally re-rendered inline by the handler and only
/// reach this type when there is no form to show them on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated => StatusCode::FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::Unauthenticated => {
                return HttpResponse::Found()
                    .insert_header((header::LOCATION, LOGIN_PATH))
                    .finish();
            }
            AppError::NotFound(detail) | AppError::BadRequest(detail) => Some(detail.as_str()),
            AppError::Forbidden => None,
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                None
            }
        };

        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(header::ContentType::html())
            .body(views::error_page(status, detail))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Forbidden => AppError::Forbidden,
            DomainError::Unauthenticated => AppError::Unauthenticated,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
