//! Registration, login and logout.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use scribe_core::DomainError;
use scribe_shared::CredentialsForm;

use super::{INDEX_PATH, LOGIN_PATH, html, redirect};
use crate::middleware::auth::Principal;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{removal_cookie, session_cookie};
use crate::state::AppState;
use crate::views;

/// GET /auth/register
pub async fn register_form(principal: Principal) -> HttpResponse {
    html(views::register_page(
        principal.user(),
        &CredentialsForm::default(),
        None,
    ))
}

/// POST /auth/register
pub async fn register(
    state: web::Data<AppState>,
    principal: Principal,
    form: web::Form<CredentialsForm>,
) -> AppResult<HttpResponse> {
    match state.auth.register(&form.username, &form.password).await {
        Ok(_) => Ok(redirect(LOGIN_PATH)),
        Err(DomainError::Validation(msg)) => Ok(html(views::register_page(
            principal.user(),
            &form,
            Some(&msg),
        ))),
        Err(e) => Err(e.into()),
    }
}

/// GET /auth/login
pub async fn login_form(principal: Principal) -> HttpResponse {
    html(views::login_page(
        principal.user(),
        &CredentialsForm::default(),
        None,
    ))
}

/// POST /auth/login
///
/// A successful login always issues a fresh session cookie, discarding any
/// session the client already had.
pub async fn login(
    state: web::Data<AppState>,
    principal: Principal,
    form: web::Form<CredentialsForm>,
) -> AppResult<HttpResponse> {
    match state.auth.login(&form.username, &form.password).await {
        Ok(user_id) => {
            let token = state
                .tokens
                .generate_token(user_id)
                .map_err(|e| AppError::Internal(e.to_string()))?;

            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, INDEX_PATH))
                .cookie(session_cookie(token))
                .finish())
        }
        Err(DomainError::Validation(msg)) => Ok(html(views::login_page(
            principal.user(),
            &form,
            Some(&msg),
        ))),
        Err(e) => Err(e.into()),
    }
}

/// GET /auth/logout
///
/// Idempotent: clears the cookie whether or not a session existed.
pub async fn logout() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, INDEX_PATH))
        .cookie(removal_cookie())
        .finish()
}
