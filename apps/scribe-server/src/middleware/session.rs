//! Session transport and the principal-resolving middleware.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{
    Error, HttpMessage, web,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use scribe_core::RequestContext;
use scribe_core::domain::UserId;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session";

/// Cookie that establishes a session, replacing whatever the client held before.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Cookie that tells the client to drop its session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Middleware that resolves the session cookie to a user before any handler runs
/// and stores the result as the request's [`RequestContext`].
pub struct LoadPrincipal;

impl<S, B> Transform<S, ServiceRequest> for LoadPrincipal
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoadPrincipalService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoadPrincipalService {
            service: Rc::new(service),
        }))
    }
}

pub struct LoadPrincipalService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoadPrincipalService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let context = resolve_context(&req).await?;
            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

async fn resolve_context(req: &ServiceRequest) -> Result<RequestContext, AppError> {
    let state = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state.clone(),
        None => {
            tracing::error!("AppState not found in app data");
            return Err(AppError::Internal("Server configuration error".to_string()));
        }
    };

    let user_id = session_user_id(req, &state);
    let principal = state.auth.resolve_principal(user_id).await?;

    Ok(RequestContext::new(principal))
}

// A cookie that fails validation counts as no session at all.
fn session_user_id(req: &ServiceRequest, state: &AppState) -> Option<UserId> {
    let cookie = req.cookie(SESSION_COOKIE)?;

    match state.tokens.validate_token(cookie.value()) {
        Ok(claims) => Some(claims.user_id),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
            None
        }
    }
}
