//! Request extractors for the resolved principal.

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use scribe_core::RequestContext;
use scribe_core::domain::User;

use crate::middleware::error::AppError;

/// The request's context, with or without a logged-in user.
///
/// Use this in public handlers that render differently for visitors and users.
#[derive(Debug, Clone)]
pub struct Principal(pub RequestContext);

impl Principal {
    pub fn user(&self) -> Option<&User> {
        self.0.principal()
    }
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(request_context(req).map(Principal))
    }
}

/// Access guard: an authenticated user.
///
/// Extraction fails with a redirect to the login page when nobody is logged in,
/// so a handler taking `Identity` never runs for anonymous visitors:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
    pub context: RequestContext,
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = request_context(req).and_then(|context| {
            let user = context.principal().cloned().ok_or(AppError::Unauthenticated)?;
            Ok(Identity { user, context })
        });

        ready(identity)
    }
}

fn request_context(req: &HttpRequest) -> Result<RequestContext, AppError> {
    match req.extensions().get::<RequestContext>() {
        Some(context) => Ok(context.clone()),
        None => {
            tracing::error!("RequestContext missing; is LoadPrincipal installed?");
            Err(AppError::Internal("Server configuration error".to_string()))
        }
    }
}
