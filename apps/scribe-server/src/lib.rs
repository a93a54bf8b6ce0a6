//! # Scribe Server
//!
//! The actix-web surface of the blog: configuration, state, the session
//! middleware, the access guard, handlers and HTML views.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod views;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use tracing_actix_web::TracingLogger;

use middleware::session::LoadPrincipal;
use state::AppState;

/// Build the application with its middleware stack and routes.
///
/// The session principal is resolved for every request before any handler runs.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(LoadPrincipal)
        .wrap(TracingLogger::default())
        .configure(handlers::configure_routes)
}
