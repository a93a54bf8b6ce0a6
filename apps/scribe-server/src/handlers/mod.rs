//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod health;

use actix_web::http::header;
use actix_web::{HttpResponse, web};

/// Where the access guard sends anonymous visitors.
pub const LOGIN_PATH: &str = "/auth/login";
pub const INDEX_PATH: &str = "/";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(blog::index))
        .route("/hello", web::get().to(health::hello))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .service(
                    web::resource("/register")
                        .route(web::get().to(auth::register_form))
                        .route(web::post().to(auth::register)),
                )
                .service(
                    web::resource("/login")
                        .route(web::get().to(auth::login_form))
                        .route(web::post().to(auth::login)),
                )
                .route("/logout", web::get().to(auth::logout)),
        )
        // Author-only routes; the `Identity` guard runs before each handler.
        .service(
            web::resource("/create")
                .route(web::get().to(blog::create_form))
                .route(web::post().to(blog::create)),
        )
        .service(
            web::resource("/{id}/update")
                .route(web::get().to(blog::update_form))
                .route(web::post().to(blog::update)),
        )
        .service(web::resource("/{id}/delete").route(web::post().to(blog::delete)));
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
