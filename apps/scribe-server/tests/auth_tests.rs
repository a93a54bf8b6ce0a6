//! Registration, login, logout and session handling over HTTP.


use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};

use scribe_core::ports::TokenService;
use scribe_server::build_app;
use scribe_server::middleware::session::SESSION_COOKIE;
use scribe_shared::CredentialsForm;
use test_helpers::{TestApp, location, login_request, session_cookie};

fn register_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/auth/register")
        .set_form(CredentialsForm::new(username, password))
}

#[actix_web::test]
async fn test_register() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/auth/register").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, register_request("a", "a").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/auth/login"));

    // The new account can log in.
    let resp = test::call_service(&app, login_request("a", "a").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert!(session_cookie(&resp).is_some());
}

#[actix_web::test]
async fn test_register_validate_input() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let cases = [
        ("", "", "Username is required."),
        ("a", "", "Password is required."),
        ("test", "test", "User test is already registered."),
    ];

    for (username, password, message) in cases {
        let body = test::call_and_read_body(
            &app,
            register_request(username, password).to_request(),
        )
        .await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains(message), "expected {message:?} in {body}");
    }
}

#[actix_web::test]
async fn test_login() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/auth/login").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, login_request("test", "test").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/"));

    let cookie = session_cookie(&resp).expect("login sets the session cookie");
    assert!(cookie.http_only().unwrap_or(false));

    let body = test::call_and_read_body(
        &app,
        TestRequest::get().uri("/").cookie(cookie).to_request(),
    )
    .await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("<span>test</span>"));
    assert!(body.contains("Log Out"));
}

#[actix_web::test]
async fn test_login_validate_input() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let cases = [
        ("a", "test", "Incorrect username."),
        ("test", "a", "Incorrect password."),
    ];

    for (username, password, message) in cases {
        let resp = test::call_service(&app, login_request(username, password).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_none());

        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains(message));
    }
}

#[actix_web::test]
async fn test_logout() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, login_request("test", "test").to_request()).await;
    let cookie = session_cookie(&resp).unwrap();

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/auth/logout").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/"));

    let cleared = session_cookie(&resp).expect("logout clears the session cookie");
    assert_eq!(cleared.value(), "");

    // Logging out without a session is harmless.
    let resp = test::call_service(&app, TestRequest::get().uri("/auth/logout").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[actix_web::test]
async fn test_login_replaces_existing_session() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, login_request("other", "other").to_request()).await;
    let other = session_cookie(&resp).unwrap();

    let resp = test::call_service(
        &app,
        login_request("test", "test").cookie(other.clone()).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let fresh = session_cookie(&resp).expect("login issues a new session cookie");
    assert_ne!(fresh.value(), other.value());

    // The new session belongs to the post's author.
    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/1/update").cookie(fresh.clone()).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/auth/logout").cookie(fresh).to_request(),
    )
    .await;
    let cleared = session_cookie(&resp).unwrap();

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/1/update").cookie(cleared).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/auth/login"));
}

#[actix_web::test]
async fn test_tampered_cookie_is_anonymous() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let forged = Cookie::new(SESSION_COOKIE, "not-a-token");

    let body = test::call_and_read_body(
        &app,
        TestRequest::get().uri("/").cookie(forged.clone()).to_request(),
    )
    .await;
    assert!(String::from_utf8_lossy(&body).contains("Log In"));

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/create").cookie(forged).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/auth/login"));
}

#[actix_web::test]
async fn test_session_for_deleted_user_is_anonymous() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let token = ctx.state.tokens.generate_token(99).unwrap();
    let cookie = Cookie::new(SESSION_COOKIE, token);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/").cookie(cookie.clone()).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Log In"));

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/create").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(location(&resp), Some("/auth/login"));
}

#[actix_web::test]
async fn test_hello_and_health() {
    let ctx = TestApp::new().await;
    let app = test::init_service(build_app(ctx.state.clone())).await;

    let body = test::call_and_read_body(&app, TestRequest::get().uri("/hello").to_request()).await;
    assert_eq!(&body[..], b"Hello, World!");

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
