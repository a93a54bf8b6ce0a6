//! # Scribe Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;

use scribe_server::build_app;
use scribe_server::config::AppConfig;
use scribe_server::state::AppState;
use scribe_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Tracing comes first so configuration warnings are not lost.
    init_telemetry(&TelemetryConfig::from_env());
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Scribe server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::connect(&config).await.map_err(|e| {
        tracing::error!("Failed to open database: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    HttpServer::new(move || build_app(state.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
