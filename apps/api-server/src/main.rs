//! # Vita API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        seed_data = config.seed_data,
        nearby_default_distance_km = config.nearby_default_distance_km,
        "Starting Vita API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config)
        .await
        .context("failed to initialize application state")?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
