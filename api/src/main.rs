//! Hotel CRM API Server
//!
//! Guest and room records for a small hotel, with field validation and
//! unique emails and room numbers.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresGuestRepository, PostgresRoomRepository};
use app::{GuestService, RoomService};
use config::Config;
use domain::ports::{GuestRepository, RoomRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub guest_service: Arc<GuestService<dyn GuestRepository>>,
    pub room_service: Arc<RoomService<dyn RoomRepository>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/guests",
            post(handlers::create_guest).get(handlers::list_guests),
        )
        .route(
            "/guests/by-email/:email",
            get(handlers::get_guest_by_email),
        )
        .route(
            "/guests/:id",
            get(handlers::get_guest)
                .patch(handlers::update_guest)
                .delete(handlers::delete_guest),
        )
        .route("/guests/:id/loyalty", post(handlers::adjust_loyalty))
        .route("/rooms", post(handlers::create_room).get(handlers::list_rooms))
        .route(
            "/rooms/by-number/:number",
            get(handlers::get_room_by_number),
        )
        .route(
            "/rooms/:id",
            get(handlers::get_room)
                .patch(handlers::update_room)
                .delete(handlers::delete_room),
        )
        .route("/rooms/:id/status", post(handlers::set_room_status))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hotel_crm_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hotel CRM API...");

    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let guest_repo: Arc<dyn GuestRepository> =
        Arc::new(PostgresGuestRepository::new(db.clone()));
    let room_repo: Arc<dyn RoomRepository> = Arc::new(PostgresRoomRepository::new(db.clone()));

    // Create application services
    let state = AppState {
        guest_service: Arc::new(GuestService::new(guest_repo)),
        room_service: Arc::new(RoomService::new(room_repo)),
        config: config.clone(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
