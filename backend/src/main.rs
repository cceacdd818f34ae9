//! FarmTracker - Backend Server
//!
//! Serves crop growth tracking for smallholder farmers: stage timelines,
//! growth resolution, the profile dashboard and the plant assistant.

use axum::{routing::get, Router};
use shared::TimelineTable;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use services::ProfileStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileStore,
    pub timelines: Arc<TimelineTable>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_tracker_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting FarmTracker Server");
    tracing::info!("Environment: {}", config.environment);

    let timelines = config.timeline.load_table()?;
    match &config.timeline.table_path {
        Some(path) => tracing::info!("Loaded crop timelines from {}", path),
        None => tracing::info!("Using built-in crop timelines"),
    }

    // Create application state
    let state = AppState {
        profiles: ProfileStore::new(),
        timelines: Arc::new(timelines),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FarmTracker API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
