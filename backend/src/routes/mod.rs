//! Route definitions for the FarmTracker API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Largest assistant message accepted; photos arrive base64-encoded inside JSON
pub const MAX_ASSISTANT_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Crop reference data
        .nest("/crops", crop_routes())
        // Growth resolution for an ad-hoc crop and planting date
        .route("/growth", post(handlers::resolve_growth))
        // Profile sessions
        .nest("/profiles", profile_routes())
        // Plant assistant
        .nest("/assistant", assistant_routes())
}

fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop_type/timeline", get(handlers::get_crop_timeline))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_profile))
        .route(
            "/:id",
            get(handlers::get_profile)
                .put(handlers::replace_profile)
                .delete(handlers::delete_profile),
        )
        .route("/:id/dashboard", get(handlers::get_dashboard))
}

fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/greeting", get(handlers::get_greeting))
        .route("/messages", post(handlers::send_message))
        .layer(DefaultBodyLimit::max(MAX_ASSISTANT_BODY_BYTES))
}
