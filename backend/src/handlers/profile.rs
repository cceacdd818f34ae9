//! Profile session HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use shared::{FarmerProfile, ProfileInput};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::dashboard::{DashboardService, DashboardView};
use crate::services::profile::{ProfileService, ProfileSession};
use crate::AppState;

/// Create a profile and start a session
pub async fn create_profile(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> AppResult<(StatusCode, Json<ProfileSession>)> {
    let service = ProfileService::new(state.profiles.clone());
    let session = service
        .create_profile(input, Local::now().date_naive())
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Get the profile of a session
pub async fn get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<FarmerProfile>> {
    let service = ProfileService::new(state.profiles.clone());
    let profile = service.get_profile(session_id).await?;
    Ok(Json(profile))
}

/// Replace the profile of a session
pub async fn replace_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<ProfileInput>,
) -> AppResult<Json<ProfileSession>> {
    let service = ProfileService::new(state.profiles.clone());
    let session = service
        .replace_profile(session_id, input, Local::now().date_naive())
        .await?;
    Ok(Json(session))
}

/// End a session
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = ProfileService::new(state.profiles.clone());
    service.delete_profile(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters for the dashboard
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub today: Option<NaiveDate>,
}

/// Get the dashboard for a session profile
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardView>> {
    let profile = ProfileService::new(state.profiles.clone())
        .get_profile(session_id)
        .await?;
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());

    let service = DashboardService::new(state.timelines.clone());
    Ok(Json(service.dashboard(&profile, today)))
}
