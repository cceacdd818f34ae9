//! HTTP handlers for crop reference data and growth resolution

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use shared::{CropTimeline, GrowthSnapshot};

use crate::services::dashboard::{CropOption, DashboardService, GrowthRequest};
use crate::AppState;

/// List supported crops
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropOption>> {
    let service = DashboardService::new(state.timelines.clone());
    Json(service.crop_options())
}

/// Get the stage timeline of a crop
pub async fn get_crop_timeline(
    State(state): State<AppState>,
    Path(crop_type): Path<String>,
) -> Json<CropTimeline> {
    let service = DashboardService::new(state.timelines.clone());
    Json(service.timeline(&crop_type))
}

/// Resolve growth for a crop and planting date
pub async fn resolve_growth(
    State(state): State<AppState>,
    Json(request): Json<GrowthRequest>,
) -> Json<GrowthSnapshot> {
    let service = DashboardService::new(state.timelines.clone());
    Json(service.resolve(&request, Local::now().date_naive()))
}
