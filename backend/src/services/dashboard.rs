//! Dashboard service: growth resolution over the timeline table

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    growth, CropInfo, CropTimeline, DashboardSummary, FarmerProfile, GrowthSnapshot,
    TimelineTable,
};

/// Request to resolve growth for a crop without a stored profile
#[derive(Debug, Deserialize)]
pub struct GrowthRequest {
    pub crop_type: String,
    pub planting_date: NaiveDate,
    /// Defaults to the server's local date
    pub today: Option<NaiveDate>,
}

/// Dashboard payload: header, summary cards and the stage timeline
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub summary: DashboardSummary,
    pub growth: GrowthSnapshot,
}

/// Crop selector entry with its stages
#[derive(Debug, Clone, Serialize)]
pub struct CropOption {
    #[serde(flatten)]
    pub info: CropInfo,
    pub stage_count: usize,
}

/// Dashboard service for growth statistics
#[derive(Clone)]
pub struct DashboardService {
    timelines: Arc<TimelineTable>,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(timelines: Arc<TimelineTable>) -> Self {
        Self { timelines }
    }

    /// Supported crops for the profile form
    pub fn crop_options(&self) -> Vec<CropOption> {
        CropInfo::all()
            .into_iter()
            .map(|mut info| {
                let timeline = self.timelines.timeline(info.crop_type);
                // The loaded table decides the lifecycle length
                info.growth_period_days = timeline.harvest_offset();
                CropOption {
                    stage_count: timeline.stages().len(),
                    info,
                }
            })
            .collect()
    }

    /// Timeline for a crop identifier; unknown crops get the default timeline
    pub fn timeline(&self, crop_id: &str) -> CropTimeline {
        let (timeline, fallback) = self.timelines.timeline_for(crop_id);
        if fallback {
            tracing::warn!(crop_type = %crop_id, "Unknown crop type, using default timeline");
        }
        timeline.clone()
    }

    /// Resolve growth for an ad-hoc crop and planting date
    pub fn resolve(&self, request: &GrowthRequest, today: NaiveDate) -> GrowthSnapshot {
        let today = request.today.unwrap_or(today);
        let snapshot = growth::resolve_growth_for_id(
            &self.timelines,
            &request.crop_type,
            request.planting_date,
            today,
        );
        if snapshot.used_default_timeline {
            tracing::warn!(
                crop_type = %request.crop_type,
                "Unknown crop type, using default timeline"
            );
        }
        tracing::debug!(
            crop = %snapshot.crop_type,
            elapsed_days = snapshot.elapsed_days,
            stage = %snapshot.current_stage,
            "Resolved growth stage"
        );
        snapshot
    }

    /// Build the dashboard for a stored profile
    pub fn dashboard(&self, profile: &FarmerProfile, today: NaiveDate) -> DashboardView {
        let growth = growth::resolve_growth(&self.timelines, &profile.crop_profile(), today);
        tracing::debug!(
            crop = %growth.crop_type,
            elapsed_days = growth.elapsed_days,
            stage = %growth.current_stage,
            "Built dashboard"
        );

        DashboardView {
            summary: DashboardSummary::build(profile, &growth),
            growth,
        }
    }
}
