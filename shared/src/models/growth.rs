//! Derived growth values for rendering

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::CropType;

/// Where a stage sits relative to today
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Started and already followed by a later stage
    Completed,
    /// In progress
    Current,
    /// Not reached yet
    Upcoming,
}

/// A timeline stage annotated with its status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageProgress {
    pub name: String,
    pub offset_days: u32,
    pub description: String,
    pub status: StageStatus,
}

/// Everything the dashboard needs about a crop on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthSnapshot {
    pub crop_type: CropType,
    pub planting_date: NaiveDate,
    pub today: NaiveDate,
    /// May be negative for a future planting date
    pub elapsed_days: i64,
    pub current_stage_index: usize,
    pub current_stage: String,
    pub stages: Vec<StageProgress>,
    pub total_lifecycle_days: u32,
    /// 0 to 100, two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub progress_percent: Decimal,
    pub days_remaining: i64,
    pub expected_harvest_date: NaiveDate,
    /// The requested crop was unknown and the default timeline was used
    pub used_default_timeline: bool,
}

impl GrowthSnapshot {
    pub fn is_harvest_ready(&self) -> bool {
        self.days_remaining == 0
    }
}
