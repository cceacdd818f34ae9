//! Dashboard summary models

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{CropInfo, FarmerProfile, GrowthSnapshot};

/// Header and summary cards shown on the farmer dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub farmer_name: String,
    pub location: String,
    pub land_size: String,
    pub crop_label: String,
    pub days_since_planting: i64,
    pub cards: Vec<StatCard>,
}

/// Kind of summary card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    GrowthProgress,
    DaysToHarvest,
    ExpectedYield,
    LandCoverage,
}

/// A single dashboard card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub kind: StatKind,
    pub title: String,
    pub value: String,
    pub caption: String,
    /// Only set for the growth progress card
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub progress_percent: Option<Decimal>,
}

impl DashboardSummary {
    pub fn build(profile: &FarmerProfile, growth: &GrowthSnapshot) -> Self {
        let info = CropInfo::for_crop(growth.crop_type);

        let cards = vec![
            StatCard {
                kind: StatKind::GrowthProgress,
                title: "Growth Progress".to_string(),
                value: format!(
                    "{}%",
                    growth
                        .progress_percent
                        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                ),
                caption: format!("{} days completed", growth.elapsed_days.max(0)),
                progress_percent: Some(growth.progress_percent),
            },
            StatCard {
                kind: StatKind::DaysToHarvest,
                title: "Days to Harvest".to_string(),
                value: growth.days_remaining.to_string(),
                caption: format!(
                    "Expected harvest {}",
                    format_date(growth.expected_harvest_date)
                ),
                progress_percent: None,
            },
            StatCard {
                kind: StatKind::ExpectedYield,
                title: "Expected Yield".to_string(),
                value: info.yield_per_acre,
                caption: "Per acre estimate".to_string(),
                progress_percent: None,
            },
            StatCard {
                kind: StatKind::LandCoverage,
                title: "Land Coverage".to_string(),
                value: profile.land_size.clone(),
                caption: "Total farm size".to_string(),
                progress_percent: None,
            },
        ];

        Self {
            farmer_name: profile.name.clone(),
            location: profile.location.clone(),
            land_size: profile.land_size.clone(),
            crop_label: info.label,
            days_since_planting: growth.elapsed_days,
            cards,
        }
    }

    pub fn card(&self, kind: StatKind) -> Option<&StatCard> {
        self.cards.iter().find(|c| c.kind == kind)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
