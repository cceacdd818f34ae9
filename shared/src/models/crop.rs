//! Crop reference metadata

use serde::{Deserialize, Serialize};

use crate::types::CropType;

/// Display and planning data for a supported crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropInfo {
    pub crop_type: CropType,
    pub label: String,
    /// Days from planting to harvest
    pub growth_period_days: u32,
    /// Typical yield, free text with unit
    pub yield_per_acre: String,
}

impl CropInfo {
    /// Reference metadata for a crop
    pub fn for_crop(crop: CropType) -> Self {
        let (growth_period_days, yield_per_acre) = match crop {
            CropType::Wheat => (120, "40-60 bushels"),
            CropType::Rice => (150, "6-8 tons"),
            CropType::Corn => (100, "150-200 bushels"),
            CropType::Tomato => (80, "25-35 tons"),
            CropType::Potato => (90, "300-400 cwt"),
            CropType::Soybean => (110, "40-50 bushels"),
        };

        Self {
            crop_type: crop,
            label: crop.to_string(),
            growth_period_days,
            yield_per_acre: yield_per_acre.to_string(),
        }
    }

    /// Options for the profile form crop selector
    pub fn all() -> Vec<CropInfo> {
        CropType::ALL.into_iter().map(CropInfo::for_crop).collect()
    }
}
