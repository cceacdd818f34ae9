//! Farmer profile models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::CropType;

/// The crop being tracked: what was planted and when
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropProfile {
    pub crop_type: CropType,
    /// Day 0 of the crop lifecycle
    pub planting_date: NaiveDate,
}

impl CropProfile {
    pub fn new(crop_type: CropType, planting_date: NaiveDate) -> Self {
        Self {
            crop_type,
            planting_date,
        }
    }
}

/// Profile entered at setup time and held for the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmerProfile {
    pub name: String,
    pub location: String,
    /// Free text, e.g. "5 acres" or "2 hectares"
    pub land_size: String,
    pub crop_type: CropType,
    pub planting_date: NaiveDate,
}

impl FarmerProfile {
    pub fn crop_profile(&self) -> CropProfile {
        CropProfile::new(self.crop_type, self.planting_date)
    }
}

/// Profile as submitted by the setup form, before the crop identifier is resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub location: String,
    pub land_size: String,
    pub crop_type: String,
    pub planting_date: NaiveDate,
}

impl ProfileInput {
    /// Resolve into a profile; unknown crops fall back to the default crop.
    ///
    /// Returns the profile and whether the fallback was used.
    pub fn into_profile(self) -> (FarmerProfile, bool) {
        let (crop_type, fallback) = CropType::resolve(&self.crop_type);
        let profile = FarmerProfile {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            land_size: self.land_size.trim().to_string(),
            crop_type,
            planting_date: self.planting_date,
        };
        (profile, fallback)
    }
}
