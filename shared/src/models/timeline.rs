//! Crop growth timeline models and the reference table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CropType;
use crate::validation::validate_timeline;

/// Name of the terminal stage every timeline ends with
pub const HARVEST_STAGE: &str = "Harvest";

/// One phase of a crop lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageDefinition {
    pub name: String,
    /// Days after planting at which this stage begins
    pub offset_days: u32,
    /// Short care or growth note
    pub description: String,
}

impl StageDefinition {
    pub fn new(name: &str, offset_days: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            offset_days,
            description: description.to_string(),
        }
    }
}

/// Ordered stages for one crop, ending with the harvest stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropTimeline {
    pub crop_type: CropType,
    pub stages: Vec<StageDefinition>,
}

impl CropTimeline {
    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    /// Offset of the terminal stage
    pub fn harvest_offset(&self) -> u32 {
        self.stages.last().map(|s| s.offset_days).unwrap_or(0)
    }
}

/// Errors raised while loading a timeline table override
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid timeline document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown crop type in timeline table: {0}")]
    UnknownCrop(String),

    #[error("timeline table has no entry for {0}")]
    MissingCrop(CropType),

    #[error("timeline table has more than one entry for {0}")]
    DuplicateCrop(CropType),

    #[error("invalid timeline for {crop}: {reason}")]
    Invalid { crop: CropType, reason: &'static str },
}

/// Read-only lookup table of crop timelines
///
/// Holds exactly one timeline per supported crop. Built once at startup
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineTable {
    // Indexed by `CropType` discriminant, in `CropType::ALL` order
    timelines: Vec<CropTimeline>,
}

impl TimelineTable {
    /// The table shipped with the application
    pub fn builtin() -> Self {
        Self {
            timelines: CropType::ALL
                .into_iter()
                .map(|crop| CropTimeline {
                    crop_type: crop,
                    stages: builtin_stages(crop),
                })
                .collect(),
        }
    }

    /// Load a table from JSON of the form `{"wheat": [{name, offset_days, description}, ...], ...}`
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        let raw: HashMap<String, Vec<StageDefinition>> = serde_json::from_str(json)?;

        let mut by_crop: HashMap<CropType, Vec<StageDefinition>> = HashMap::new();
        for (id, stages) in raw {
            let crop = id
                .parse::<CropType>()
                .map_err(|_| TimelineError::UnknownCrop(id.clone()))?;
            validate_timeline(&stages)
                .map_err(|reason| TimelineError::Invalid { crop, reason })?;
            if by_crop.insert(crop, stages).is_some() {
                return Err(TimelineError::DuplicateCrop(crop));
            }
        }

        let mut timelines = Vec::with_capacity(CropType::ALL.len());
        for crop in CropType::ALL {
            let stages = by_crop
                .remove(&crop)
                .ok_or(TimelineError::MissingCrop(crop))?;
            timelines.push(CropTimeline {
                crop_type: crop,
                stages,
            });
        }

        Ok(Self { timelines })
    }

    /// Timeline for a supported crop
    pub fn timeline(&self, crop: CropType) -> &CropTimeline {
        &self.timelines[crop as usize]
    }

    /// Timeline for a crop identifier; unknown identifiers get the default timeline.
    ///
    /// Returns the timeline and whether the fallback was used.
    pub fn timeline_for(&self, id: &str) -> (&CropTimeline, bool) {
        let (crop, fallback) = CropType::resolve(id);
        (self.timeline(crop), fallback)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropTimeline> {
        self.timelines.iter()
    }
}

impl Default for TimelineTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_stages(crop: CropType) -> Vec<StageDefinition> {
    let s = StageDefinition::new;
    match crop {
        CropType::Wheat => vec![
            s("Seeding", 0, "Plant seeds in prepared soil"),
            s("Germination", 7, "Seeds begin to sprout"),
            s("Tillering", 30, "Plant develops multiple shoots"),
            s("Stem Elongation", 60, "Rapid vertical growth"),
            s("Heading", 90, "Grain heads emerge"),
            s(HARVEST_STAGE, 120, "Ready for harvest"),
        ],
        CropType::Rice => vec![
            s("Seeding", 0, "Plant seeds in flooded field"),
            s("Germination", 10, "Seeds sprout underwater"),
            s("Vegetative", 45, "Tillering and leaf development"),
            s("Reproductive", 90, "Panicle development"),
            s("Ripening", 120, "Grain filling and maturation"),
            s(HARVEST_STAGE, 150, "Ready for harvest"),
        ],
        CropType::Corn => vec![
            s("Planting", 0, "Plant seeds in rows"),
            s("Emergence", 10, "Seedlings emerge from soil"),
            s("Vegetative", 40, "Rapid leaf and stem growth"),
            s("Tasseling", 65, "Tassels and silks appear"),
            s("Grain Fill", 85, "Kernels develop and fill"),
            s(HARVEST_STAGE, 100, "Ready for harvest"),
        ],
        CropType::Tomato => vec![
            s("Seeding", 0, "Start seeds indoors"),
            s("Transplant", 21, "Move to garden"),
            s("Flowering", 45, "First flowers appear"),
            s("Fruit Set", 60, "Small fruits develop"),
            s("Ripening", 75, "Fruits mature and ripen"),
            s(HARVEST_STAGE, 80, "Ready for harvest"),
        ],
        CropType::Potato => vec![
            s("Planting", 0, "Plant seed potatoes"),
            s("Emergence", 14, "Shoots emerge from soil"),
            s("Vegetative", 35, "Foliage growth and tuber initiation"),
            s("Tuber Bulking", 60, "Potato tubers grow larger"),
            s("Maturation", 85, "Skin sets, tops die back"),
            s(HARVEST_STAGE, 90, "Ready for harvest"),
        ],
        CropType::Soybean => vec![
            s("Planting", 0, "Plant seeds in rows"),
            s("Emergence", 7, "Cotyledons push through soil"),
            s("Vegetative", 35, "Leaf and node development"),
            s("Flowering", 60, "Flowers appear"),
            s("Pod Fill", 85, "Pods develop and fill"),
            s(HARVEST_STAGE, 110, "Ready for harvest"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropInfo;

    #[test]
    fn test_builtin_timelines_are_valid() {
        let table = TimelineTable::builtin();
        for timeline in table.iter() {
            assert!(
                validate_timeline(timeline.stages()).is_ok(),
                "{} timeline is invalid",
                timeline.crop_type
            );
        }
    }

    #[test]
    fn test_harvest_offset_matches_growth_period() {
        let table = TimelineTable::builtin();
        for crop in CropType::ALL {
            assert_eq!(
                table.timeline(crop).harvest_offset(),
                CropInfo::for_crop(crop).growth_period_days
            );
        }
    }

    #[test]
    fn test_lookup_returns_matching_crop() {
        let table = TimelineTable::builtin();
        for crop in CropType::ALL {
            assert_eq!(table.timeline(crop).crop_type, crop);
        }
    }

    #[test]
    fn test_unknown_crop_uses_default_timeline() {
        let table = TimelineTable::builtin();
        let (timeline, fallback) = table.timeline_for("banana");
        assert!(fallback);
        assert_eq!(timeline.crop_type, CropType::Wheat);
        assert_eq!(timeline.stages()[2].name, "Tillering");
    }

    fn table_json_with(wheat: &str) -> String {
        let rest: Vec<String> = CropType::ALL[1..]
            .iter()
            .map(|crop| {
                let stages = serde_json::to_string(&builtin_stages(*crop)).unwrap();
                format!("\"{}\": {}", crop.id(), stages)
            })
            .collect();
        format!("{{\"wheat\": {}, {}}}", wheat, rest.join(", "))
    }

    #[test]
    fn test_from_json_accepts_complete_table() {
        let wheat = r#"[
            {"name": "Seeding", "offset_days": 0, "description": "Sow"},
            {"name": "Harvest", "offset_days": 100, "description": "Cut"}
        ]"#;
        let table = TimelineTable::from_json(&table_json_with(wheat)).unwrap();
        assert_eq!(table.timeline(CropType::Wheat).harvest_offset(), 100);
        assert_eq!(table.timeline(CropType::Rice), TimelineTable::builtin().timeline(CropType::Rice));
    }

    #[test]
    fn test_from_json_rejects_non_increasing_offsets() {
        let wheat = r#"[
            {"name": "Seeding", "offset_days": 0, "description": "Sow"},
            {"name": "Germination", "offset_days": 10, "description": "Sprout"},
            {"name": "Tillering", "offset_days": 10, "description": "Shoots"},
            {"name": "Harvest", "offset_days": 100, "description": "Cut"}
        ]"#;
        let err = TimelineTable::from_json(&table_json_with(wheat)).unwrap_err();
        assert!(matches!(err, TimelineError::Invalid { crop: CropType::Wheat, .. }));
    }

    #[test]
    fn test_from_json_rejects_missing_crop() {
        let json = r#"{"wheat": [
            {"name": "Seeding", "offset_days": 0, "description": "Sow"},
            {"name": "Harvest", "offset_days": 100, "description": "Cut"}
        ]}"#;
        let err = TimelineTable::from_json(json).unwrap_err();
        assert!(matches!(err, TimelineError::MissingCrop(CropType::Rice)));
    }

    #[test]
    fn test_from_json_rejects_duplicate_crop_ids() {
        let wheat = r#"[
            {"name": "Seeding", "offset_days": 0, "description": "Sow"},
            {"name": "Harvest", "offset_days": 100, "description": "Cut"}
        ]"#;
        // Same crop under two spellings
        let json = format!("{{\"Wheat\": {}, {}", wheat, &table_json_with(wheat)[1..]);
        let err = TimelineTable::from_json(&json).unwrap_err();
        assert!(matches!(err, TimelineError::DuplicateCrop(CropType::Wheat)));
    }

    #[test]
    fn test_from_json_rejects_unknown_crop() {
        let json = r#"{"banana": []}"#;
        let err = TimelineTable::from_json(json).unwrap_err();
        assert!(matches!(err, TimelineError::UnknownCrop(ref id) if id == "banana"));
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = TimelineTable::from_json("not json").unwrap_err();
        assert!(matches!(err, TimelineError::Parse(_)));
    }
}
