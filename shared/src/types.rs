//! Common types used across the platform

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crops supported by the growth tracker
///
/// The set is closed: the profile form only offers these options, and every
/// variant has exactly one timeline in the reference table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    /// Default crop, used as fallback for unknown identifiers
    #[default]
    Wheat,
    Rice,
    Corn,
    Tomato,
    Potato,
    Soybean,
}

impl CropType {
    /// All supported crops, in reference table order
    pub const ALL: [CropType; 6] = [
        CropType::Wheat,
        CropType::Rice,
        CropType::Corn,
        CropType::Tomato,
        CropType::Potato,
        CropType::Soybean,
    ];

    /// Identifier used on the wire and in the profile form
    pub fn id(&self) -> &'static str {
        match self {
            CropType::Wheat => "wheat",
            CropType::Rice => "rice",
            CropType::Corn => "corn",
            CropType::Tomato => "tomato",
            CropType::Potato => "potato",
            CropType::Soybean => "soybean",
        }
    }

    /// Resolve an identifier, falling back to the default crop.
    ///
    /// Returns the crop and whether the fallback was used.
    pub fn resolve(id: &str) -> (CropType, bool) {
        match id.parse::<CropType>() {
            Ok(crop) => (crop, false),
            Err(_) => (CropType::default(), true),
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Wheat => write!(f, "Wheat"),
            CropType::Rice => write!(f, "Rice"),
            CropType::Corn => write!(f, "Corn"),
            CropType::Tomato => write!(f, "Tomato"),
            CropType::Potato => write!(f, "Potato"),
            CropType::Soybean => write!(f, "Soybean"),
        }
    }
}

/// Unknown crop identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown crop type: {0}")]
pub struct CropParseError(pub String);

impl FromStr for CropType {
    type Err = CropParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CropType::ALL
            .into_iter()
            .find(|crop| crop.id() == normalized)
            .ok_or_else(|| CropParseError(s.to_string()))
    }
}
