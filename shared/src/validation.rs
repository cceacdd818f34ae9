//! Validation utilities for FarmTracker

use chrono::{Days, NaiveDate};

use crate::models::{FarmerProfile, ProfileInput, StageDefinition, HARVEST_STAGE};

/// How far ahead a planting date may be scheduled
pub const MAX_FUTURE_PLANTING_DAYS: u64 = 365;

// ============================================================================
// Timeline Validations
// ============================================================================

/// Validate a crop timeline: starts at day 0, strictly increasing, ends at harvest
pub fn validate_timeline(stages: &[StageDefinition]) -> Result<(), &'static str> {
    let first = stages.first().ok_or("Timeline must have at least one stage")?;
    if first.offset_days != 0 {
        return Err("First stage must begin on day 0");
    }
    if stages
        .windows(2)
        .any(|pair| pair[1].offset_days <= pair[0].offset_days)
    {
        return Err("Stage offsets must be strictly increasing");
    }
    if stages.iter().any(|s| s.name.trim().is_empty()) {
        return Err("Stage names cannot be empty");
    }
    match stages.last() {
        Some(last) if last.name == HARVEST_STAGE => Ok(()),
        _ => Err("Final stage must be Harvest"),
    }
}

// ============================================================================
// Profile Validations
// ============================================================================

/// Validate a required free-text profile field
pub fn validate_profile_field(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("This field is required");
    }
    if value.chars().count() > 200 {
        return Err("Must be at most 200 characters");
    }
    Ok(())
}

/// Parse an ISO `YYYY-MM-DD` planting date
pub fn parse_planting_date(value: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Planting date must be a date in YYYY-MM-DD format")
}

/// Validate that a planting date is not unreasonably far in the future
///
/// Dates up to a year ahead are accepted and resolve to the first stage.
pub fn validate_planting_date(date: NaiveDate, today: NaiveDate) -> Result<(), &'static str> {
    match today.checked_add_days(Days::new(MAX_FUTURE_PLANTING_DAYS)) {
        Some(limit) if date > limit => {
            Err("Planting date cannot be more than a year in the future")
        }
        _ => Ok(()),
    }
}

/// Validate a submitted profile, returning the failing field and message
pub fn validate_profile_input(
    input: &ProfileInput,
    today: NaiveDate,
) -> Result<(), (&'static str, &'static str)> {
    validate_profile_field(&input.name).map_err(|e| ("name", e))?;
    validate_profile_field(&input.location).map_err(|e| ("location", e))?;
    validate_profile_field(&input.land_size).map_err(|e| ("land_size", e))?;
    if input.crop_type.trim().is_empty() {
        return Err(("crop_type", "Select a crop"));
    }
    validate_planting_date(input.planting_date, today).map_err(|e| ("planting_date", e))?;
    Ok(())
}

/// Validate a resolved profile, returning the failing field and message
pub fn validate_farmer_profile(
    profile: &FarmerProfile,
    today: NaiveDate,
) -> Result<(), (&'static str, &'static str)> {
    validate_profile_field(&profile.name).map_err(|e| ("name", e))?;
    validate_profile_field(&profile.location).map_err(|e| ("location", e))?;
    validate_profile_field(&profile.land_size).map_err(|e| ("land_size", e))?;
    validate_planting_date(profile.planting_date, today).map_err(|e| ("planting_date", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CropType;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stage(name: &str, offset: u32) -> StageDefinition {
        StageDefinition::new(name, offset, "")
    }

    fn input() -> ProfileInput {
        ProfileInput {
            name: "Ana".to_string(),
            location: "Fresno, CA".to_string(),
            land_size: "5 acres".to_string(),
            crop_type: "tomato".to_string(),
            planting_date: date("2024-03-01"),
        }
    }

    // ========================================================================
    // Timeline Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_timeline_valid() {
        let stages = vec![stage("Seeding", 0), stage("Growth", 10), stage("Harvest", 50)];
        assert!(validate_timeline(&stages).is_ok());
    }

    #[test]
    fn test_validate_timeline_single_harvest_stage() {
        assert!(validate_timeline(&[stage("Harvest", 0)]).is_ok());
    }

    #[test]
    fn test_validate_timeline_empty() {
        assert!(validate_timeline(&[]).is_err());
    }

    #[test]
    fn test_validate_timeline_must_start_at_zero() {
        let stages = vec![stage("Seeding", 3), stage("Harvest", 50)];
        assert_eq!(
            validate_timeline(&stages),
            Err("First stage must begin on day 0")
        );
    }

    #[test]
    fn test_validate_timeline_strictly_increasing() {
        let stages = vec![stage("Seeding", 0), stage("Growth", 50), stage("Harvest", 50)];
        assert_eq!(
            validate_timeline(&stages),
            Err("Stage offsets must be strictly increasing")
        );
    }

    #[test]
    fn test_validate_timeline_ends_with_harvest() {
        let stages = vec![stage("Seeding", 0), stage("Ripening", 50)];
        assert_eq!(validate_timeline(&stages), Err("Final stage must be Harvest"));
    }

    // ========================================================================
    // Profile Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_profile_field() {
        assert!(validate_profile_field("Ana").is_ok());
        assert!(validate_profile_field("   ").is_err());
        assert!(validate_profile_field("").is_err());
        assert!(validate_profile_field(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_parse_planting_date() {
        assert_eq!(parse_planting_date("2024-03-01"), Ok(date("2024-03-01")));
        assert_eq!(parse_planting_date(" 2024-03-01 "), Ok(date("2024-03-01")));
        assert!(parse_planting_date("03/01/2024").is_err());
        assert!(parse_planting_date("2024-02-30").is_err());
    }

    #[test]
    fn test_validate_planting_date_window() {
        let today = date("2024-03-01");
        assert!(validate_planting_date(date("2023-01-01"), today).is_ok());
        assert!(validate_planting_date(date("2024-03-06"), today).is_ok());
        assert!(validate_planting_date(date("2025-03-01"), today).is_ok());
        assert!(validate_planting_date(date("2025-03-02"), today).is_err());
    }

    #[test]
    fn test_validate_profile_input_valid() {
        assert!(validate_profile_input(&input(), date("2024-04-01")).is_ok());
    }

    #[test]
    fn test_validate_profile_input_reports_field() {
        let mut missing_name = input();
        missing_name.name = " ".to_string();
        assert_eq!(
            validate_profile_input(&missing_name, date("2024-04-01")).unwrap_err().0,
            "name"
        );

        let mut missing_crop = input();
        missing_crop.crop_type = String::new();
        assert_eq!(
            validate_profile_input(&missing_crop, date("2024-04-01")).unwrap_err().0,
            "crop_type"
        );
    }

    #[test]
    fn test_validate_farmer_profile() {
        let (profile, fallback) = input().into_profile();
        assert!(!fallback);
        assert_eq!(profile.crop_type, CropType::Tomato);
        assert!(validate_farmer_profile(&profile, date("2024-04-01")).is_ok());

        let mut blank = profile.clone();
        blank.land_size = String::new();
        assert_eq!(
            validate_farmer_profile(&blank, date("2024-04-01")).unwrap_err().0,
            "land_size"
        );
    }
}
