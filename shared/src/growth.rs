//! Growth stage resolution
//!
//! Maps the days elapsed since planting onto a crop's timeline. Every
//! function here is pure: the caller supplies "today".

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    CropProfile, CropTimeline, GrowthSnapshot, StageDefinition, StageProgress, StageStatus,
    TimelineTable,
};
use crate::types::CropType;

/// Whole days from planting to today. Negative when planting is in the future.
///
/// Both inputs are calendar dates, so the planting day itself is day 0.
pub fn elapsed_days(planting_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - planting_date).num_days()
}

/// Index of the furthest-advanced stage that has started.
///
/// Scans from the last stage backward and returns the first stage whose
/// offset is `<= elapsed_days`; 0 when none has started.
pub fn current_stage_index(stages: &[StageDefinition], elapsed_days: i64) -> usize {
    stages
        .iter()
        .rposition(|stage| i64::from(stage.offset_days) <= elapsed_days)
        .unwrap_or(0)
}

/// Whether the stage at `index` is in progress.
///
/// True only for the current stage index, and only while `elapsed_days` is
/// below the next stage's offset. The terminal stage has no upper bound.
pub fn is_current_stage(stages: &[StageDefinition], index: usize, elapsed_days: i64) -> bool {
    if index >= stages.len() || index != current_stage_index(stages, elapsed_days) {
        return false;
    }
    match stages.get(index + 1) {
        Some(next) => elapsed_days < i64::from(next.offset_days),
        None => true,
    }
}

/// Status of one stage for rendering
pub fn stage_status(stages: &[StageDefinition], index: usize, elapsed_days: i64) -> StageStatus {
    if is_current_stage(stages, index, elapsed_days) {
        StageStatus::Current
    } else if stages
        .get(index)
        .is_some_and(|stage| i64::from(stage.offset_days) <= elapsed_days)
    {
        StageStatus::Completed
    } else {
        StageStatus::Upcoming
    }
}

/// Share of the lifecycle completed, clamped to `[0, 100]` and rounded to two places
pub fn progress_percentage(total_lifecycle_days: u32, elapsed_days: i64) -> Decimal {
    let hundred = Decimal::from(100);
    if total_lifecycle_days == 0 {
        return if elapsed_days >= 0 { hundred } else { Decimal::ZERO };
    }

    // Clamp first so huge inputs cannot overflow the decimal
    let total = i64::from(total_lifecycle_days);
    let elapsed = elapsed_days.clamp(0, total);
    (Decimal::from(elapsed) * hundred / Decimal::from(total)).round_dp(2)
}

/// Days left until harvest, never negative.
///
/// A future planting date counts as day 0, so the full lifecycle remains.
pub fn days_remaining(total_lifecycle_days: u32, elapsed_days: i64) -> i64 {
    i64::from(total_lifecycle_days)
        .saturating_sub(elapsed_days.max(0))
        .max(0)
}

/// Resolve every derived value for a crop profile on a given day
pub fn resolve_growth(
    table: &TimelineTable,
    profile: &CropProfile,
    today: NaiveDate,
) -> GrowthSnapshot {
    snapshot(
        table.timeline(profile.crop_type),
        profile.planting_date,
        today,
        false,
    )
}

/// Like [`resolve_growth`], for an unvalidated crop identifier.
///
/// Unknown identifiers resolve against the default timeline and the
/// snapshot records the fallback.
pub fn resolve_growth_for_id(
    table: &TimelineTable,
    crop_id: &str,
    planting_date: NaiveDate,
    today: NaiveDate,
) -> GrowthSnapshot {
    let (timeline, fallback) = table.timeline_for(crop_id);
    snapshot(timeline, planting_date, today, fallback)
}

fn snapshot(
    timeline: &CropTimeline,
    planting_date: NaiveDate,
    today: NaiveDate,
    used_default_timeline: bool,
) -> GrowthSnapshot {
    let stages = timeline.stages();
    let elapsed = elapsed_days(planting_date, today);
    let index = current_stage_index(stages, elapsed);
    let total = timeline.harvest_offset();

    let progress = stages
        .iter()
        .enumerate()
        .map(|(i, stage)| StageProgress {
            name: stage.name.clone(),
            offset_days: stage.offset_days,
            description: stage.description.clone(),
            status: stage_status(stages, i, elapsed),
        })
        .collect();

    GrowthSnapshot {
        crop_type: timeline.crop_type,
        planting_date,
        today,
        elapsed_days: elapsed,
        current_stage_index: index,
        current_stage: stages
            .get(index)
            .map(|stage| stage.name.clone())
            .unwrap_or_default(),
        stages: progress,
        total_lifecycle_days: total,
        progress_percent: progress_percentage(total, elapsed),
        days_remaining: days_remaining(total, elapsed),
        expected_harvest_date: planting_date
            .checked_add_days(Days::new(u64::from(total)))
            .unwrap_or(NaiveDate::MAX),
        used_default_timeline,
    }
}

/// Convenience for callers that only hold a crop type
pub fn total_days_for(table: &TimelineTable, crop: CropType) -> u32 {
    table.timeline(crop).harvest_offset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn wheat() -> Vec<StageDefinition> {
        TimelineTable::builtin()
            .timeline(CropType::Wheat)
            .stages()
            .to_vec()
    }

    #[test]
    fn test_elapsed_days_is_zero_on_planting_day() {
        let d = date("2024-03-01");
        assert_eq!(elapsed_days(d, d), 0);
    }

    #[test]
    fn test_elapsed_days_across_month_and_leap_day() {
        assert_eq!(elapsed_days(date("2024-02-28"), date("2024-03-01")), 2);
        assert_eq!(elapsed_days(date("2023-12-31"), date("2024-12-31")), 366);
    }

    #[test]
    fn test_elapsed_days_negative_for_future_planting() {
        assert_eq!(elapsed_days(date("2024-03-06"), date("2024-03-01")), -5);
    }

    #[test]
    fn test_wheat_day_45_is_tillering() {
        let stages = wheat();
        let index = current_stage_index(&stages, 45);
        assert_eq!(index, 2);
        assert_eq!(stages[index].name, "Tillering");
        assert!(is_current_stage(&stages, index, 45));
    }

    #[test]
    fn test_stage_starts_exactly_at_its_offset() {
        let stages = wheat();
        assert_eq!(current_stage_index(&stages, 29), 1);
        assert_eq!(current_stage_index(&stages, 30), 2);
        assert!(is_current_stage(&stages, 2, 30));
        assert!(!is_current_stage(&stages, 1, 30));
    }

    #[test]
    fn test_planting_day_is_first_stage() {
        let stages = wheat();
        assert_eq!(current_stage_index(&stages, 0), 0);
        assert!(is_current_stage(&stages, 0, 0));
    }

    #[test]
    fn test_future_planting_clamps_to_first_stage() {
        let stages = wheat();
        assert_eq!(current_stage_index(&stages, -5), 0);
        assert!(is_current_stage(&stages, 0, -5));
        assert_eq!(progress_percentage(120, -5), Decimal::ZERO);
        assert_eq!(days_remaining(120, -5), 120);
    }

    #[test]
    fn test_far_past_harvest_holds_terminal_stage() {
        let stages = wheat();
        let index = current_stage_index(&stages, 500);
        assert_eq!(stages[index].name, "Harvest");
        assert!(is_current_stage(&stages, index, 500));
        assert_eq!(progress_percentage(120, 500), Decimal::from(100));
        assert_eq!(days_remaining(120, 500), 0);
    }

    #[test]
    fn test_harvest_day_completes_progress() {
        assert_eq!(progress_percentage(120, 120), Decimal::from(100));
        assert_eq!(days_remaining(120, 120), 0);
    }

    #[test]
    fn test_progress_is_rounded_to_two_places() {
        assert_eq!(progress_percentage(120, 45), Decimal::new(3750, 2));
        assert_eq!(progress_percentage(90, 1), Decimal::new(111, 2));
    }

    #[test]
    fn test_zero_length_lifecycle() {
        assert_eq!(progress_percentage(0, 0), Decimal::from(100));
        assert_eq!(progress_percentage(0, -1), Decimal::ZERO);
        assert_eq!(days_remaining(0, 10), 0);
    }

    #[test]
    fn test_out_of_range_index_is_never_current() {
        let stages = wheat();
        assert!(!is_current_stage(&stages, stages.len(), 500));
        assert_eq!(stage_status(&stages, stages.len(), 500), StageStatus::Upcoming);
    }

    #[test]
    fn test_duplicate_offsets_pick_furthest_stage() {
        let stages = vec![
            StageDefinition::new("A", 0, ""),
            StageDefinition::new("B", 10, ""),
            StageDefinition::new("C", 10, ""),
            StageDefinition::new("Harvest", 20, ""),
        ];
        assert_eq!(current_stage_index(&stages, 10), 2);
        assert!(is_current_stage(&stages, 2, 10));
        assert!(!is_current_stage(&stages, 1, 10));
    }

    #[test]
    fn test_empty_timeline_resolves_to_zero() {
        assert_eq!(current_stage_index(&[], 10), 0);
        assert!(!is_current_stage(&[], 0, 10));
    }

    #[test]
    fn test_stage_statuses_on_day_45() {
        let stages = wheat();
        let statuses: Vec<StageStatus> = (0..stages.len())
            .map(|i| stage_status(&stages, i, 45))
            .collect();
        assert_eq!(
            statuses,
            vec![
                StageStatus::Completed,
                StageStatus::Completed,
                StageStatus::Current,
                StageStatus::Upcoming,
                StageStatus::Upcoming,
                StageStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn test_resolve_growth_snapshot() {
        let table = TimelineTable::builtin();
        let profile = CropProfile::new(CropType::Wheat, date("2024-03-01"));
        let snapshot = resolve_growth(&table, &profile, date("2024-04-15"));

        assert_eq!(snapshot.elapsed_days, 45);
        assert_eq!(snapshot.current_stage, "Tillering");
        assert_eq!(snapshot.current_stage_index, 2);
        assert_eq!(snapshot.total_lifecycle_days, 120);
        assert_eq!(snapshot.days_remaining, 75);
        assert_eq!(snapshot.expected_harvest_date, date("2024-06-29"));
        assert!(!snapshot.used_default_timeline);
        assert!(!snapshot.is_harvest_ready());
    }

    #[test]
    fn test_resolve_unknown_crop_uses_wheat() {
        let table = TimelineTable::builtin();
        let snapshot =
            resolve_growth_for_id(&table, "banana", date("2024-03-01"), date("2024-04-15"));
        assert!(snapshot.used_default_timeline);
        assert_eq!(snapshot.crop_type, CropType::Wheat);
        assert_eq!(snapshot.current_stage, "Tillering");
    }

    #[test]
    fn test_total_days_for_each_crop() {
        let table = TimelineTable::builtin();
        assert_eq!(total_days_for(&table, CropType::Rice), 150);
        assert_eq!(total_days_for(&table, CropType::Tomato), 80);
    }

    fn crop_strategy() -> impl Strategy<Value = CropType> {
        prop::sample::select(CropType::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_stage_index_is_monotonic(crop in crop_strategy(), a in -400i64..1000, b in -400i64..1000) {
            let table = TimelineTable::builtin();
            let stages = table.timeline(crop).stages();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(current_stage_index(stages, lo) <= current_stage_index(stages, hi));
        }

        #[test]
        fn prop_progress_within_bounds(total in 0u32..400, elapsed in any::<i64>()) {
            let pct = progress_percentage(total, elapsed);
            prop_assert!(pct >= Decimal::ZERO);
            prop_assert!(pct <= Decimal::from(100));
        }

        #[test]
        fn prop_days_remaining_non_negative(total in any::<u32>(), elapsed in any::<i64>()) {
            prop_assert!(days_remaining(total, elapsed) >= 0);
        }

        #[test]
        fn prop_exactly_one_current_stage(crop in crop_strategy(), elapsed in -400i64..1000) {
            let table = TimelineTable::builtin();
            let stages = table.timeline(crop).stages();
            let current = (0..stages.len())
                .filter(|i| is_current_stage(stages, *i, elapsed))
                .count();
            prop_assert_eq!(current, 1);
        }
    }
}
