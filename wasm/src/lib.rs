//! WebAssembly module for the FarmTracker application
//!
//! Provides client-side computation for:
//! - Crop options and growth timelines
//! - Growth stage resolution for the dashboard
//! - The canned plant assistant
//! - Profile form validation

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{assistant, growth};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

fn parse_date(value: &str) -> Result<NaiveDate, JsValue> {
    parse_planting_date(value).map_err(JsValue::from_str)
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Current instant from the browser clock
fn browser_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Today's date in the browser's local time zone
fn browser_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Browser clock returned an invalid date"))
}

/// Crop selector options as JSON
#[wasm_bindgen]
pub fn crop_options_json() -> Result<String, JsValue> {
    to_json(&CropInfo::all())
}

/// Timeline stages of a crop as JSON; unknown crops get the default timeline
#[wasm_bindgen]
pub fn crop_timeline_json(crop_type: &str) -> Result<String, JsValue> {
    let table = TimelineTable::builtin();
    let (timeline, fallback) = table.timeline_for(crop_type);
    if fallback {
        warn(&format!("Unknown crop '{}', using default timeline", crop_type));
    }
    to_json(timeline)
}

/// Resolve the growth snapshot for a crop planted on `planting_date`
///
/// `today` is an ISO date; when omitted the browser's local date is used.
#[wasm_bindgen]
pub fn resolve_growth_json(
    crop_type: &str,
    planting_date: &str,
    today: Option<String>,
) -> Result<String, JsValue> {
    let planting_date = parse_date(planting_date)?;
    let today = match today {
        Some(value) => parse_date(&value)?,
        None => browser_today()?,
    };

    let table = TimelineTable::builtin();
    let snapshot = growth::resolve_growth_for_id(&table, crop_type, planting_date, today);
    if snapshot.used_default_timeline {
        warn(&format!("Unknown crop '{}', using default timeline", crop_type));
    }
    to_json(&snapshot)
}

/// Days from planting to today (negative for a future planting date)
#[wasm_bindgen]
pub fn elapsed_days_between(planting_date: &str, today: &str) -> Result<i32, JsValue> {
    let days = growth::elapsed_days(parse_date(planting_date)?, parse_date(today)?);
    i32::try_from(days).map_err(|_| JsValue::from_str("Date range too large"))
}

/// Growth progress percentage for a crop on a given day
#[wasm_bindgen]
pub fn progress_percentage(crop_type: &str, elapsed_days: i32) -> f64 {
    let (crop, _) = CropType::resolve(crop_type);
    let total = growth::total_days_for(&TimelineTable::builtin(), crop);
    growth::progress_percentage(total, i64::from(elapsed_days))
        .to_f64()
        .unwrap_or(0.0)
}

/// Days left until harvest for a crop on a given day
#[wasm_bindgen]
pub fn days_remaining(crop_type: &str, elapsed_days: i32) -> i32 {
    let (crop, _) = CropType::resolve(crop_type);
    let total = growth::total_days_for(&TimelineTable::builtin(), crop);
    growth::days_remaining(total, i64::from(elapsed_days)) as i32
}

/// Validate a profile form submission; returns `{"field": ..., "message": ...}` on failure
#[wasm_bindgen]
pub fn validate_profile_json(profile_json: &str) -> Result<Option<String>, JsValue> {
    let input: ProfileInput = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))?;

    match validate_profile_input(&input, browser_today()?) {
        Ok(()) => Ok(None),
        Err((field, message)) => {
            to_json(&serde_json::json!({ "field": field, "message": message })).map(Some)
        }
    }
}

/// Opening assistant message as JSON
#[wasm_bindgen]
pub fn assistant_greeting() -> Result<String, JsValue> {
    to_json(&assistant::greeting(browser_now()))
}

/// Answer a chat message; `image` is a data URL from a file input
#[wasm_bindgen]
pub fn assistant_reply_json(
    text: Option<String>,
    image: Option<String>,
) -> Result<String, JsValue> {
    let request = AssistantRequest { text, image };
    let reply = assistant::respond(&request, browser_now())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&reply)
}
