//! Typed parsing of raw provider rows at the data-source boundary.
//!
//! The hosted store returns loosely-typed JSON rows. Everything past this
//! module works with strongly-typed records: missing string fields become
//! empty strings, missing or malformed numeric fields become `None`
//! (treated as 0 by engine math), and service flags accept the dataset's
//! "Yes"/"No" strings as well as real booleans.

use serde_json::Value;
use tracing::warn;

use carelens_core::models::provider::{HomeHealthAgency, NursingHome};

use crate::error::DirectoryError;

/// Parse a dataset payload into typed agency records.
pub fn parse_agencies(payload: &Value) -> Result<Vec<HomeHealthAgency>, DirectoryError> {
    let rows = payload.as_array().ok_or(DirectoryError::NotAnArray)?;
    Ok(rows.iter().filter_map(parse_agency).collect())
}

/// Parse a dataset payload into typed nursing-home records.
pub fn parse_nursing_homes(payload: &Value) -> Result<Vec<NursingHome>, DirectoryError> {
    let rows = payload.as_array().ok_or(DirectoryError::NotAnArray)?;
    Ok(rows.iter().filter_map(parse_nursing_home).collect())
}

fn parse_agency(row: &Value) -> Option<HomeHealthAgency> {
    if !row.is_object() {
        warn!("skipping non-object agency row");
        return None;
    }

    Some(HomeHealthAgency {
        id: text(row, "cms_certification_number"),
        name: text(row, "provider_name"),
        address: text(row, "address"),
        city: text(row, "city"),
        state: text(row, "state"),
        zip: text(row, "zip_code"),
        phone: text(row, "telephone_number"),

        offers_nursing: flag(row, "offers_nursing_care_services"),
        offers_physical_therapy: flag(row, "offers_physical_therapy_services"),
        offers_occupational_therapy: flag(row, "offers_occupational_therapy_services"),
        offers_speech_pathology: flag(row, "offers_speech_pathology_services"),
        offers_medical_social: flag(row, "offers_medical_social_services"),
        offers_home_health_aide: flag(row, "offers_home_health_aide_services"),

        quality_rating: number(row, "quality_of_patient_care_star_rating"),
        better_walking_moving: number(row, "how_often_patients_got_better_at_walking_or_moving_around"),
        better_bed_transfer: number(row, "how_often_patients_got_better_at_getting_in_and_out_of_bed"),
        better_bathing: number(row, "how_often_patients_got_better_at_bathing"),
        better_breathing: number(row, "how_often_patients_breathing_improved"),
        timely_care: number(row, "how_often_the_home_health_team_began_their_patients_care_in_a_timely_manner"),
    })
}

fn parse_nursing_home(row: &Value) -> Option<NursingHome> {
    if !row.is_object() {
        warn!("skipping non-object nursing home row");
        return None;
    }

    Some(NursingHome {
        id: text(row, "cms_certification_number"),
        name: text(row, "provider_name"),
        address: text(row, "provider_address"),
        city: text(row, "city_town"),
        state: text(row, "state"),
        zip: text(row, "zip_code"),
        phone: text(row, "telephone_number"),

        bed_count: number(row, "number_of_certified_beds").map(|n| n as u32),
        staffing_hours: number(row, "adjusted_total_nurse_staffing_hours_per_resident_per_day"),
        turnover_rate: number(row, "total_nursing_staff_turnover"),
        total_fines: number(row, "total_amount_of_fines_in_dollars"),

        overall_rating: number(row, "overall_rating"),
        health_inspection_rating: number(row, "health_inspection_rating"),
        staffing_rating: number(row, "staffing_rating"),
        quality_measure_rating: number(row, "qm_rating"),
    })
}

/// A string field; missing or non-string values default to empty.
fn text(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// A numeric field. Accepts JSON numbers and numeric strings; anything
/// else is `None`. Malformed numeric strings default rather than
/// propagate.
fn number(row: &Value, key: &str) -> Option<f64> {
    match row.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!(key, value = %trimmed, "malformed numeric field, defaulting");
                    None
                }
            }
        }
        _ => None,
    }
}

/// A boolean-like service flag: true booleans, or "Yes"/"True" strings
/// in any casing.
fn flag(row: &Value, key: &str) -> bool {
    match row.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}
