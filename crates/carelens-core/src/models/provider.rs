use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A home-health agency directory entry from the public dataset.
///
/// String fields default to empty when absent in the source row. Numeric
/// quality metrics stay `None` when absent or malformed, so "no data" is
/// distinguishable from a true zero; engine math treats `None` as 0.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HomeHealthAgency {
    /// CMS certification number.
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,

    pub offers_nursing: bool,
    pub offers_physical_therapy: bool,
    pub offers_occupational_therapy: bool,
    pub offers_speech_pathology: bool,
    pub offers_medical_social: bool,
    pub offers_home_health_aide: bool,

    /// 0–5 star quality rating.
    pub quality_rating: Option<f64>,
    /// 0–100 percentage-improvement metrics.
    pub better_walking_moving: Option<f64>,
    pub better_bed_transfer: Option<f64>,
    pub better_bathing: Option<f64>,
    pub better_breathing: Option<f64>,
    pub timely_care: Option<f64>,
}

/// A nursing-home directory entry from the public dataset.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NursingHome {
    /// CMS certification number.
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,

    pub bed_count: Option<u32>,
    /// Total nurse staffing hours per resident per day.
    pub staffing_hours: Option<f64>,
    /// Total nursing staff turnover, percent.
    pub turnover_rate: Option<f64>,
    /// Total amount of fines, dollars. Zero means no fines on record.
    pub total_fines: Option<f64>,

    /// 0–5 star ratings.
    pub overall_rating: Option<f64>,
    pub health_inspection_rating: Option<f64>,
    pub staffing_rating: Option<f64>,
    pub quality_measure_rating: Option<f64>,
}
