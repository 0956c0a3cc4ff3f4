//! National medians per quality metric.
//!
//! Each metric's median is computed independently from the full loaded
//! collection, once per load. Absent metric values count as 0, matching
//! how the engines read them everywhere else.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carelens_core::models::provider::{HomeHealthAgency, NursingHome};

/// Standard median: sort ascending, middle element, or the mean of the
/// two middle elements for even-length input. Empty input yields 0.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// National medians for the home-health agency metrics.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgencyMedians {
    pub quality_rating: f64,
    pub better_walking_moving: f64,
    pub better_bed_transfer: f64,
    pub better_bathing: f64,
    pub better_breathing: f64,
    pub timely_care: f64,
}

impl AgencyMedians {
    pub fn from_records(records: &[HomeHealthAgency]) -> Self {
        Self {
            quality_rating: metric_median(records, |a| a.quality_rating),
            better_walking_moving: metric_median(records, |a| a.better_walking_moving),
            better_bed_transfer: metric_median(records, |a| a.better_bed_transfer),
            better_bathing: metric_median(records, |a| a.better_bathing),
            better_breathing: metric_median(records, |a| a.better_breathing),
            timely_care: metric_median(records, |a| a.timely_care),
        }
    }
}

/// National medians for the nursing-home metrics.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NursingHomeMedians {
    pub overall_rating: f64,
    pub health_inspection_rating: f64,
    pub staffing_rating: f64,
    pub quality_measure_rating: f64,
    pub staffing_hours: f64,
    pub turnover_rate: f64,
    pub total_fines: f64,
}

impl NursingHomeMedians {
    pub fn from_records(records: &[NursingHome]) -> Self {
        Self {
            overall_rating: metric_median(records, |h| h.overall_rating),
            health_inspection_rating: metric_median(records, |h| h.health_inspection_rating),
            staffing_rating: metric_median(records, |h| h.staffing_rating),
            quality_measure_rating: metric_median(records, |h| h.quality_measure_rating),
            staffing_hours: metric_median(records, |h| h.staffing_hours),
            turnover_rate: metric_median(records, |h| h.turnover_rate),
            total_fines: metric_median(records, |h| h.total_fines),
        }
    }
}

fn metric_median<T>(records: &[T], metric: impl Fn(&T) -> Option<f64>) -> f64 {
    let values: Vec<f64> = records.iter().map(|r| metric(r).unwrap_or(0.0)).collect();
    median(&values)
}
