//! Per-record quality assessment: each tracked metric banded against the
//! national median, feeding the provider detail narrative.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carelens_core::models::provider::{HomeHealthAgency, NursingHome};

use crate::banding::{self, PerformanceBand};
use crate::stats::{AgencyMedians, NursingHomeMedians};

/// Median-relative bands for one home-health agency.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgencyQuality {
    pub quality_rating: PerformanceBand,
    pub better_walking_moving: PerformanceBand,
    pub better_bed_transfer: PerformanceBand,
    pub better_bathing: PerformanceBand,
    pub better_breathing: PerformanceBand,
    pub timely_care: PerformanceBand,
}

impl AgencyQuality {
    pub fn assess(agency: &HomeHealthAgency, medians: &AgencyMedians) -> Self {
        let policy = banding::HOME_HEALTH;
        Self {
            quality_rating: policy.classify_opt(agency.quality_rating, medians.quality_rating),
            better_walking_moving: policy
                .classify_opt(agency.better_walking_moving, medians.better_walking_moving),
            better_bed_transfer: policy
                .classify_opt(agency.better_bed_transfer, medians.better_bed_transfer),
            better_bathing: policy.classify_opt(agency.better_bathing, medians.better_bathing),
            better_breathing: policy
                .classify_opt(agency.better_breathing, medians.better_breathing),
            timely_care: policy.classify_opt(agency.timely_care, medians.timely_care),
        }
    }
}

/// Median-relative bands for one nursing home. Ratings and staffing use
/// the nursing-home cutoffs; turnover and fines are bad-when-high, and
/// zero fines is unconditionally the best band.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NursingHomeQuality {
    pub overall_rating: PerformanceBand,
    pub health_inspection_rating: PerformanceBand,
    pub staffing_rating: PerformanceBand,
    pub quality_measure_rating: PerformanceBand,
    pub staffing_hours: PerformanceBand,
    pub turnover_rate: PerformanceBand,
    pub total_fines: PerformanceBand,
}

impl NursingHomeQuality {
    pub fn assess(home: &NursingHome, medians: &NursingHomeMedians) -> Self {
        let rated = banding::NURSING_HOME;
        Self {
            overall_rating: rated.classify_opt(home.overall_rating, medians.overall_rating),
            health_inspection_rating: rated
                .classify_opt(home.health_inspection_rating, medians.health_inspection_rating),
            staffing_rating: rated.classify_opt(home.staffing_rating, medians.staffing_rating),
            quality_measure_rating: rated
                .classify_opt(home.quality_measure_rating, medians.quality_measure_rating),
            staffing_hours: rated.classify_opt(home.staffing_hours, medians.staffing_hours),
            turnover_rate: banding::NURSING_HOME_TURNOVER
                .classify_opt(home.turnover_rate, medians.turnover_rate),
            total_fines: banding::NURSING_HOME_FINES
                .classify_opt(home.total_fines, medians.total_fines),
        }
    }
}
