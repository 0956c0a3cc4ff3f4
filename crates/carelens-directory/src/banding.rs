//! Median-relative performance banding.
//!
//! A record's metric is classified by its ratio to the national median
//! against an ordered cutoff table. The two provider families carry
//! distinct cutoff sets on purpose; unifying them would silently
//! reclassify records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Performance band for one metric relative to its national median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PerformanceBand {
    /// Above median / strong.
    Excellent,
    /// At median / good.
    Good,
    /// Below median / fair.
    Fair,
    /// Well below median / poor.
    Poor,
    /// Median is zero and the ratio rule cannot apply.
    NoData,
}

impl PerformanceBand {
    /// Display label used in the quality narrative.
    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "Excellent",
            PerformanceBand::Good => "Good",
            PerformanceBand::Fair => "Fair",
            PerformanceBand::Poor => "Poor",
            PerformanceBand::NoData => "No data",
        }
    }
}

/// Whether a high value is desirable for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricPolarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// A configurable banding rule: ordered (ratio, band) cutoffs plus an
/// optional zero-value override. One policy per metric family.
#[derive(Debug, Clone, Copy)]
pub struct BandingPolicy {
    /// For `HigherIsBetter`: descending ratios, matched by `value >= median * ratio`.
    /// For `LowerIsBetter`: ascending ratios, matched by `value <= median * ratio`.
    pub cutoffs: &'static [(f64, PerformanceBand)],
    pub polarity: MetricPolarity,
    /// When set, a value of exactly 0 is the best band unconditionally —
    /// the ratio rule breaks down against a median that may itself be 0.
    pub zero_is_best: bool,
}

/// Home-health percentage metrics: 1.10 / 0.90 / 0.70 of median.
pub const HOME_HEALTH: BandingPolicy = BandingPolicy {
    cutoffs: &[
        (1.10, PerformanceBand::Excellent),
        (0.90, PerformanceBand::Good),
        (0.70, PerformanceBand::Fair),
    ],
    polarity: MetricPolarity::HigherIsBetter,
    zero_is_best: false,
};

/// Nursing-home rating and staffing metrics: 1.15 / 0.95 / 0.80 of median.
pub const NURSING_HOME: BandingPolicy = BandingPolicy {
    cutoffs: &[
        (1.15, PerformanceBand::Excellent),
        (0.95, PerformanceBand::Good),
        (0.80, PerformanceBand::Fair),
    ],
    polarity: MetricPolarity::HigherIsBetter,
    zero_is_best: false,
};

/// Nursing-home fines: bad when high, and zero fines is its own best band.
/// Cutoffs mirror the rating set around the median so a value equal to
/// the median still lands in the second band.
pub const NURSING_HOME_FINES: BandingPolicy = BandingPolicy {
    cutoffs: &[
        (0.80, PerformanceBand::Excellent),
        (1.05, PerformanceBand::Good),
        (1.20, PerformanceBand::Fair),
    ],
    polarity: MetricPolarity::LowerIsBetter,
    zero_is_best: true,
};

/// Nursing-home staff turnover: bad when high, but 0% turnover carries no
/// special meaning beyond the ratio rule.
pub const NURSING_HOME_TURNOVER: BandingPolicy = BandingPolicy {
    cutoffs: &[
        (0.80, PerformanceBand::Excellent),
        (1.05, PerformanceBand::Good),
        (1.20, PerformanceBand::Fair),
    ],
    polarity: MetricPolarity::LowerIsBetter,
    zero_is_best: false,
};

impl BandingPolicy {
    /// Classify a metric value against the national median.
    ///
    /// A median of 0 cannot feed the ratio rule (every positive value
    /// would land in an extreme band), so it is special-cased: for
    /// good-when-high metrics there is nothing to compare against
    /// (`NoData`); for bad-when-high metrics a 0 value ties the
    /// population's best and anything positive is worse than everyone.
    pub fn classify(&self, value: f64, median: f64) -> PerformanceBand {
        if self.zero_is_best && value == 0.0 {
            return PerformanceBand::Excellent;
        }

        if median <= 0.0 {
            return match self.polarity {
                MetricPolarity::HigherIsBetter => PerformanceBand::NoData,
                MetricPolarity::LowerIsBetter => {
                    if value <= 0.0 {
                        PerformanceBand::Excellent
                    } else {
                        PerformanceBand::Poor
                    }
                }
            };
        }

        for &(ratio, band) in self.cutoffs {
            let matched = match self.polarity {
                MetricPolarity::HigherIsBetter => value >= median * ratio,
                MetricPolarity::LowerIsBetter => value <= median * ratio,
            };
            if matched {
                return band;
            }
        }
        PerformanceBand::Poor
    }

    /// Classify an optional metric, reading absence as 0.
    pub fn classify_opt(&self, value: Option<f64>, median: f64) -> PerformanceBand {
        self.classify(value.unwrap_or(0.0), median)
    }
}
