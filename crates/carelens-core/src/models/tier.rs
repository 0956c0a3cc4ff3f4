use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity band for a completed screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConcernTier {
    Low,
    Mild,
    Moderate,
    High,
}

/// Static narrative bundle bound to a tier: labels, guidance text, and
/// ordered next steps. Selected once per completed answer set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierGuidance {
    pub severity: String,
    pub urgency: String,
    pub color: String,
    pub message: String,
    pub recommendation: String,
    pub next_steps: Vec<String>,
}

/// A scored screening outcome. Recomputed on demand from the answer set
/// that produced it — never cached independently.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total: u32,
    pub max_possible: u32,
    pub tier: ConcernTier,
}
