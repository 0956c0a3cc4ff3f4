use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::tier::{ScoreResult, TierGuidance};

/// One answered question echoed into the exported report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionResponse {
    pub question_id: String,
    pub prompt: String,
    pub answer_label: String,
    pub weight: u32,
}

/// The full payload handed to the persistence sink after a completed
/// screening. Every field is addressable by name in a report template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningReport {
    /// Opaque collision-resistant token (time component + random component).
    pub token: String,
    pub generated_at: jiff::Timestamp,
    pub result: ScoreResult,
    pub guidance: TierGuidance,
    pub responses: Vec<QuestionResponse>,
    /// Optional model-generated narrative; absent when the text-generation
    /// boundary failed or returned nothing.
    pub narrative: Option<String>,
}
