//! Prompt assembly for the narrative generation boundary.
//!
//! Builds a structured plain-text block from the screening outcome that
//! can be prepended to the remote service's system prompt. The block
//! carries only the computed result and guidance — never raw answers.

use carelens_core::models::tier::{ScoreResult, TierGuidance};

/// Build a structured summary block from a scored screening.
pub fn build_prompt(result: &ScoreResult, guidance: &TierGuidance) -> String {
    let mut block = String::from("<screening_summary>\n");

    block.push_str(&format!(
        "score: {} of {}\n",
        result.total, result.max_possible
    ));
    block.push_str(&format!("concern: {}\n", guidance.severity));
    block.push_str(&format!("urgency: {}\n", guidance.urgency));
    block.push_str(&format!("message: {}\n", guidance.message));
    block.push_str(&format!("recommendation: {}\n", guidance.recommendation));

    block.push_str("</screening_summary>\n\n");
    block.push_str(
        "Write a short, warm, plain-language summary of this screening result \
         for a family caregiver. Do not diagnose. Do not add new medical claims.",
    );
    block
}
