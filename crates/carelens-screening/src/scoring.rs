//! Scoring and tier classification for the screening questionnaire.

use carelens_core::models::answers::AnswerSet;
use carelens_core::models::question::Question;
use carelens_core::models::tier::{ConcernTier, ScoreResult};
use tracing::warn;

use crate::error::ScreeningError;

/// Sum the weights of the chosen options across the question list.
///
/// Deliberately lenient: an unanswered question, an unknown question ID,
/// or an unknown option value contributes 0 rather than failing. Callers
/// must gate on [`AnswerSet::is_complete`] before treating the total as
/// final, or an incomplete submission reads as a low-concern result.
pub fn score(answers: &AnswerSet, questions: &[Question]) -> u32 {
    questions
        .iter()
        .map(|q| {
            answers
                .get(&q.id)
                .and_then(|value| q.option(value))
                .map(|o| o.weight)
                .unwrap_or(0)
        })
        .sum()
}

/// Map a total score onto a concern tier.
///
/// Ordered threshold bands, highest first, first match wins.
pub fn classify(total: u32) -> ConcernTier {
    if total >= 10 {
        ConcernTier::High
    } else if total >= 6 {
        ConcernTier::Moderate
    } else if total >= 3 {
        ConcernTier::Mild
    } else {
        ConcernTier::Low
    }
}

/// The highest achievable total: per question, the maximum option weight.
/// Display context only — classification never uses it.
pub fn max_possible_score(questions: &[Question]) -> u32 {
    questions.iter().map(Question::max_weight).sum()
}

/// Strict pre-submission check, the counterpart to the lenient `score`.
///
/// Rejects unknown question IDs, unknown option values, and incomplete
/// answer sets. Run this before a result is finalized or exported.
pub fn validate(answers: &AnswerSet, questions: &[Question]) -> Result<(), ScreeningError> {
    for (question_id, value) in answers.entries() {
        let question = questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| ScreeningError::UnknownQuestion(question_id.to_string()))?;
        if question.option(value).is_none() {
            return Err(ScreeningError::UnknownOption {
                question_id: question_id.to_string(),
                value: value.to_string(),
            });
        }
    }

    if !answers.is_complete(questions) {
        return Err(ScreeningError::Incomplete {
            answered: answers.len(),
            expected: questions.len(),
        });
    }
    Ok(())
}

/// Score and classify in one step.
///
/// Logs a warning when handed an incomplete answer set; the result is
/// still computed (lenient contract) but should not be shown as final.
pub fn evaluate(answers: &AnswerSet, questions: &[Question]) -> ScoreResult {
    if !answers.is_complete(questions) {
        warn!(
            answered = answers.len(),
            expected = questions.len(),
            "scoring an incomplete answer set"
        );
    }

    let total = score(answers, questions);
    ScoreResult {
        total,
        max_possible: max_possible_score(questions),
        tier: classify(total),
    }
}
