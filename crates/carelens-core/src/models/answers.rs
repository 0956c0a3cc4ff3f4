use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::Question;

/// The user's in-progress or completed set of question-to-option choices.
///
/// Grows one entry at a time as the user moves through the questionnaire.
/// A question is either answered (exactly one value) or absent — entries
/// are never null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet {
    choices: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the chosen option value for a question.
    pub fn answer(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.choices.insert(question_id.into(), value.into());
    }

    /// The chosen option value for a question, if answered.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.choices.get(question_id).map(String::as_str)
    }

    /// Remove a recorded answer (e.g. when the user steps back).
    pub fn clear(&mut self, question_id: &str) {
        self.choices.remove(question_id);
    }

    /// Iterate recorded (question id, chosen value) pairs in id order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(q, v)| (q.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// True when every question in `questions` has a recorded choice.
    ///
    /// Scoring is lenient about missing answers, so callers must check
    /// completeness here before treating a score as final.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.choices.contains_key(&q.id))
    }
}
