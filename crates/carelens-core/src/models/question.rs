use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The cognitive area a screening question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionCategory {
    Memory,
    Judgment,
    Function,
    Orientation,
    Language,
}

/// One selectable response for a question.
///
/// `value` is unique within its question; `weight` is the score
/// contribution when this option is chosen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    pub weight: u32,
}

/// A screening question, defined at build time. Not user-editable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub category: QuestionCategory,
    pub prompt: String,
    pub help_text: Option<String>,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Look up an option by its value token.
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// The highest weight among this question's options.
    pub fn max_weight(&self) -> u32 {
        self.options.iter().map(|o| o.weight).max().unwrap_or(0)
    }
}
