use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("unknown option '{value}' for question '{question_id}'")]
    UnknownOption { question_id: String, value: String },

    #[error("incomplete answer set: {answered} of {expected} questions answered")]
    Incomplete { answered: usize, expected: usize },
}
