use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("generation request failed: {0}")]
    Request(String),

    #[error("response parse error: {0}")]
    ResponseParse(String),
}
