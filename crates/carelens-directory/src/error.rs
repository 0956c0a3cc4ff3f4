use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("dataset payload is not an array")]
    NotAnArray,
}
