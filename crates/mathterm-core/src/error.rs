use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("answer input closed")]
    InputClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;

/// A reply that could not be read as an answer to the current question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedAnswer {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("row {row} must hold exactly 2 integers, got {found:?}")]
    BadRow { row: usize, found: String },

    #[error("expected a single value, got matrix rows")]
    UnexpectedRows,

    #[error("expected two matrix rows, got a single line")]
    MissingRows,
}
