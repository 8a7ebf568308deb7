use thiserror::Error;

use crate::models::answer::AnswerValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(
        "answer value {value}{} is outside the rating range {}..={}",
        question_suffix(.question_id),
        AnswerValue::MIN,
        AnswerValue::MAX
    )]
    InvalidAnswerValue { question_id: Option<u32>, value: i64 },

    #[error("invalid share code: {0}")]
    InvalidEncoding(#[from] EncodingError),
}

/// Why a share code was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("expected {expected} symbols, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { position: usize, symbol: char },

    #[error("fragment does not start with the '{marker}' marker")]
    MissingMarker { marker: &'static str },
}

fn question_suffix(question_id: &Option<u32>) -> String {
    match question_id {
        Some(id) => format!(" for question {id}"),
        None => String::new(),
    }
}
