//! sonv-core
//!
//! Pure domain types for the SONV-112 questionnaire and the share-code codec.
//! Knows the question count and the rating range, nothing about scales or
//! their content; that lives in `sonv-instruments`.

pub mod codec;
pub mod error;
pub mod models;

/// Number of questions in the instrument. Frozen: share codes depend on it.
pub const QUESTION_COUNT: usize = 112;
