//! Compact share codes.
//!
//! An answer set is serialized as exactly [`QUESTION_COUNT`] symbols, one per
//! question id in ascending order. The digits `0`–`4` carry the answer and
//! [`UNANSWERED`] marks a skipped question. Every symbol is URL-safe, so the
//! code can sit in a link fragment after [`SHARE_MARKER`].
//!
//! The alphabet and the id order are frozen. Changing either makes previously
//! shared links decode to different answers without any error.

use tracing::debug;

use crate::error::{CoreError, EncodingError};
use crate::models::answer::{AnswerMap, AnswerValue, QuestionId};
use crate::QUESTION_COUNT;

/// Symbol for an unanswered question.
pub const UNANSWERED: char = '-';

/// Prefix of the link fragment that carries a share code.
pub const SHARE_MARKER: &str = "r=";

fn symbol(value: AnswerValue) -> char {
    char::from(b'0' + value.get())
}

fn value(symbol: u8) -> Option<AnswerValue> {
    match symbol {
        b'0'..=b'4' => AnswerValue::new(i64::from(symbol - b'0')).ok(),
        _ => None,
    }
}

/// Encode answers into a share code of exactly [`QUESTION_COUNT`] symbols.
///
/// Ids outside the instrument have no slot in the code and are dropped.
pub fn encode(answers: &AnswerMap) -> String {
    (0..QUESTION_COUNT as QuestionId)
        .map(|id| answers.get(id).map_or(UNANSWERED, symbol))
        .collect()
}

/// Decode a share code. Any malformed code is rejected as a whole.
pub fn decode(code: &str) -> Result<AnswerMap, CoreError> {
    let actual = code.chars().count();
    if actual != QUESTION_COUNT {
        debug!(actual, "rejecting share code of wrong length");
        return Err(EncodingError::WrongLength {
            expected: QUESTION_COUNT,
            actual,
        }
        .into());
    }

    let mut answers = AnswerMap::new();
    for (position, ch) in code.chars().enumerate() {
        if ch == UNANSWERED {
            continue;
        }
        let decoded = u8::try_from(ch).ok().and_then(value);
        match decoded {
            Some(answer) => {
                answers.set(position as QuestionId, answer);
            }
            None => {
                debug!(position, symbol = %ch, "rejecting share code with unknown symbol");
                return Err(EncodingError::UnknownSymbol {
                    position,
                    symbol: ch,
                }
                .into());
            }
        }
    }
    Ok(answers)
}

/// Link fragment for an answer set, e.g. `r=0123-...`.
pub fn share_fragment(answers: &AnswerMap) -> String {
    format!("{SHARE_MARKER}{}", encode(answers))
}

/// Parse a link fragment produced by [`share_fragment`]. A leading `#` is
/// accepted so a raw `location.hash` can be passed through.
pub fn parse_fragment(fragment: &str) -> Result<AnswerMap, CoreError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let code = fragment
        .strip_prefix(SHARE_MARKER)
        .ok_or(EncodingError::MissingMarker {
            marker: SHARE_MARKER,
        })?;
    decode(code)
}
