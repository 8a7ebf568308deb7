use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::QUESTION_COUNT;

/// Question identifier, `0..QUESTION_COUNT` for questions of the instrument.
pub type QuestionId = u32;

/// A single rating on the 0–4 frequency/agreement scale.
///
/// Only constructible through validated paths, so every value held by an
/// [`AnswerMap`] is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export, as = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;

    /// Every valid value, lowest first.
    pub const ALL: [AnswerValue; 5] = [
        AnswerValue(0),
        AnswerValue(1),
        AnswerValue(2),
        AnswerValue(3),
        AnswerValue(4),
    ];

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::InvalidAnswerValue {
                question_id: None,
                value,
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The value as scored on a reverse-keyed item.
    pub fn reversed(self) -> Self {
        Self(Self::MAX - self.0)
    }
}

impl TryFrom<i64> for AnswerValue {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sparse answers keyed by question id. Missing ids are unanswered.
///
/// Deserializes from a JSON object such as `{"0": 3, "17": 0}`; any value
/// outside the rating range fails the whole map with
/// [`CoreError::InvalidAnswerValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<QuestionId, i64>")]
pub struct AnswerMap(BTreeMap<QuestionId, AnswerValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from unvalidated `(id, value)` pairs.
    pub fn from_raw<I>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (QuestionId, i64)>,
    {
        let mut map = Self::new();
        for (id, value) in pairs {
            map.insert(id, value)?;
        }
        Ok(map)
    }

    /// Validate and store a raw value, returning the previous answer if any.
    pub fn insert(&mut self, id: QuestionId, value: i64) -> Result<Option<AnswerValue>, CoreError> {
        let value = AnswerValue::new(value).map_err(|_| CoreError::InvalidAnswerValue {
            question_id: Some(id),
            value,
        })?;
        Ok(self.0.insert(id, value))
    }

    pub fn set(&mut self, id: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.0.insert(id, value)
    }

    pub fn get(&self, id: QuestionId) -> Option<AnswerValue> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }

    /// How much of the instrument has been answered. Ids outside the
    /// instrument are not counted.
    pub fn completion(&self) -> Completion {
        let unanswered: Vec<QuestionId> = (0..QUESTION_COUNT as QuestionId)
            .filter(|id| !self.0.contains_key(id))
            .collect();
        Completion {
            answered: QUESTION_COUNT - unanswered.len(),
            total: QUESTION_COUNT,
            unanswered,
        }
    }
}

impl TryFrom<BTreeMap<QuestionId, i64>> for AnswerMap {
    type Error = CoreError;

    fn try_from(raw: BTreeMap<QuestionId, i64>) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Progress through the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    /// Unanswered ids in ascending order; these score as 0.
    pub unanswered: Vec<QuestionId>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.unanswered.is_empty()
    }
}
