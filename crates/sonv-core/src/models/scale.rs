use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::{AnswerValue, QuestionId};

/// Scale identifiers. Serialized as the single-letter codes used on the
/// answer sheet; declaration order is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScaleKey {
    #[serde(rename = "A")]
    Inattention,
    #[serde(rename = "B")]
    Hyperactivity,
    #[serde(rename = "C")]
    EmotionalDysregulation,
    #[serde(rename = "D")]
    SocialCommunication,
    #[serde(rename = "E")]
    RepetitivePatterns,
    #[serde(rename = "F")]
    Sensory,
    #[serde(rename = "G")]
    Camouflaging,
    #[serde(rename = "H")]
    Dyslexia,
    #[serde(rename = "I")]
    Dyscalculia,
    #[serde(rename = "J")]
    Dyspraxia,
    /// Socially desirable responding.
    #[serde(rename = "L")]
    SocialDesirability,
    /// Random or inattentive responding.
    #[serde(rename = "M")]
    AtypicalResponding,
    /// Denial of common everyday difficulties.
    #[serde(rename = "K")]
    Defensiveness,
    /// Agreeing with contradictory statements.
    #[serde(rename = "N")]
    Acquiescence,
}

impl ScaleKey {
    pub const ALL: [ScaleKey; 14] = [
        ScaleKey::Inattention,
        ScaleKey::Hyperactivity,
        ScaleKey::EmotionalDysregulation,
        ScaleKey::SocialCommunication,
        ScaleKey::RepetitivePatterns,
        ScaleKey::Sensory,
        ScaleKey::Camouflaging,
        ScaleKey::Dyslexia,
        ScaleKey::Dyscalculia,
        ScaleKey::Dyspraxia,
        ScaleKey::SocialDesirability,
        ScaleKey::AtypicalResponding,
        ScaleKey::Defensiveness,
        ScaleKey::Acquiescence,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ScaleKey::Inattention => "A",
            ScaleKey::Hyperactivity => "B",
            ScaleKey::EmotionalDysregulation => "C",
            ScaleKey::SocialCommunication => "D",
            ScaleKey::RepetitivePatterns => "E",
            ScaleKey::Sensory => "F",
            ScaleKey::Camouflaging => "G",
            ScaleKey::Dyslexia => "H",
            ScaleKey::Dyscalculia => "I",
            ScaleKey::Dyspraxia => "J",
            ScaleKey::SocialDesirability => "L",
            ScaleKey::AtypicalResponding => "M",
            ScaleKey::Defensiveness => "K",
            ScaleKey::Acquiescence => "N",
        }
    }

    /// Control scales detect unreliable responding and never feed the
    /// interpretation directly.
    pub fn is_control(self) -> bool {
        matches!(
            self,
            ScaleKey::SocialDesirability
                | ScaleKey::AtypicalResponding
                | ScaleKey::Defensiveness
                | ScaleKey::Acquiescence
        )
    }
}

impl fmt::Display for ScaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A percentage band of a scale, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Zone {
    /// Stable identifier, also used as a style hook (e.g. "elevated").
    pub key: String,
    pub low: u8,
    pub high: u8,
    pub label: String,
    pub icon: String,
    /// Colour token for presentation layers.
    pub color: String,
}

impl Zone {
    pub fn contains(&self, percentage: u8) -> bool {
        self.low <= percentage && percentage <= self.high
    }
}

/// One answered question of a scale, as shown in "your highest answers".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDetail {
    pub question_id: QuestionId,
    pub text: String,
    /// Raw answer, before any reverse keying.
    pub answer: AnswerValue,
}

/// Aggregated score of a scale or subscale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleResult {
    /// Scale code ("A") or subscale code ("A1").
    pub key: String,
    pub name: String,
    pub sum: u32,
    pub max: u32,
    /// `round(100 * sum / max)`, always within 0..=100.
    pub percentage: u8,
    pub zone: Zone,
    /// Empty for subscales and for scales without subscales.
    pub subscales: BTreeMap<String, ScaleResult>,
    /// Answered questions, highest raw answer first.
    pub question_details: Vec<QuestionDetail>,
}

/// Results for every scale, in registry order.
pub type ScaleResults = BTreeMap<ScaleKey, ScaleResult>;
