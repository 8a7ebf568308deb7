//! Static definition of the SONV-112 questionnaire: questions, scales,
//! subscales, zones and answer options.

mod questions;
mod scales;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sonv_core::models::answer::{AnswerValue, QuestionId};
use sonv_core::models::scale::{ScaleKey, Zone};
use sonv_core::QUESTION_COUNT;

use crate::error::InstrumentError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub scale: ScaleKey,
    /// Subscale key within `scale`, if the item belongs to one.
    pub subscale: Option<String>,
    pub text: String,
    /// Scored as `4 - answer`.
    pub reverse_scored: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleDefinition {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub key: ScaleKey,
    pub name: String,
    /// Compact label for charts.
    pub short_name: String,
    pub description: String,
    /// Instruments and criteria the items are modelled on.
    pub basis: String,
    pub max_score: u32,
    /// Ordered, contiguous bands covering 0..=100. Subscales share them.
    pub zones: Vec<Zone>,
    pub subscales: Vec<SubscaleDefinition>,
}

impl ScaleDefinition {
    pub fn zone_for(&self, percentage: u8) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.contains(percentage))
    }

    pub fn subscale(&self, key: &str) -> Option<&SubscaleDefinition> {
        self.subscales.iter().find(|s| s.key == key)
    }

    /// Every integer percentage must fall into exactly one zone.
    pub fn check_zones(&self) -> Result<(), InstrumentError> {
        for percentage in 0..=100u8 {
            match self.zones.iter().filter(|z| z.contains(percentage)).count() {
                1 => {}
                0 => {
                    return Err(InstrumentError::ZoneGap {
                        scale: self.key.code().to_string(),
                        percentage,
                    });
                }
                _ => {
                    return Err(InstrumentError::ZoneOverlap {
                        scale: self.key.code().to_string(),
                        percentage,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: AnswerValue,
    pub label: String,
}

/// The questionnaire definition. Built once and only read afterwards.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Registry {
    questions: Vec<Question>,
    scales: Vec<ScaleDefinition>,
    answer_options: Vec<AnswerOption>,
}

static STANDARD: LazyLock<Registry> = LazyLock::new(|| Registry {
    questions: questions::standard(),
    scales: scales::standard(),
    answer_options: standard_answer_options(),
});

impl Registry {
    /// Build a registry, rejecting any definition that breaks its invariants.
    pub fn new(
        questions: Vec<Question>,
        scales: Vec<ScaleDefinition>,
        answer_options: Vec<AnswerOption>,
    ) -> Result<Self, InstrumentError> {
        let registry = Self {
            questions,
            scales,
            answer_options,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// The built-in SONV-112 definition.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Scale definitions in registry order.
    pub fn scales(&self) -> &[ScaleDefinition] {
        &self.scales
    }

    pub fn scale(&self, key: ScaleKey) -> Option<&ScaleDefinition> {
        self.scales.iter().find(|s| s.key == key)
    }

    pub fn control_scales(&self) -> impl Iterator<Item = &ScaleDefinition> {
        self.scales.iter().filter(|s| s.key.is_control())
    }

    pub fn clinical_scales(&self) -> impl Iterator<Item = &ScaleDefinition> {
        self.scales.iter().filter(|s| !s.key.is_control())
    }

    /// Member questions of a scale, in id order.
    pub fn questions_in(&self, scale: ScaleKey) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.scale == scale)
    }

    pub fn answer_options(&self) -> &[AnswerOption] {
        &self.answer_options
    }

    /// Check the structural invariants: one entry per question id, every
    /// question in a defined scale and subscale, zones partitioning 0..=100,
    /// and declared maxima matching the items.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if self.questions.len() != QUESTION_COUNT {
            return Err(InstrumentError::QuestionCount {
                expected: QUESTION_COUNT,
                actual: self.questions.len(),
            });
        }

        let mut ids = BTreeSet::new();
        for question in &self.questions {
            if question.id as usize >= QUESTION_COUNT {
                return Err(InstrumentError::QuestionOutOfRange(question.id));
            }
            if !ids.insert(question.id) {
                return Err(InstrumentError::DuplicateQuestion(question.id));
            }
            let scale = self
                .scale(question.scale)
                .ok_or(InstrumentError::UnknownScale(question.scale))?;
            if let Some(subscale) = &question.subscale
                && scale.subscale(subscale).is_none()
            {
                return Err(InstrumentError::UnknownSubscale {
                    scale: question.scale,
                    subscale: subscale.clone(),
                });
            }
        }

        let mut keys = BTreeSet::new();
        for scale in &self.scales {
            if !keys.insert(scale.key) {
                return Err(InstrumentError::DuplicateScale(scale.key));
            }
            let items = self.questions_in(scale.key).count() as u32;
            if items == 0 {
                return Err(InstrumentError::EmptyScale(scale.key));
            }
            let computed = items * u32::from(AnswerValue::MAX);
            if scale.max_score != computed {
                return Err(InstrumentError::MaxScoreMismatch {
                    scale: scale.key,
                    declared: scale.max_score,
                    computed,
                });
            }
            for subscale in &scale.subscales {
                let members = self
                    .questions_in(scale.key)
                    .filter(|q| q.subscale.as_deref() == Some(subscale.key.as_str()))
                    .count();
                if members == 0 {
                    return Err(InstrumentError::EmptySubscale {
                        scale: scale.key,
                        subscale: subscale.key.clone(),
                    });
                }
            }
            scale.check_zones()?;
        }
        Ok(())
    }
}

fn standard_answer_options() -> Vec<AnswerOption> {
    let labels = ["Never", "Rarely", "Sometimes", "Often", "Very often"];
    AnswerValue::ALL
        .iter()
        .zip(labels)
        .map(|(value, label)| AnswerOption {
            value: *value,
            label: label.to_string(),
        })
        .collect()
}
