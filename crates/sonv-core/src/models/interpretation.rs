use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Traits the interpretation reports on, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConditionKey {
    Adhd,
    Asd,
    Dyslexia,
    Dyscalculia,
    Dyspraxia,
}

impl ConditionKey {
    pub const ALL: [ConditionKey; 5] = [
        ConditionKey::Adhd,
        ConditionKey::Asd,
        ConditionKey::Dyslexia,
        ConditionKey::Dyscalculia,
        ConditionKey::Dyspraxia,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Detail {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionBlock {
    pub title: String,
    pub present: bool,
    pub confidence: Confidence,
    pub text: String,
    pub details: Vec<Detail>,
}

/// How two co-present conditions shape each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interaction {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComorbidityBlock {
    pub title: String,
    pub text: String,
    pub interactions: Vec<Interaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationResult {
    pub summary: String,
    pub condition_blocks: BTreeMap<ConditionKey, ConditionBlock>,
    pub comorbidity_blocks: Vec<ComorbidityBlock>,
}

impl InterpretationResult {
    /// Early-exit result for response sets that failed the validity check.
    pub fn withheld(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            condition_blocks: BTreeMap::new(),
            comorbidity_blocks: Vec::new(),
        }
    }

    /// Rule sets always define at least one condition, so only a withheld
    /// interpretation has no condition blocks.
    pub fn is_withheld(&self) -> bool {
        self.condition_blocks.is_empty()
    }

    pub fn is_present(&self, condition: ConditionKey) -> bool {
        self.condition_blocks
            .get(&condition)
            .is_some_and(|block| block.present)
    }

    pub fn present_conditions(&self) -> Vec<ConditionKey> {
        self.condition_blocks
            .iter()
            .filter(|(_, block)| block.present)
            .map(|(key, _)| *key)
            .collect()
    }
}
