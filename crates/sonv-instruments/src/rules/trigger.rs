use serde::{Deserialize, Serialize};

use sonv_core::models::interpretation::{ConditionKey, InterpretationResult};
use sonv_core::models::scale::{ScaleKey, ScaleResults};

use crate::error::InstrumentError;
use crate::registry::Registry;

/// Condition under which a flag or recommendation row applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    ScaleAtLeast {
        scale: ScaleKey,
        percentage: u8,
    },
    SubscaleAtLeast {
        scale: ScaleKey,
        subscale: String,
        percentage: u8,
    },
    ConditionPresent {
        condition: ConditionKey,
    },
    AllOf {
        triggers: Vec<Trigger>,
    },
    AnyOf {
        triggers: Vec<Trigger>,
    },
}

impl Trigger {
    pub fn holds(&self, scales: &ScaleResults, interpretation: &InterpretationResult) -> bool {
        match self {
            Trigger::ScaleAtLeast { scale, percentage } => scales
                .get(scale)
                .is_some_and(|result| result.percentage >= *percentage),
            Trigger::SubscaleAtLeast {
                scale,
                subscale,
                percentage,
            } => scales
                .get(scale)
                .and_then(|result| result.subscales.get(subscale))
                .is_some_and(|result| result.percentage >= *percentage),
            Trigger::ConditionPresent { condition } => interpretation.is_present(*condition),
            Trigger::AllOf { triggers } => triggers.iter().all(|t| t.holds(scales, interpretation)),
            Trigger::AnyOf { triggers } => triggers.iter().any(|t| t.holds(scales, interpretation)),
        }
    }

    pub(crate) fn check(&self, registry: &Registry) -> Result<(), InstrumentError> {
        match self {
            Trigger::ScaleAtLeast { scale, percentage } => {
                registry
                    .scale(*scale)
                    .ok_or(InstrumentError::UnknownScale(*scale))?;
                check_percentage(*percentage)
            }
            Trigger::SubscaleAtLeast {
                scale,
                subscale,
                percentage,
            } => {
                let definition = registry
                    .scale(*scale)
                    .ok_or(InstrumentError::UnknownScale(*scale))?;
                if definition.subscale(subscale).is_none() {
                    return Err(InstrumentError::UnknownSubscale {
                        scale: *scale,
                        subscale: subscale.clone(),
                    });
                }
                check_percentage(*percentage)
            }
            Trigger::ConditionPresent { .. } => Ok(()),
            Trigger::AllOf { triggers } | Trigger::AnyOf { triggers } => {
                if triggers.is_empty() {
                    return Err(InstrumentError::InvalidRules(
                        "all_of and any_of triggers need at least one member".to_string(),
                    ));
                }
                triggers.iter().try_for_each(|t| t.check(registry))
            }
        }
    }
}

fn check_percentage(percentage: u8) -> Result<(), InstrumentError> {
    if percentage > 100 {
        return Err(InstrumentError::InvalidRules(format!(
            "trigger percentage {percentage} is above 100"
        )));
    }
    Ok(())
}
