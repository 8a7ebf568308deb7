//! Thresholds and text templates that drive validity, interpretation, flags
//! and recommendations.
//!
//! Cut-points and wording are clinical parameters, so they are data rather
//! than code. [`RuleSet::standard`] ships screening defaults; a reviewed
//! replacement can be loaded from JSON with [`RuleSet::load`]. Every rule set
//! is validated against the registry before use.

mod standard;
mod trigger;

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use sonv_core::models::flag::Flag;
use sonv_core::models::interpretation::{ConditionKey, Confidence, Detail, Interaction};
use sonv_core::models::scale::ScaleKey;
use sonv_core::models::validity::{ValidityWarning, WarningSeverity};

use crate::error::InstrumentError;
use crate::registry::Registry;

pub use trigger::Trigger;

/// Rule-set schema version this build reads. Bump on any breaking change to
/// the JSON shape.
pub const CURRENT_RULES_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules_version: u32,
    pub validity: Vec<ValidityRule>,
    pub conditions: Vec<ConditionRule>,
    pub comorbidity: Vec<ComorbidityRule>,
    pub flags: Vec<FlagRule>,
    pub recommendations: RecommendationRules,
    pub texts: SummaryTexts,
}

/// Thresholds for one control scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityRule {
    pub scale: ScaleKey,
    pub moderate: WarningRule,
    pub critical: WarningRule,
}

/// A warning emitted once the control scale reaches `at` percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningRule {
    pub at: u8,
    pub icon: String,
    pub title: String,
    pub text: String,
}

impl WarningRule {
    pub fn warning(&self, severity: WarningSeverity) -> ValidityWarning {
        ValidityWarning {
            severity,
            icon: self.icon.clone(),
            title: self.title.clone(),
            text: self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    /// Highest percentage among the scales.
    Max,
    /// Mean percentage, rounded half up.
    Mean,
}

/// The measure a condition's presence is decided on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Governing {
    pub scales: Vec<ScaleKey>,
    pub combine: Combine,
}

/// A scale or subscale whose elevation supports a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub scale: ScaleKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscale: Option<String>,
    /// Reported when the component reaches the condition's component cut.
    pub detail: Detail,
}

/// Texts keyed by `(present, confidence)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTexts {
    pub present_high: String,
    pub present_moderate: String,
    pub present_low: String,
    pub absent_high: String,
    pub absent_moderate: String,
    pub absent_low: String,
}

impl ConditionTexts {
    pub fn lookup(&self, present: bool, confidence: Confidence) -> &str {
        match (present, confidence) {
            (true, Confidence::High) => &self.present_high,
            (true, Confidence::Moderate) => &self.present_moderate,
            (true, Confidence::Low) => &self.present_low,
            (false, Confidence::High) => &self.absent_high,
            (false, Confidence::Moderate) => &self.absent_moderate,
            (false, Confidence::Low) => &self.absent_low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRule {
    pub condition: ConditionKey,
    pub title: String,
    pub governing: Governing,
    /// Present when the governing percentage reaches this value.
    pub cut: u8,
    /// A governing percentage closer to `cut` than this is borderline.
    pub borderline_band: u8,
    /// A component at or above this percentage counts as elevated.
    pub component_cut: u8,
    /// Share of elevated components on the governing scales, in percent,
    /// needed for high confidence.
    pub uniform_share: u8,
    pub components: Vec<Component>,
    pub texts: ConditionTexts,
}

/// Fires when every listed condition is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComorbidityRule {
    pub conditions: Vec<ConditionKey>,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagRule {
    pub when: Trigger,
    pub flag: Flag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub when: Trigger,
    #[serde(default)]
    pub do_list: Vec<String>,
    #[serde(default)]
    pub dont_list: Vec<String>,
    #[serde(default)]
    pub specialist_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRules {
    /// Included for every valid response set.
    pub base_do: Vec<String>,
    pub base_dont: Vec<String>,
    pub rules: Vec<RecommendationRule>,
    /// Prefixed to the title of each moderate validity warning to form a
    /// specialist note.
    pub caution_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTexts {
    /// Summary used when interpretation is withheld.
    pub withheld: String,
    pub present: String,
    pub absent: String,
    pub confidence_low: String,
    pub confidence_moderate: String,
    pub confidence_high: String,
    /// Appended when two or more conditions are present.
    pub comorbidity_note: String,
    /// Appended when no condition is present.
    pub none_present: String,
}

impl SummaryTexts {
    pub fn confidence(&self, confidence: Confidence) -> &str {
        match confidence {
            Confidence::Low => &self.confidence_low,
            Confidence::Moderate => &self.confidence_moderate,
            Confidence::High => &self.confidence_high,
        }
    }
}

static STANDARD: LazyLock<RuleSet> = LazyLock::new(standard::rule_set);

impl RuleSet {
    /// Built-in screening defaults for the standard registry.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    /// Parse and validate a JSON rule set.
    pub fn from_json(json: &str, registry: &Registry) -> Result<Self, InstrumentError> {
        // Check the version before the shape so an old or future file gets a
        // version error rather than a confusing field error.
        let value: serde_json::Value = serde_json::from_str(json)?;
        let version = value
            .get("rules_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if version != u64::from(CURRENT_RULES_VERSION) {
            return Err(InstrumentError::UnsupportedRulesVersion {
                found: version,
                supported: CURRENT_RULES_VERSION,
            });
        }

        let rules: RuleSet = serde_json::from_value(value)?;
        rules.validate(registry)?;
        info!(
            version,
            conditions = rules.conditions.len(),
            flags = rules.flags.len(),
            "rule set loaded"
        );
        Ok(rules)
    }

    pub fn load(path: &Path, registry: &Registry) -> Result<Self, InstrumentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| InstrumentError::ReadRules {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "reading rule set");
        Self::from_json(&contents, registry)
    }

    pub fn to_json_pretty(&self) -> Result<String, InstrumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validity_rule(&self, scale: ScaleKey) -> Option<&ValidityRule> {
        self.validity.iter().find(|rule| rule.scale == scale)
    }

    pub fn condition_rule(&self, condition: ConditionKey) -> Option<&ConditionRule> {
        self.conditions.iter().find(|rule| rule.condition == condition)
    }

    /// Check every reference against the registry and the internal
    /// consistency of thresholds.
    pub fn validate(&self, registry: &Registry) -> Result<(), InstrumentError> {
        let mut seen_scales = BTreeSet::new();
        for rule in &self.validity {
            if !rule.scale.is_control() {
                return Err(InstrumentError::NotAControlScale(rule.scale));
            }
            check_scale(registry, rule.scale)?;
            if !seen_scales.insert(rule.scale) {
                return Err(InstrumentError::InvalidRules(format!(
                    "control scale '{}' has more than one validity rule",
                    rule.scale
                )));
            }
            if rule.moderate.at > rule.critical.at || rule.critical.at > 100 {
                return Err(InstrumentError::InvalidRules(format!(
                    "validity thresholds of '{}' must satisfy moderate <= critical <= 100",
                    rule.scale
                )));
            }
        }

        if self.conditions.is_empty() {
            return Err(InstrumentError::InvalidRules(
                "at least one condition must be defined".to_string(),
            ));
        }
        let mut seen_conditions = BTreeSet::new();
        for rule in &self.conditions {
            if !seen_conditions.insert(rule.condition) {
                return Err(InstrumentError::InvalidRules(format!(
                    "condition {:?} is defined more than once",
                    rule.condition
                )));
            }
            if rule.governing.scales.is_empty() {
                return Err(InstrumentError::InvalidRules(format!(
                    "condition {:?} has no governing scale",
                    rule.condition
                )));
            }
            if rule.cut > 100 || rule.component_cut > 100 || rule.uniform_share > 100 {
                return Err(InstrumentError::InvalidRules(format!(
                    "thresholds of condition {:?} must lie within 0..=100",
                    rule.condition
                )));
            }
            for scale in &rule.governing.scales {
                check_clinical_scale(registry, *scale)?;
            }
            for component in &rule.components {
                check_clinical_scale(registry, component.scale)?;
                if let Some(subscale) = &component.subscale {
                    check_subscale(registry, component.scale, subscale)?;
                }
            }
        }

        for rule in &self.comorbidity {
            if rule.conditions.len() < 2 {
                return Err(InstrumentError::InvalidRules(format!(
                    "comorbidity rule '{}' needs at least two conditions",
                    rule.title
                )));
            }
            if let Some(missing) = rule
                .conditions
                .iter()
                .find(|c| !seen_conditions.contains(*c))
            {
                return Err(InstrumentError::InvalidRules(format!(
                    "comorbidity rule '{}' refers to undefined condition {missing:?}",
                    rule.title
                )));
            }
        }

        for rule in &self.flags {
            rule.when.check(registry)?;
        }
        for rule in &self.recommendations.rules {
            rule.when.check(registry)?;
        }
        Ok(())
    }
}

fn check_scale(registry: &Registry, scale: ScaleKey) -> Result<(), InstrumentError> {
    registry
        .scale(scale)
        .map(|_| ())
        .ok_or(InstrumentError::UnknownScale(scale))
}

fn check_clinical_scale(registry: &Registry, scale: ScaleKey) -> Result<(), InstrumentError> {
    if scale.is_control() {
        return Err(InstrumentError::ControlScaleInInterpretation(scale));
    }
    check_scale(registry, scale)
}

fn check_subscale(registry: &Registry, scale: ScaleKey, subscale: &str) -> Result<(), InstrumentError> {
    let definition = registry
        .scale(scale)
        .ok_or(InstrumentError::UnknownScale(scale))?;
    if definition.subscale(subscale).is_none() {
        return Err(InstrumentError::UnknownSubscale {
            scale,
            subscale: subscale.to_string(),
        });
    }
    Ok(())
}
