use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WarningSeverity {
    /// Blocks interpretation.
    Critical,
    /// Surfaced, but interpretation still runs.
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidityWarning {
    #[serde(rename = "type")]
    pub severity: WarningSeverity,
    pub icon: String,
    pub title: String,
    pub text: String,
}

/// Whether a response set is trustworthy enough to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidityResult {
    pub is_valid: bool,
    pub warnings: Vec<ValidityWarning>,
}

impl ValidityResult {
    /// Derive validity from the warnings: valid iff none is critical.
    pub fn from_warnings(warnings: Vec<ValidityWarning>) -> Self {
        let is_valid = !warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Critical);
        Self { is_valid, warnings }
    }

    pub fn moderate_warnings(&self) -> impl Iterator<Item = &ValidityWarning> {
        self.warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Moderate)
    }
}
