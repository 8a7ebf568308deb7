use tracing::debug;

use sonv_core::models::scale::ScaleResults;
use sonv_core::models::validity::{ValidityResult, WarningSeverity};

use crate::registry::Registry;
use crate::rules::RuleSet;

/// Check the control scales, in registry order, against their thresholds.
///
/// A scale at or above its critical threshold yields a critical warning
/// followed by the moderate one. Any critical warning invalidates the set.
pub fn assess_validity(
    scales: &ScaleResults,
    registry: &Registry,
    rules: &RuleSet,
) -> ValidityResult {
    let mut warnings = Vec::new();

    for scale in registry.control_scales() {
        let (Some(result), Some(rule)) = (scales.get(&scale.key), rules.validity_rule(scale.key)) else {
            continue;
        };
        if result.percentage >= rule.critical.at {
            warnings.push(rule.critical.warning(WarningSeverity::Critical));
        }
        if result.percentage >= rule.moderate.at {
            warnings.push(rule.moderate.warning(WarningSeverity::Moderate));
        }
    }

    let validity = ValidityResult::from_warnings(warnings);
    debug!(
        is_valid = validity.is_valid,
        warnings = validity.warnings.len(),
        "assessed validity"
    );
    validity
}
