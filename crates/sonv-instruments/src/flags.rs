use tracing::debug;

use sonv_core::models::flag::Flag;
use sonv_core::models::interpretation::InterpretationResult;
use sonv_core::models::scale::ScaleResults;
use sonv_core::models::validity::ValidityResult;

use crate::rules::RuleSet;

/// Flags whose trigger holds, in table order. None for an invalid set.
pub fn derive_flags(
    scales: &ScaleResults,
    validity: &ValidityResult,
    interpretation: &InterpretationResult,
    rules: &RuleSet,
) -> Vec<Flag> {
    if !validity.is_valid {
        return Vec::new();
    }
    let flags: Vec<Flag> = rules
        .flags
        .iter()
        .filter(|rule| rule.when.holds(scales, interpretation))
        .map(|rule| rule.flag.clone())
        .collect();
    debug!(flags = flags.len(), "derived flags");
    flags
}
