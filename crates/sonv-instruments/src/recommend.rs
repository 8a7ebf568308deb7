use tracing::debug;

use sonv_core::models::interpretation::InterpretationResult;
use sonv_core::models::recommendation::Recommendations;
use sonv_core::models::scale::ScaleResults;
use sonv_core::models::validity::ValidityResult;

use crate::rules::RuleSet;

/// Build the do / don't / specialist lists.
///
/// Base lists come first, then every matching rule row in table order, then
/// one specialist note per moderate validity warning. Repeated items keep
/// their first position. An invalid set gets nothing.
pub fn recommend(
    scales: &ScaleResults,
    validity: &ValidityResult,
    interpretation: &InterpretationResult,
    rules: &RuleSet,
) -> Recommendations {
    let mut recommendations = Recommendations::default();
    if !validity.is_valid {
        return recommendations;
    }

    let table = &rules.recommendations;
    recommendations.extend_unique(&table.base_do, &table.base_dont, &[]);
    for rule in table
        .rules
        .iter()
        .filter(|rule| rule.when.holds(scales, interpretation))
    {
        recommendations.extend_unique(&rule.do_list, &rule.dont_list, &rule.specialist_notes);
    }

    let cautions: Vec<String> = validity
        .moderate_warnings()
        .map(|w| format!("{} {}", table.caution_prefix, w.title))
        .collect();
    recommendations.extend_unique(&[], &[], &cautions);

    debug!(
        do_items = recommendations.do_list.len(),
        dont_items = recommendations.dont_list.len(),
        specialist_notes = recommendations.specialist_notes.len(),
        "built recommendations"
    );
    recommendations
}
