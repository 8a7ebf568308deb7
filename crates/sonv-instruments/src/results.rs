use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use sonv_core::codec;
use sonv_core::models::answer::{AnswerMap, Completion};
use sonv_core::models::flag::Flag;
use sonv_core::models::interpretation::InterpretationResult;
use sonv_core::models::recommendation::Recommendations;
use sonv_core::models::scale::ScaleResults;
use sonv_core::models::validity::ValidityResult;

use crate::error::InstrumentError;
use crate::flags::derive_flags;
use crate::interpret::interpret;
use crate::recommend::recommend;
use crate::registry::Registry;
use crate::rules::RuleSet;
use crate::scoring::aggregate;
use crate::validity::assess_validity;

/// Everything a report needs for one response set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResults {
    pub scales: ScaleResults,
    pub validity: ValidityResult,
    pub interpretation: InterpretationResult,
    pub flags: Vec<Flag>,
    pub recommendations: Recommendations,
    /// Compact code that reproduces this answer set.
    pub share_code: String,
    pub completion: Completion,
}

/// Run the full pipeline: aggregate, check validity, interpret, then derive
/// flags and recommendations.
pub fn calculate_results(
    answers: &AnswerMap,
    registry: &Registry,
    rules: &RuleSet,
) -> Result<TestResults, InstrumentError> {
    let completion = answers.completion();
    debug!(
        answered = completion.answered,
        total = completion.total,
        "calculating results"
    );

    let scales = aggregate(answers, registry)?;
    let validity = assess_validity(&scales, registry, rules);
    let interpretation = interpret(&scales, &validity, rules);
    let flags = derive_flags(&scales, &validity, &interpretation, rules);
    let recommendations = recommend(&scales, &validity, &interpretation, rules);

    info!(
        answered = completion.answered,
        is_valid = validity.is_valid,
        present = ?interpretation.present_conditions(),
        flags = flags.len(),
        "results calculated"
    );

    Ok(TestResults {
        scales,
        validity,
        interpretation,
        flags,
        recommendations,
        share_code: codec::encode(answers),
        completion,
    })
}
