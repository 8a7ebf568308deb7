use tracing::debug;

use sonv_core::models::answer::{AnswerMap, AnswerValue};
use sonv_core::models::scale::{QuestionDetail, ScaleResult, ScaleResults};

use crate::error::InstrumentError;
use crate::registry::{Question, Registry, ScaleDefinition};

/// `round(100 * sum / max)` with halves rounded up, clamped to 0..=100.
/// An empty scale scores 0.
pub fn percentage(sum: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let (sum, max) = (u64::from(sum), u64::from(max));
    let rounded = (sum * 200 + max) / (max * 2);
    rounded.min(100) as u8
}

/// Score every scale and subscale of the registry.
///
/// Unanswered questions count as 0 and stay in the denominator. Answers to
/// ids the registry does not know are ignored.
pub fn aggregate(answers: &AnswerMap, registry: &Registry) -> Result<ScaleResults, InstrumentError> {
    let mut results = ScaleResults::new();

    for scale in registry.scales() {
        let members: Vec<&Question> = registry.questions_in(scale.key).collect();
        let mut result = score_items(
            scale,
            scale.key.code(),
            &scale.name,
            scale.max_score,
            &members,
            answers,
        )?;

        for subscale in &scale.subscales {
            let sub_members: Vec<&Question> = members
                .iter()
                .copied()
                .filter(|q| q.subscale.as_deref() == Some(subscale.key.as_str()))
                .collect();
            let max = sub_members.len() as u32 * u32::from(AnswerValue::MAX);
            let sub_result = score_items(
                scale,
                &subscale.key,
                &subscale.name,
                max,
                &sub_members,
                answers,
            )?;
            result.subscales.insert(subscale.key.clone(), sub_result);
        }

        results.insert(scale.key, result);
    }

    debug!(
        answered = answers.len(),
        scales = results.len(),
        "aggregated answers"
    );
    Ok(results)
}

fn score_items(
    scale: &ScaleDefinition,
    key: &str,
    name: &str,
    max: u32,
    items: &[&Question],
    answers: &AnswerMap,
) -> Result<ScaleResult, InstrumentError> {
    let mut sum = 0u32;
    let mut question_details = Vec::new();

    for question in items {
        let Some(answer) = answers.get(question.id) else {
            continue;
        };
        let scored = if question.reverse_scored {
            answer.reversed()
        } else {
            answer
        };
        sum += u32::from(scored.get());
        question_details.push(QuestionDetail {
            question_id: question.id,
            text: question.text.clone(),
            answer,
        });
    }

    // Stable: equal answers keep registry order.
    question_details.sort_by(|a, b| b.answer.cmp(&a.answer));

    let percentage = percentage(sum, max);
    let zone = scale
        .zone_for(percentage)
        .cloned()
        .ok_or_else(|| InstrumentError::ZoneGap {
            scale: key.to_string(),
            percentage,
        })?;

    Ok(ScaleResult {
        key: key.to_string(),
        name: name.to_string(),
        sum,
        max,
        percentage,
        zone,
        subscales: Default::default(),
        question_details,
    })
}
