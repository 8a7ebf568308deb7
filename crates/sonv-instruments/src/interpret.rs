//! Turns scale results into per-condition findings, co-occurrence notes and a
//! plain-text summary.

use std::collections::BTreeMap;

use tracing::debug;

use sonv_core::models::interpretation::{
    ComorbidityBlock, ConditionBlock, Confidence, InterpretationResult,
};
use sonv_core::models::scale::ScaleResults;
use sonv_core::models::validity::ValidityResult;

use crate::rules::{Combine, Component, ConditionRule, RuleSet};

/// Interpret a response set. Nothing is interpreted when validity failed.
pub fn interpret(
    scales: &ScaleResults,
    validity: &ValidityResult,
    rules: &RuleSet,
) -> InterpretationResult {
    if !validity.is_valid {
        debug!("interpretation withheld");
        return InterpretationResult::withheld(rules.texts.withheld.clone());
    }

    let condition_blocks: BTreeMap<_, _> = rules
        .conditions
        .iter()
        .map(|rule| (rule.condition, assess_condition(rule, scales)))
        .collect();

    let comorbidity_blocks: Vec<ComorbidityBlock> = rules
        .comorbidity
        .iter()
        .filter(|rule| {
            rule.conditions
                .iter()
                .all(|c| condition_blocks.get(c).is_some_and(|block| block.present))
        })
        .map(|rule| ComorbidityBlock {
            title: rule.title.clone(),
            text: rule.text.clone(),
            interactions: rule.interactions.clone(),
        })
        .collect();

    let mut result = InterpretationResult {
        summary: String::new(),
        condition_blocks,
        comorbidity_blocks,
    };
    result.summary = summary(&result, rules);

    debug!(
        present = ?result.present_conditions(),
        comorbidity = result.comorbidity_blocks.len(),
        "interpreted scales"
    );
    result
}

/// Evaluate one condition rule against the scale results.
pub fn assess_condition(rule: &ConditionRule, scales: &ScaleResults) -> ConditionBlock {
    let governing = governing_percentage(rule, scales);
    let present = governing >= rule.cut;

    let elevated: Vec<&Component> = rule
        .components
        .iter()
        .filter(|c| component_percentage(c, scales) >= rule.component_cut)
        .collect();

    let margin = (i16::from(governing) - i16::from(rule.cut)).abs();
    let confidence = if margin < i16::from(rule.borderline_band) {
        Confidence::Low
    } else if present {
        if uniformly_elevated(rule, scales) {
            Confidence::High
        } else {
            Confidence::Moderate
        }
    } else if elevated.is_empty() {
        Confidence::High
    } else {
        Confidence::Moderate
    };

    ConditionBlock {
        title: rule.title.clone(),
        present,
        confidence,
        text: rule.texts.lookup(present, confidence).to_string(),
        details: elevated.iter().map(|c| c.detail.clone()).collect(),
    }
}

/// The percentage a condition's presence is decided on. Mean is rounded half
/// up; missing scales read as 0.
pub fn governing_percentage(rule: &ConditionRule, scales: &ScaleResults) -> u8 {
    let values: Vec<u32> = rule
        .governing
        .scales
        .iter()
        .map(|key| scales.get(key).map_or(0, |r| u32::from(r.percentage)))
        .collect();
    if values.is_empty() {
        return 0;
    }
    let combined = match rule.governing.combine {
        Combine::Max => values.iter().copied().max().unwrap_or(0),
        Combine::Mean => {
            let n = values.len() as u32;
            (values.iter().sum::<u32>() * 2 + n) / (2 * n)
        }
    };
    combined.min(100) as u8
}

/// Only components on a governing scale count towards the uniformity share;
/// the rest are reported as details. A mean-combined rule also needs every
/// governing scale at the component cut.
fn uniformly_elevated(rule: &ConditionRule, scales: &ScaleResults) -> bool {
    let core: Vec<&Component> = rule
        .components
        .iter()
        .filter(|c| rule.governing.scales.contains(&c.scale))
        .collect();
    let elevated = core
        .iter()
        .filter(|c| component_percentage(c, scales) >= rule.component_cut)
        .count();
    let share_reached = elevated * 100 >= usize::from(rule.uniform_share) * core.len();

    let domains_reached = match rule.governing.combine {
        Combine::Max => true,
        Combine::Mean => rule.governing.scales.iter().all(|key| {
            scales
                .get(key)
                .is_some_and(|r| r.percentage >= rule.component_cut)
        }),
    };
    share_reached && domains_reached
}

fn component_percentage(component: &Component, scales: &ScaleResults) -> u8 {
    let Some(scale) = scales.get(&component.scale) else {
        return 0;
    };
    match &component.subscale {
        Some(key) => scale.subscales.get(key).map_or(0, |s| s.percentage),
        None => scale.percentage,
    }
}

fn summary(result: &InterpretationResult, rules: &RuleSet) -> String {
    let texts = &rules.texts;
    let mut lines: Vec<String> = result
        .condition_blocks
        .values()
        .map(|block| {
            let status = if block.present { &texts.present } else { &texts.absent };
            format!(
                "{}: {} ({})",
                block.title,
                status,
                texts.confidence(block.confidence)
            )
        })
        .collect();

    match result.present_conditions().len() {
        0 => lines.push(texts.none_present.clone()),
        1 => {}
        _ => lines.push(texts.comorbidity_note.clone()),
    }
    lines.join("\n")
}
