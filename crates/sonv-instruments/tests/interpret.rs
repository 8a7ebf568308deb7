use sonv_core::models::answer::AnswerMap;
use sonv_core::models::interpretation::{ConditionKey, Confidence, InterpretationResult};
use sonv_core::models::scale::{ScaleKey, ScaleResults};
use sonv_core::models::validity::ValidityResult;
use sonv_instruments::flags::derive_flags;
use sonv_instruments::interpret::{assess_condition, governing_percentage, interpret};
use sonv_instruments::recommend::recommend;
use sonv_instruments::rules::Trigger;
use sonv_instruments::scoring::aggregate;
use sonv_instruments::{Registry, RuleSet};

/// Zero scores with selected scale or subscale percentages overridden.
fn scales_with(overrides: &[(ScaleKey, Option<&str>, u8)]) -> ScaleResults {
    let mut scales = aggregate(&AnswerMap::new(), Registry::standard()).unwrap();
    for (key, subscale, percentage) in overrides {
        let scale = scales.get_mut(key).unwrap();
        match subscale {
            Some(sub) => scale.subscales.get_mut(*sub).unwrap().percentage = *percentage,
            None => scale.percentage = *percentage,
        }
    }
    scales
}

fn valid() -> ValidityResult {
    ValidityResult::from_warnings(Vec::new())
}

fn detail_titles(scales: &ScaleResults, condition: ConditionKey) -> Vec<String> {
    let rule = RuleSet::standard().condition_rule(condition).unwrap();
    assess_condition(rule, scales)
        .details
        .into_iter()
        .map(|d| d.title)
        .collect()
}

#[test]
fn adhd_present_with_few_components_is_moderate() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Adhd).unwrap();
    let scales = scales_with(&[(ScaleKey::Inattention, None, 70), (ScaleKey::Inattention, Some("A1"), 70)]);

    let block = assess_condition(rule, &scales);
    assert!(block.present);
    assert_eq!(block.confidence, Confidence::Moderate);
    assert_eq!(block.text, rule.texts.present_moderate);
    assert_eq!(detail_titles(&scales, ConditionKey::Adhd), ["Sustained attention"]);
}

#[test]
fn adhd_present_across_components_is_high() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Adhd).unwrap();
    let scales = scales_with(&[
        (ScaleKey::Inattention, None, 70),
        (ScaleKey::Inattention, Some("A1"), 70),
        (ScaleKey::Inattention, Some("A2"), 65),
        (ScaleKey::Inattention, Some("A3"), 60),
    ]);

    let block = assess_condition(rule, &scales);
    assert_eq!(block.confidence, Confidence::High);
    assert_eq!(block.text, rule.texts.present_high);
    assert_eq!(
        detail_titles(&scales, ConditionKey::Adhd),
        ["Sustained attention", "Organisation and time", "Forgetfulness"]
    );
}

#[test]
fn hyperactivity_alone_can_govern_adhd() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Adhd).unwrap();
    let scales = scales_with(&[(ScaleKey::Hyperactivity, None, 65)]);
    assert_eq!(governing_percentage(rule, &scales), 65);
    assert!(assess_condition(rule, &scales).present);
}

#[test]
fn near_the_cut_is_low_confidence() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Adhd).unwrap();

    let above = assess_condition(rule, &scales_with(&[(ScaleKey::Inattention, None, 61)]));
    assert!(above.present);
    assert_eq!(above.confidence, Confidence::Low);
    assert_eq!(above.text, rule.texts.present_low);

    let below = assess_condition(rule, &scales_with(&[(ScaleKey::Inattention, None, 57)]));
    assert!(!below.present);
    assert_eq!(below.confidence, Confidence::Low);
    assert_eq!(below.text, rule.texts.absent_low);

    // A margin equal to the band is no longer borderline.
    let outside = assess_condition(rule, &scales_with(&[(ScaleKey::Inattention, None, 55)]));
    assert_eq!(outside.confidence, Confidence::High);
}

#[test]
fn absent_with_elevated_component_is_moderate() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Adhd).unwrap();
    let scales = scales_with(&[
        (ScaleKey::Inattention, None, 30),
        (ScaleKey::EmotionalDysregulation, None, 80),
    ]);

    let block = assess_condition(rule, &scales);
    assert!(!block.present);
    assert_eq!(block.confidence, Confidence::Moderate);
    assert_eq!(block.text, rule.texts.absent_moderate);
    assert_eq!(detail_titles(&scales, ConditionKey::Adhd), ["Emotional intensity"]);
}

#[test]
fn autism_governing_mean_rounds_half_up() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Asd).unwrap();

    let scales = scales_with(&[
        (ScaleKey::SocialCommunication, None, 59),
        (ScaleKey::RepetitivePatterns, None, 60),
    ]);
    assert_eq!(governing_percentage(rule, &scales), 60);
    assert!(assess_condition(rule, &scales).present);

    let scales = scales_with(&[
        (ScaleKey::SocialCommunication, None, 59),
        (ScaleKey::RepetitivePatterns, None, 59),
    ]);
    assert_eq!(governing_percentage(rule, &scales), 59);
    assert!(!assess_condition(rule, &scales).present);

    // One high domain is not enough on its own.
    let scales = scales_with(&[(ScaleKey::SocialCommunication, None, 100)]);
    assert_eq!(governing_percentage(rule, &scales), 50);
    assert!(!assess_condition(rule, &scales).present);
}

#[test]
fn autism_high_confidence_needs_both_domains() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Asd).unwrap();
    let scales = scales_with(&[
        (ScaleKey::SocialCommunication, None, 100),
        (ScaleKey::SocialCommunication, Some("D1"), 100),
        (ScaleKey::SocialCommunication, Some("D2"), 100),
        (ScaleKey::RepetitivePatterns, None, 40),
        (ScaleKey::RepetitivePatterns, Some("E1"), 40),
        (ScaleKey::RepetitivePatterns, Some("E2"), 40),
        (ScaleKey::Sensory, None, 100),
        (ScaleKey::Camouflaging, None, 100),
    ]);

    let block = assess_condition(rule, &scales);
    assert!(block.present);
    assert_eq!(block.confidence, Confidence::Moderate);
    assert_eq!(block.text, rule.texts.present_moderate);

    // Repetitive patterns barely registering leaves the result borderline.
    let scales = scales_with(&[
        (ScaleKey::SocialCommunication, None, 100),
        (ScaleKey::RepetitivePatterns, None, 20),
    ]);
    let block = assess_condition(rule, &scales);
    assert!(block.present);
    assert_eq!(block.confidence, Confidence::Low);
}

#[test]
fn supporting_components_are_details_only() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Asd).unwrap();
    let scales = scales_with(&[
        (ScaleKey::SocialCommunication, None, 70),
        (ScaleKey::SocialCommunication, Some("D1"), 80),
        (ScaleKey::RepetitivePatterns, None, 70),
        (ScaleKey::Sensory, None, 90),
        (ScaleKey::Camouflaging, None, 90),
    ]);

    let block = assess_condition(rule, &scales);
    assert!(block.present);
    assert_eq!(block.confidence, Confidence::Moderate);
    assert_eq!(
        detail_titles(&scales, ConditionKey::Asd),
        ["Social reciprocity", "Sensory differences", "Camouflaging"]
    );
}

#[test]
fn autism_across_both_domains_is_high() {
    let rule = RuleSet::standard().condition_rule(ConditionKey::Asd).unwrap();
    let scales = scales_with(&[
        (ScaleKey::SocialCommunication, None, 75),
        (ScaleKey::SocialCommunication, Some("D1"), 75),
        (ScaleKey::RepetitivePatterns, None, 70),
        (ScaleKey::RepetitivePatterns, Some("E1"), 70),
    ]);

    let block = assess_condition(rule, &scales);
    assert!(block.present);
    assert_eq!(block.confidence, Confidence::High);
    assert_eq!(block.text, rule.texts.present_high);
}

#[test]
fn learning_conditions_follow_their_scale() {
    let cases = [
        (ConditionKey::Dyslexia, ScaleKey::Dyslexia, "Reading and spelling"),
        (ConditionKey::Dyscalculia, ScaleKey::Dyscalculia, "Working with numbers"),
        (ConditionKey::Dyspraxia, ScaleKey::Dyspraxia, "Coordination"),
    ];
    for (condition, scale, detail) in cases {
        let rule = RuleSet::standard().condition_rule(condition).unwrap();
        let scales = scales_with(&[(scale, None, 80)]);
        let block = assess_condition(rule, &scales);
        assert!(block.present, "{condition:?}");
        assert_eq!(block.confidence, Confidence::High);
        assert_eq!(detail_titles(&scales, condition), [detail]);
    }
}

#[test]
fn each_comorbidity_row_fires_on_its_own() {
    let rules = RuleSet::standard();
    for row in &rules.comorbidity {
        let mut overrides = Vec::new();
        for condition in &row.conditions {
            let rule = rules.condition_rule(*condition).unwrap();
            for scale in &rule.governing.scales {
                overrides.push((*scale, None, 90));
            }
        }
        let interpretation = interpret(&scales_with(&overrides), &valid(), rules);
        let titles: Vec<&str> = interpretation
            .comorbidity_blocks
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, [row.title.as_str()]);
        assert_eq!(interpretation.present_conditions(), row.conditions);
    }
}

#[test]
fn summary_lists_conditions_in_fixed_order() {
    let scales = scales_with(&[(ScaleKey::Dyspraxia, None, 90), (ScaleKey::Inattention, None, 62)]);
    let interpretation = interpret(&scales, &valid(), RuleSet::standard());
    assert_eq!(
        interpretation.summary,
        "ADHD traits: traits present (low confidence)\n\
         Autistic traits: traits not present (high confidence)\n\
         Dyslexia traits: traits not present (high confidence)\n\
         Dyscalculia traits: traits not present (high confidence)\n\
         Dyspraxia traits: traits present (high confidence)\n\
         Several profiles co-occur. They often shape each other, so see the combined notes below."
    );
}

#[test]
fn single_present_condition_adds_no_trailing_line() {
    let scales = scales_with(&[(ScaleKey::Dyslexia, None, 90)]);
    let interpretation = interpret(&scales, &valid(), RuleSet::standard());
    assert_eq!(interpretation.summary.lines().count(), 5);
}

#[test]
fn invalid_response_set_is_not_interpreted() {
    let rules = RuleSet::standard();
    let rule = rules.validity_rule(ScaleKey::AtypicalResponding).unwrap();
    let validity = ValidityResult::from_warnings(vec![rule
        .critical
        .warning(sonv_core::models::validity::WarningSeverity::Critical)]);
    let scales = scales_with(&[(ScaleKey::Inattention, None, 100)]);

    let interpretation = interpret(&scales, &validity, rules);
    assert_eq!(interpretation, InterpretationResult::withheld(rules.texts.withheld.clone()));
    assert!(derive_flags(&scales, &validity, &interpretation, rules).is_empty());
    assert!(recommend(&scales, &validity, &interpretation, rules).is_empty());
}

#[test]
fn triggers_evaluate_scores_and_conditions() {
    let scales = scales_with(&[
        (ScaleKey::Sensory, None, 70),
        (ScaleKey::Sensory, Some("F1"), 80),
        (ScaleKey::Dyslexia, None, 90),
    ]);
    let interpretation = interpret(&scales, &valid(), RuleSet::standard());

    let sensory = Trigger::ScaleAtLeast { scale: ScaleKey::Sensory, percentage: 70 };
    let sensory_high = Trigger::ScaleAtLeast { scale: ScaleKey::Sensory, percentage: 71 };
    let overload = Trigger::SubscaleAtLeast {
        scale: ScaleKey::Sensory,
        subscale: "F1".to_string(),
        percentage: 80,
    };
    let dyslexia = Trigger::ConditionPresent { condition: ConditionKey::Dyslexia };
    let adhd = Trigger::ConditionPresent { condition: ConditionKey::Adhd };

    assert!(sensory.holds(&scales, &interpretation));
    assert!(!sensory_high.holds(&scales, &interpretation));
    assert!(overload.holds(&scales, &interpretation));
    assert!(dyslexia.holds(&scales, &interpretation));
    assert!(!adhd.holds(&scales, &interpretation));

    let all = Trigger::AllOf { triggers: vec![sensory.clone(), dyslexia.clone()] };
    let all_failing = Trigger::AllOf { triggers: vec![sensory.clone(), adhd.clone()] };
    let any = Trigger::AnyOf { triggers: vec![adhd.clone(), dyslexia] };
    let none = Trigger::AnyOf { triggers: vec![adhd, sensory_high] };
    assert!(all.holds(&scales, &interpretation));
    assert!(!all_failing.holds(&scales, &interpretation));
    assert!(any.holds(&scales, &interpretation));
    assert!(!none.holds(&scales, &interpretation));
}

#[test]
fn flag_thresholds_are_inclusive() {
    let rules = RuleSet::standard();

    let scales = scales_with(&[(ScaleKey::EmotionalDysregulation, None, 75)]);
    let interpretation = interpret(&scales, &valid(), rules);
    let flags = derive_flags(&scales, &valid(), &interpretation, rules);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].title, "Strong emotional reactivity");

    let scales = scales_with(&[(ScaleKey::EmotionalDysregulation, None, 74)]);
    let interpretation = interpret(&scales, &valid(), rules);
    assert!(derive_flags(&scales, &valid(), &interpretation, rules).is_empty());
}

#[test]
fn attention_and_learning_flag_needs_both() {
    let rules = RuleSet::standard();
    let title = "Attention and learning differences together";

    let scales = scales_with(&[(ScaleKey::Inattention, None, 90), (ScaleKey::Dyscalculia, None, 90)]);
    let interpretation = interpret(&scales, &valid(), rules);
    let flags = derive_flags(&scales, &valid(), &interpretation, rules);
    assert!(flags.iter().any(|f| f.title == title));

    let scales = scales_with(&[(ScaleKey::Dyscalculia, None, 90)]);
    let interpretation = interpret(&scales, &valid(), rules);
    let flags = derive_flags(&scales, &valid(), &interpretation, rules);
    assert!(flags.iter().all(|f| f.title != title));
}

#[test]
fn recommendations_keep_first_occurrence_only() {
    let mut rules = RuleSet::standard().clone();
    let adhd_row = rules.recommendations.rules[0].clone();
    rules.recommendations.rules.push(adhd_row);

    let scales = scales_with(&[(ScaleKey::Inattention, None, 90)]);
    let interpretation = interpret(&scales, &valid(), &rules);
    let recommendations = recommend(&scales, &valid(), &interpretation, &rules);

    let table = &rules.recommendations;
    let mut expected_do = table.base_do.clone();
    expected_do.extend(table.rules[0].do_list.iter().cloned());
    assert_eq!(recommendations.do_list, expected_do);
    assert_eq!(recommendations.specialist_notes, table.rules[0].specialist_notes);
}

#[test]
fn shared_learning_row_applies_once() {
    let rules = RuleSet::standard();
    let scales = scales_with(&[(ScaleKey::Dyslexia, None, 90), (ScaleKey::Dyscalculia, None, 90)]);
    let interpretation = interpret(&scales, &valid(), rules);
    let recommendations = recommend(&scales, &valid(), &interpretation, rules);
    assert_eq!(
        recommendations.specialist_notes,
        ["An educational psychologist for a specific learning difficulties assessment."]
    );
}
