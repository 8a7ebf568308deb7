//! Built-in screening defaults.

use sonv_core::models::flag::Flag;
use sonv_core::models::interpretation::{ConditionKey, Detail, Interaction};
use sonv_core::models::scale::ScaleKey::{self, *};

use super::{
    Combine, ComorbidityRule, Component, ConditionRule, ConditionTexts, FlagRule, Governing,
    RecommendationRule, RecommendationRules, RuleSet, SummaryTexts, Trigger, ValidityRule,
    WarningRule, CURRENT_RULES_VERSION,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn warning(at: u8, icon: &str, title: &str, text: &str) -> WarningRule {
    WarningRule {
        at,
        icon: icon.to_string(),
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn component(scale: ScaleKey, subscale: Option<&str>, title: &str, text: &str) -> Component {
    Component {
        scale,
        subscale: subscale.map(str::to_string),
        detail: Detail {
            title: title.to_string(),
            text: text.to_string(),
        },
    }
}

fn texts(rows: [&str; 6]) -> ConditionTexts {
    let [present_high, present_moderate, present_low, absent_high, absent_moderate, absent_low] =
        rows.map(str::to_string);
    ConditionTexts {
        present_high,
        present_moderate,
        present_low,
        absent_high,
        absent_moderate,
        absent_low,
    }
}

fn scale_at(scale: ScaleKey, percentage: u8) -> Trigger {
    Trigger::ScaleAtLeast { scale, percentage }
}

fn subscale_at(scale: ScaleKey, subscale: &str, percentage: u8) -> Trigger {
    Trigger::SubscaleAtLeast {
        scale,
        subscale: subscale.to_string(),
        percentage,
    }
}

fn present(condition: ConditionKey) -> Trigger {
    Trigger::ConditionPresent { condition }
}

fn flag(when: Trigger, icon: &str, title: &str, text: &str) -> FlagRule {
    FlagRule {
        when,
        flag: Flag {
            icon: icon.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        },
    }
}

fn interaction(title: &str, text: &str) -> Interaction {
    Interaction {
        title: title.to_string(),
        text: text.to_string(),
    }
}

pub(super) fn rule_set() -> RuleSet {
    RuleSet {
        rules_version: CURRENT_RULES_VERSION,
        validity: validity(),
        conditions: conditions(),
        comorbidity: comorbidity(),
        flags: flags(),
        recommendations: recommendations(),
        texts: SummaryTexts {
            withheld: "Interpretation withheld: the control scales indicate that these answers may not reflect your actual experience. Consider retaking the test in a calm moment, answering as honestly as you can.".to_string(),
            present: "traits present".to_string(),
            absent: "traits not present".to_string(),
            confidence_low: "low confidence".to_string(),
            confidence_moderate: "moderate confidence".to_string(),
            confidence_high: "high confidence".to_string(),
            comorbidity_note: "Several profiles co-occur. They often shape each other, so see the combined notes below.".to_string(),
            none_present: "No profile reaches the screening threshold.".to_string(),
        },
    }
}

fn validity() -> Vec<ValidityRule> {
    vec![
        ValidityRule {
            scale: SocialDesirability,
            moderate: warning(
                50,
                "⚠️",
                "Tendency to present yourself favourably",
                "Some answers describe an idealised picture. Results may understate real difficulties.",
            ),
            critical: warning(
                75,
                "❌",
                "Strong social desirability",
                "Many answers describe standards nobody meets in practice. The profile is unlikely to reflect your actual experience.",
            ),
        },
        ValidityRule {
            scale: AtypicalResponding,
            moderate: warning(
                25,
                "⚠️",
                "Some atypical answers",
                "A few statements that are almost never true were endorsed. Some questions may have been misread.",
            ),
            critical: warning(
                50,
                "❌",
                "Random or inattentive answering",
                "Several impossible statements were endorsed. The answers look random or inattentive.",
            ),
        },
        ValidityRule {
            scale: Defensiveness,
            moderate: warning(
                50,
                "⚠️",
                "Some defensiveness",
                "Ordinary difficulties that nearly everyone has were denied. Results may understate real difficulties.",
            ),
            critical: warning(
                75,
                "❌",
                "Strong defensiveness",
                "Almost all ordinary difficulties were denied. The profile is unlikely to reflect your actual experience.",
            ),
        },
        ValidityRule {
            scale: Acquiescence,
            moderate: warning(
                70,
                "⚠️",
                "Tendency to agree",
                "Both sides of several opposite statements were endorsed. Some answers may reflect a habit of agreeing.",
            ),
            critical: warning(
                85,
                "❌",
                "Agreement regardless of content",
                "Nearly every pair of opposite statements was endorsed on both sides. Answers do not depend on the question.",
            ),
        },
    ]
}

fn conditions() -> Vec<ConditionRule> {
    vec![
        ConditionRule {
            condition: ConditionKey::Adhd,
            title: "ADHD traits".to_string(),
            governing: Governing {
                scales: vec![Inattention, Hyperactivity],
                combine: Combine::Max,
            },
            cut: 60,
            borderline_band: 5,
            component_cut: 60,
            uniform_share: 50,
            components: vec![
                component(Inattention, Some("A1"), "Sustained attention", "Holding focus on tasks that do not grab your interest takes real effort."),
                component(Inattention, Some("A2"), "Organisation and time", "Planning, estimating time and finishing what you start are hard to keep on track."),
                component(Inattention, Some("A3"), "Forgetfulness", "Everyday details such as keys, appointments and messages slip easily."),
                component(Hyperactivity, Some("B1"), "Restlessness", "A need to move, fidget or stay busy, even when sitting still is expected."),
                component(Hyperactivity, Some("B2"), "Impulsivity", "Acting or speaking before thinking it through, and finding waiting hard."),
                component(EmotionalDysregulation, None, "Emotional intensity", "Strong, fast emotional reactions that take a while to settle are common alongside ADHD."),
            ],
            texts: texts([
                "Your answers show a consistent pattern of attention and activity regulation traits typical of ADHD across several areas.",
                "Your answers show ADHD traits, concentrated in some areas rather than across the whole profile.",
                "Your answers sit just above the screening threshold for ADHD traits. The picture is borderline.",
                "Your answers do not indicate ADHD traits.",
                "Your answers do not reach the ADHD threshold overall, although some areas are elevated.",
                "Your answers sit just below the screening threshold for ADHD traits. The picture is borderline.",
            ]),
        },
        ConditionRule {
            condition: ConditionKey::Asd,
            title: "Autistic traits".to_string(),
            governing: Governing {
                scales: vec![SocialCommunication, RepetitivePatterns],
                combine: Combine::Mean,
            },
            cut: 60,
            borderline_band: 5,
            component_cut: 60,
            uniform_share: 50,
            components: vec![
                component(SocialCommunication, Some("D1"), "Social reciprocity", "Conversation and social give-and-take take conscious effort."),
                component(SocialCommunication, Some("D2"), "Non-verbal communication", "Facial expressions, tone and implied meaning are hard to read or send."),
                component(RepetitivePatterns, Some("E1"), "Routines and sameness", "Predictability matters, and unexpected change is distressing."),
                component(RepetitivePatterns, Some("E2"), "Focused interests", "Deep, absorbing interests that take up much of your attention."),
                component(Sensory, None, "Sensory differences", "Sounds, lights, textures or smells affect you more strongly than most people."),
                component(Camouflaging, None, "Camouflaging", "You put significant effort into masking differences in social situations, which can hide traits and drain energy."),
            ],
            texts: texts([
                "Your answers show a consistent pattern of autistic traits in both social communication and repetitive patterns.",
                "Your answers show autistic traits, concentrated in some areas rather than across the whole profile.",
                "Your answers sit just above the screening threshold for autistic traits. The picture is borderline.",
                "Your answers do not indicate autistic traits.",
                "Your answers do not reach the threshold for autistic traits overall, although some areas are elevated. High camouflaging can lower scores.",
                "Your answers sit just below the screening threshold for autistic traits. The picture is borderline.",
            ]),
        },
        ConditionRule {
            condition: ConditionKey::Dyslexia,
            title: "Dyslexia traits".to_string(),
            governing: Governing {
                scales: vec![Dyslexia],
                combine: Combine::Max,
            },
            cut: 60,
            borderline_band: 5,
            component_cut: 60,
            uniform_share: 100,
            components: vec![component(Dyslexia, None, "Reading and spelling", "Reading is slow or effortful and spelling is unreliable.")],
            texts: texts([
                "Your answers show a clear pattern of reading and spelling difficulties typical of dyslexia.",
                "Your answers show dyslexia traits.",
                "Your answers sit just above the screening threshold for dyslexia traits.",
                "Your answers do not indicate dyslexia traits.",
                "Your answers do not indicate dyslexia traits.",
                "Your answers sit just below the screening threshold for dyslexia traits.",
            ]),
        },
        ConditionRule {
            condition: ConditionKey::Dyscalculia,
            title: "Dyscalculia traits".to_string(),
            governing: Governing {
                scales: vec![Dyscalculia],
                combine: Combine::Max,
            },
            cut: 60,
            borderline_band: 5,
            component_cut: 60,
            uniform_share: 100,
            components: vec![component(Dyscalculia, None, "Working with numbers", "Mental arithmetic, estimating and handling numerical information are hard.")],
            texts: texts([
                "Your answers show a clear pattern of number difficulties typical of dyscalculia.",
                "Your answers show dyscalculia traits.",
                "Your answers sit just above the screening threshold for dyscalculia traits.",
                "Your answers do not indicate dyscalculia traits.",
                "Your answers do not indicate dyscalculia traits.",
                "Your answers sit just below the screening threshold for dyscalculia traits.",
            ]),
        },
        ConditionRule {
            condition: ConditionKey::Dyspraxia,
            title: "Dyspraxia traits".to_string(),
            governing: Governing {
                scales: vec![Dyspraxia],
                combine: Combine::Max,
            },
            cut: 60,
            borderline_band: 5,
            component_cut: 60,
            uniform_share: 100,
            components: vec![component(Dyspraxia, None, "Coordination", "Movement, handwriting and finding your way around take extra effort.")],
            texts: texts([
                "Your answers show a clear pattern of coordination difficulties typical of dyspraxia.",
                "Your answers show dyspraxia traits.",
                "Your answers sit just above the screening threshold for dyspraxia traits.",
                "Your answers do not indicate dyspraxia traits.",
                "Your answers do not indicate dyspraxia traits.",
                "Your answers sit just below the screening threshold for dyspraxia traits.",
            ]),
        },
    ]
}

fn comorbidity() -> Vec<ComorbidityRule> {
    vec![
        ComorbidityRule {
            conditions: vec![ConditionKey::Adhd, ConditionKey::Asd],
            title: "ADHD and autistic traits together".to_string(),
            text: "ADHD and autistic traits often occur together and can partly mask each other, which is one reason the combination is recognised late.".to_string(),
            interactions: vec![
                interaction("Novelty against routine", "ADHD pulls towards novelty while autistic traits pull towards predictability, which can feel like an inner tug of war."),
                interaction("Double load on energy", "Masking and keeping attention on track both draw on the same reserves, so burnout can come sooner."),
            ],
        },
        ComorbidityRule {
            conditions: vec![ConditionKey::Adhd, ConditionKey::Dyslexia],
            title: "ADHD and dyslexia traits together".to_string(),
            text: "Attention and reading difficulties reinforce each other: reading takes more effort, and effortful reading is harder to stay focused on.".to_string(),
            interactions: Vec::new(),
        },
        ComorbidityRule {
            conditions: vec![ConditionKey::Adhd, ConditionKey::Dyspraxia],
            title: "ADHD and dyspraxia traits together".to_string(),
            text: "Restlessness and coordination differences together can make everyday physical tasks and organisation especially tiring.".to_string(),
            interactions: Vec::new(),
        },
        ComorbidityRule {
            conditions: vec![ConditionKey::Asd, ConditionKey::Dyspraxia],
            title: "Autistic and dyspraxia traits together".to_string(),
            text: "Motor coordination differences are common alongside autistic traits and can add to sensory and social fatigue.".to_string(),
            interactions: Vec::new(),
        },
        ComorbidityRule {
            conditions: vec![ConditionKey::Dyslexia, ConditionKey::Dyscalculia],
            title: "Dyslexia and dyscalculia traits together".to_string(),
            text: "Difficulties with both written language and numbers point to a broader learning profile worth assessing as a whole.".to_string(),
            interactions: Vec::new(),
        },
    ]
}

fn flags() -> Vec<FlagRule> {
    vec![
        flag(
            scale_at(EmotionalDysregulation, 75),
            "💥",
            "Strong emotional reactivity",
            "Emotions run high and take time to settle. Rejection sensitivity is common with this pattern.",
        ),
        flag(
            Trigger::AllOf {
                triggers: vec![present(ConditionKey::Asd), scale_at(Camouflaging, 60)],
            },
            "🎭",
            "Risk of masking burnout",
            "Sustained camouflaging alongside autistic traits is associated with exhaustion and autistic burnout.",
        ),
        flag(
            scale_at(Camouflaging, 75),
            "🫥",
            "Camouflaging may hide traits",
            "Heavy camouflaging can keep scores on other scales lower than your actual experience.",
        ),
        flag(
            subscale_at(Sensory, "F1", 75),
            "🔊",
            "Sensory overload",
            "Everyday sensory input is often overwhelming. Environment changes can make a large difference.",
        ),
        flag(
            subscale_at(Hyperactivity, "B2", 75),
            "⚡",
            "Pronounced impulsivity",
            "Decisions made on the spot can carry financial or social consequences worth planning around.",
        ),
        flag(
            subscale_at(Inattention, "A2", 75),
            "⏰",
            "Time blindness",
            "Estimating and tracking time is a marked difficulty. External reminders help more than willpower.",
        ),
        flag(
            Trigger::AllOf {
                triggers: vec![
                    present(ConditionKey::Adhd),
                    Trigger::AnyOf {
                        triggers: vec![
                            present(ConditionKey::Dyslexia),
                            present(ConditionKey::Dyscalculia),
                            present(ConditionKey::Dyspraxia),
                        ],
                    },
                ],
            },
            "📚",
            "Attention and learning differences together",
            "Learning difficulties are easily attributed to inattention alone. Each deserves its own assessment.",
        ),
    ]
}

fn recommendations() -> RecommendationRules {
    RecommendationRules {
        base_do: strings(&[
            "Treat this result as a starting point for a conversation, not a diagnosis.",
            "Note down concrete situations where these traits affect you.",
        ]),
        base_dont: strings(&["Don't self-diagnose on the basis of a screening questionnaire."]),
        rules: vec![
            RecommendationRule {
                when: present(ConditionKey::Adhd),
                do_list: strings(&[
                    "Use external reminders, timers and visible to-do lists.",
                    "Break large tasks into small steps with their own deadlines.",
                ]),
                dont_list: strings(&["Don't rely on willpower alone to stay organised."]),
                specialist_notes: strings(&["A psychiatrist or clinical psychologist experienced in adult ADHD."]),
            },
            RecommendationRule {
                when: present(ConditionKey::Asd),
                do_list: strings(&[
                    "Plan recovery time after social events.",
                    "Keep predictable routines where you can.",
                ]),
                dont_list: strings(&["Don't force yourself to mask at all times."]),
                specialist_notes: strings(&["A clinician experienced in adult autism assessment."]),
            },
            RecommendationRule {
                when: Trigger::AnyOf {
                    triggers: vec![
                        present(ConditionKey::Dyslexia),
                        present(ConditionKey::Dyscalculia),
                    ],
                },
                do_list: strings(&["Use assistive tools such as text-to-speech, spell checkers or calculators."]),
                dont_list: strings(&["Don't hide reading or number difficulties at work or in study."]),
                specialist_notes: strings(&["An educational psychologist for a specific learning difficulties assessment."]),
            },
            RecommendationRule {
                when: present(ConditionKey::Dyspraxia),
                do_list: strings(&["Allow extra time for tasks that need fine motor skills or orientation."]),
                dont_list: Vec::new(),
                specialist_notes: strings(&["An occupational therapist."]),
            },
            RecommendationRule {
                when: subscale_at(Sensory, "F1", 60),
                do_list: strings(&["Use noise-cancelling headphones, sunglasses or quiet spaces to manage sensory load."]),
                dont_list: Vec::new(),
                specialist_notes: Vec::new(),
            },
            RecommendationRule {
                when: scale_at(EmotionalDysregulation, 60),
                do_list: strings(&["Pause before responding when emotions run high."]),
                dont_list: strings(&["Don't make important decisions in the middle of a strong emotion."]),
                specialist_notes: Vec::new(),
            },
        ],
        caution_prefix: "When discussing results with a specialist, mention:".to_string(),
    }
}
