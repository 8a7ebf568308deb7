use sonv_core::models::scale::{ScaleKey, Zone};

use super::{ScaleDefinition, SubscaleDefinition};

fn zone(key: &str, low: u8, high: u8, label: &str, icon: &str, color: &str) -> Zone {
    Zone {
        key: key.to_string(),
        low,
        high,
        label: label.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn clinical_zones() -> Vec<Zone> {
    vec![
        zone("typical", 0, 39, "Typical range", "🟢", "zone-green"),
        zone("mild", 40, 59, "Mild", "🟡", "zone-yellow"),
        zone("elevated", 60, 79, "Elevated", "🟠", "zone-orange"),
        zone("pronounced", 80, 100, "Pronounced", "🔴", "zone-red"),
    ]
}

/// Bands for a control scale. `borderline` and `high` match the moderate and
/// critical validity thresholds of the standard rule set.
fn control_zones(borderline: u8, high: u8) -> Vec<Zone> {
    vec![
        zone("normal", 0, borderline - 1, "Normal", "✅", "zone-green"),
        zone("borderline", borderline, high - 1, "Borderline", "⚠️", "zone-yellow"),
        zone("high", high, 100, "High", "❌", "zone-red"),
    ]
}

fn subscales(defs: &[(&str, &str)]) -> Vec<SubscaleDefinition> {
    defs.iter()
        .map(|(key, name)| SubscaleDefinition {
            key: key.to_string(),
            name: name.to_string(),
        })
        .collect()
}

struct Meta {
    key: ScaleKey,
    name: &'static str,
    short_name: &'static str,
    items: u32,
    description: &'static str,
    basis: &'static str,
}

impl Meta {
    fn build(self, zones: Vec<Zone>, subscales: Vec<SubscaleDefinition>) -> ScaleDefinition {
        ScaleDefinition {
            key: self.key,
            name: self.name.to_string(),
            short_name: self.short_name.to_string(),
            description: self.description.to_string(),
            basis: self.basis.to_string(),
            max_score: self.items * 4,
            zones,
            subscales,
        }
    }
}

pub(super) fn standard() -> Vec<ScaleDefinition> {
    vec![
        Meta {
            key: ScaleKey::Inattention,
            name: "Inattention",
            short_name: "Inattention",
            items: 12,
            description: "Difficulty sustaining attention, organising tasks and keeping track of everyday things.",
            basis: "DSM-5 ADHD criterion A1, ASRS v1.1",
        }
        .build(
            clinical_zones(),
            subscales(&[
                ("A1", "Sustained attention"),
                ("A2", "Organisation and time"),
                ("A3", "Forgetfulness"),
            ]),
        ),
        Meta {
            key: ScaleKey::Hyperactivity,
            name: "Hyperactivity and impulsivity",
            short_name: "Hyperactivity",
            items: 10,
            description: "Physical or inner restlessness and acting before thinking.",
            basis: "DSM-5 ADHD criterion A2, ASRS v1.1",
        }
        .build(
            clinical_zones(),
            subscales(&[("B1", "Restlessness"), ("B2", "Impulsivity")]),
        ),
        Meta {
            key: ScaleKey::EmotionalDysregulation,
            name: "Emotional dysregulation",
            short_name: "Emotion",
            items: 8,
            description: "Fast, intense emotional reactions that are slow to settle, including rejection sensitivity.",
            basis: "Adult ADHD literature on emotional dysregulation, DERS",
        }
        .build(clinical_zones(), Vec::new()),
        Meta {
            key: ScaleKey::SocialCommunication,
            name: "Social communication",
            short_name: "Social",
            items: 10,
            description: "Differences in conversational reciprocity and in reading or sending non-verbal signals.",
            basis: "DSM-5 ASD criterion A, RAADS-R, AQ-50",
        }
        .build(
            clinical_zones(),
            subscales(&[
                ("D1", "Social reciprocity"),
                ("D2", "Non-verbal communication"),
            ]),
        ),
        Meta {
            key: ScaleKey::RepetitivePatterns,
            name: "Restricted and repetitive patterns",
            short_name: "Patterns",
            items: 8,
            description: "Reliance on routines and sameness, and deep, focused interests.",
            basis: "DSM-5 ASD criterion B, RAADS-R",
        }
        .build(
            clinical_zones(),
            subscales(&[("E1", "Routines and sameness"), ("E2", "Focused interests")]),
        ),
        Meta {
            key: ScaleKey::Sensory,
            name: "Sensory processing",
            short_name: "Sensory",
            items: 10,
            description: "Over-responsiveness to sound, light, touch or smell, and seeking of strong sensations.",
            basis: "DSM-5 ASD criterion B4, Adult Sensory Profile",
        }
        .build(
            clinical_zones(),
            subscales(&[("F1", "Over-responsivity"), ("F2", "Sensory seeking")]),
        ),
        Meta {
            key: ScaleKey::Camouflaging,
            name: "Camouflaging",
            short_name: "Camouflage",
            items: 8,
            description: "Effort spent hiding or compensating for differences in social settings.",
            basis: "CAT-Q",
        }
        .build(
            clinical_zones(),
            subscales(&[("G1", "Masking"), ("G2", "Compensation")]),
        ),
        Meta {
            key: ScaleKey::Dyslexia,
            name: "Dyslexia traits",
            short_name: "Dyslexia",
            items: 7,
            description: "Effortful reading, spelling and written language.",
            basis: "Adult Reading Questionnaire, DSM-5 specific learning disorder",
        }
        .build(clinical_zones(), Vec::new()),
        Meta {
            key: ScaleKey::Dyscalculia,
            name: "Dyscalculia traits",
            short_name: "Dyscalculia",
            items: 6,
            description: "Difficulty with number sense, mental arithmetic and numerical information.",
            basis: "DSM-5 specific learning disorder with impairment in mathematics",
        }
        .build(clinical_zones(), Vec::new()),
        Meta {
            key: ScaleKey::Dyspraxia,
            name: "Dyspraxia traits",
            short_name: "Dyspraxia",
            items: 7,
            description: "Motor coordination, handwriting and spatial orientation.",
            basis: "Adult DCD/Dyspraxia Checklist, DSM-5 developmental coordination disorder",
        }
        .build(clinical_zones(), Vec::new()),
        Meta {
            key: ScaleKey::SocialDesirability,
            name: "Social desirability",
            short_name: "Desirability",
            items: 6,
            description: "Agreement with idealised statements almost nobody can honestly endorse.",
            basis: "MMPI L scale, Marlowe-Crowne",
        }
        .build(control_zones(50, 75), Vec::new()),
        Meta {
            key: ScaleKey::AtypicalResponding,
            name: "Atypical responding",
            short_name: "Atypical",
            items: 6,
            description: "Agreement with absurd statements, a sign of random or inattentive answering.",
            basis: "Infrequency scales (MMPI F)",
        }
        .build(control_zones(25, 50), Vec::new()),
        Meta {
            key: ScaleKey::Defensiveness,
            name: "Defensiveness",
            short_name: "Defensiveness",
            items: 6,
            description: "Denial of ordinary difficulties that nearly everyone experiences.",
            basis: "MMPI K scale",
        }
        .build(control_zones(50, 75), Vec::new()),
        Meta {
            key: ScaleKey::Acquiescence,
            name: "Acquiescence",
            short_name: "Acquiescence",
            items: 8,
            description: "Agreement with both statements of contradictory pairs.",
            basis: "Balanced-pair acquiescence index",
        }
        .build(control_zones(70, 85), Vec::new()),
    ]
}
