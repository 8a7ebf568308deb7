use std::path::PathBuf;

use thiserror::Error;

use sonv_core::models::answer::QuestionId;
use sonv_core::models::scale::ScaleKey;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("registry must define {expected} questions, found {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("question {0} is defined more than once")]
    DuplicateQuestion(QuestionId),

    #[error("question id {0} is outside the instrument")]
    QuestionOutOfRange(QuestionId),

    #[error("unknown scale '{0}'")]
    UnknownScale(ScaleKey),

    #[error("scale '{0}' is defined more than once")]
    DuplicateScale(ScaleKey),

    #[error("scale '{0}' has no questions")]
    EmptyScale(ScaleKey),

    #[error("unknown subscale '{subscale}' for scale '{scale}'")]
    UnknownSubscale { scale: ScaleKey, subscale: String },

    #[error("subscale '{subscale}' of scale '{scale}' has no questions")]
    EmptySubscale { scale: ScaleKey, subscale: String },

    #[error("scale '{scale}' declares a maximum of {declared} but its questions allow {computed}")]
    MaxScoreMismatch {
        scale: ScaleKey,
        declared: u32,
        computed: u32,
    },

    #[error("no zone of '{scale}' covers {percentage}%")]
    ZoneGap { scale: String, percentage: u8 },

    #[error("more than one zone of '{scale}' covers {percentage}%")]
    ZoneOverlap { scale: String, percentage: u8 },

    #[error("rules_version {found} is not supported; this build reads version {supported}")]
    UnsupportedRulesVersion { found: u64, supported: u32 },

    #[error("scale '{0}' is not a control scale")]
    NotAControlScale(ScaleKey),

    #[error("control scale '{0}' cannot drive interpretation")]
    ControlScaleInInterpretation(ScaleKey),

    #[error("invalid rule set: {0}")]
    InvalidRules(String),

    #[error("failed to read rules from {}: {source}", path.display())]
    ReadRules {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
