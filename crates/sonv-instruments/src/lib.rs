//! sonv-instruments
//!
//! The SONV-112 adult neurodivergence screening questionnaire: the question
//! and scale registry, score aggregation, validity assessment and the
//! rule-driven interpretation. Everything here is a pure function of its
//! inputs; the registry and the built-in rule set are read-only statics.

pub mod error;
pub mod flags;
pub mod interpret;
pub mod recommend;
pub mod registry;
pub mod results;
pub mod rules;
pub mod scoring;
pub mod validity;

pub use registry::Registry;
pub use results::{calculate_results, TestResults};
pub use rules::RuleSet;
