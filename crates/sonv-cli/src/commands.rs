use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;

use eyre::Result;
use serde::Serialize;
use tracing::{debug, info};

use sonv_core::codec::{self, SHARE_MARKER};
use sonv_core::models::answer::AnswerMap;
use sonv_instruments::{calculate_results, Registry, RuleSet};

/// The built-in rule set, or the one at `path` when given.
pub fn load_rules(path: Option<&Path>) -> Result<Cow<'static, RuleSet>> {
    match path {
        Some(path) => Ok(Cow::Owned(RuleSet::load(path, Registry::standard())?)),
        None => {
            debug!("using built-in rule set");
            Ok(Cow::Borrowed(RuleSet::standard()))
        }
    }
}

/// Read an answers document (`{"0": 3, "1": 4, ...}`). `-` reads stdin.
pub fn read_answers(path: &Path) -> Result<AnswerMap> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| eyre::eyre!("failed to read answers from stdin: {e}"))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?
    };
    let answers: AnswerMap = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid answers document: {e}"))?;
    let completion = answers.completion();
    if !completion.is_complete() {
        info!(
            unanswered = completion.unanswered.len(),
            "unanswered questions are scored as 0"
        );
    }
    Ok(answers)
}

/// Accept a bare share code, an `r=` fragment, or a whole link ending in
/// `#r=...`.
pub fn parse_share_input(input: &str) -> Result<AnswerMap> {
    let input = input.trim();
    let answers = match input.rsplit_once('#') {
        Some((_, fragment)) => codec::parse_fragment(fragment)?,
        None if input.starts_with(SHARE_MARKER) => codec::parse_fragment(input)?,
        None => codec::decode(input)?,
    };
    Ok(answers)
}

pub fn score(answers: &AnswerMap, rules: &RuleSet, pretty: bool) -> Result<String> {
    let results = calculate_results(answers, Registry::standard(), rules)?;
    to_json(&results, pretty)
}

pub fn encode(answers: &AnswerMap) -> String {
    codec::encode(answers)
}

pub fn rules(rules: &RuleSet, pretty: bool) -> Result<String> {
    to_json(rules, pretty)
}

pub fn registry(pretty: bool) -> Result<String> {
    to_json(Registry::standard(), pretty)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
