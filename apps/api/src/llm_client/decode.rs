//! Bounded decoding of model output into typed values.
//!
//! Strict parse first. On failure, a fixed list of textual repairs is applied
//! one at a time (cumulatively), with a strict parse after each, up to
//! `MAX_REPAIR_ATTEMPTS` repairs.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::LlmError;

pub const MAX_REPAIR_ATTEMPTS: usize = 2;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("trailing comma pattern is valid"));

type Repair = fn(&str) -> String;

/// Applied in order, one per attempt.
const REPAIRS: [(&str, Repair); MAX_REPAIR_ATTEMPTS] = [
    ("strip_trailing_commas", strip_trailing_commas),
    ("trim_to_outer_brackets", trim_to_outer_brackets),
];

/// Decodes `text` as JSON into `T`, repairing near-valid output.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let mut candidate = strip_json_fences(text).to_string();

    let mut last_error = match serde_json::from_str(&candidate) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    for (attempt, (name, repair)) in REPAIRS.iter().enumerate() {
        warn!(
            "Model output failed to parse ({last_error}); repair attempt {}/{MAX_REPAIR_ATTEMPTS}: {name}",
            attempt + 1
        );
        candidate = repair(&candidate);
        match serde_json::from_str(&candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = e,
        }
    }

    Err(LlmError::Decode {
        attempts: MAX_REPAIR_ATTEMPTS,
        message: last_error.to_string(),
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

/// Removes a comma that directly precedes a closing `]` or `}`.
///
/// The pattern is not string-aware, so the same text inside a string value is
/// rewritten too. That loss is accepted; it only runs on output that already
/// failed a strict parse.
fn strip_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "$1").into_owned()
}

/// Drops prose around the outermost `{...}` or `[...]` pair.
fn trim_to_outer_brackets(text: &str) -> String {
    let start = text.find(['{', '[']);
    let end = text.rfind(['}', ']']);
    match (start, end) {
        (Some(start), Some(end)) if start < end => text[start..=end].to_string(),
        _ => text.to_string(),
    }
}
