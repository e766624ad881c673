use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use suggest_common::normalization::{normalize_candidate, CandidateKind};
use suggest_common::{highlight_candidates, ClusterConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of strings")]
    NotAnArray,
    #[error("element {index} is not a string")]
    NotAString { index: usize },
}

/// How raw input text is turned into candidate strings.
#[derive(Debug, Clone, Copy)]
pub struct Extraction {
    pub json: bool,
    pub raw: bool,
    pub kind: CandidateKind,
}

/// Read the whole input from a file, or stdin when no path is given.
pub fn read_source(path: Option<&str>) -> Result<String, InputError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Split input into candidates: one per non-blank line, or the elements of a
/// JSON array.
pub fn parse_candidates(text: &str, extraction: Extraction) -> Result<Vec<String>, InputError> {
    let candidates = if extraction.json {
        let value: Value = serde_json::from_str(text)?;
        strings_from_value(&value)?
    } else {
        text.lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect()
    };
    Ok(finish(candidates, extraction))
}

/// Only strings are accepted; any other element type fails the whole list.
pub fn strings_from_value(value: &Value) -> Result<Vec<String>, InputError> {
    let items = value.as_array().ok_or(InputError::NotAnArray)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or(InputError::NotAString { index })
        })
        .collect()
}

pub fn finish(candidates: Vec<String>, extraction: Extraction) -> Vec<String> {
    if extraction.raw {
        return candidates;
    }
    candidates
        .iter()
        .map(|c| normalize_candidate(c, extraction.kind))
        .collect()
}

/// Highlight each group of a JSON array of candidate arrays on its own.
/// A malformed group is logged and yields `null`, so the result stays
/// aligned with the input.
pub fn highlight_groups(
    value: &Value,
    extraction: Extraction,
    config: &ClusterConfig,
) -> Result<Vec<Value>, InputError> {
    let groups = value.as_array().ok_or(InputError::NotAnArray)?;
    let results = groups
        .iter()
        .enumerate()
        .map(|(index, group)| match strings_from_value(group) {
            Ok(candidates) => {
                let candidates = finish(candidates, extraction);
                Value::from(highlight_candidates(&candidates, config))
            }
            Err(e) => {
                tracing::warn!("Skipping group {}: {}", index, e);
                Value::Null
            }
        })
        .collect();
    Ok(results)
}
