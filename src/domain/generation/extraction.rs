//! Isolating a JSON array from free-form model output.
//!
//! Models wrap the requested JSON in prose or markdown fences. The extractor
//! scans for balanced `[...]` blocks, skipping brackets inside string
//! literals, and returns the first block that parses as a JSON array.
//! Blocks that open with an object (`[ {`) are tried before any other
//! candidate so that incidental brackets in prose ("[1]") do not win.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Start of an array of objects, ignoring whitespace.
static OBJECT_ARRAY_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*\{").expect("static pattern is valid")
});

/// Why a reply could not be turned into a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The text contains no `[` at all.
    #[error("no JSON array found in reply")]
    NoArrayFound,

    /// An array opens but never closes.
    #[error("unbalanced brackets starting at byte {start}")]
    Unbalanced { start: usize },

    /// A balanced block was found but is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The reply parsed as JSON but holds no array.
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

/// Extracts the first JSON array embedded in `text`.
pub fn extract_json_array(text: &str) -> Result<Vec<Value>, ExtractionError> {
    let preferred: Vec<usize> = OBJECT_ARRAY_START.find_iter(text).map(|m| m.start()).collect();
    let seen: HashSet<usize> = preferred.iter().copied().collect();
    let others = text
        .match_indices('[')
        .map(|(idx, _)| idx)
        .filter(|idx| !seen.contains(idx));
    let starts: Vec<usize> = preferred.iter().copied().chain(others).collect();

    if starts.is_empty() {
        return Err(ExtractionError::NoArrayFound);
    }

    let mut first_error = None;
    for start in starts {
        let outcome = balanced_block(text, start)
            .ok_or(ExtractionError::Unbalanced { start })
            .and_then(parse_array);

        match outcome {
            Ok(items) => return Ok(items),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }

    Err(first_error.unwrap_or(ExtractionError::NoArrayFound))
}

/// Field the completion strategy asks the model to put the records in.
const ITEMS_FIELD: &str = "items";

/// Interprets a reply that is expected to be JSON already.
///
/// Accepts a bare array, or an object holding the records under
/// [`ITEMS_FIELD`]. Without that field the first array-valued field in
/// document order is used (structured-output mode only guarantees an
/// object). Anything else falls back to [`extract_json_array`].
pub fn array_from_structured_reply(text: &str) -> Result<Vec<Value>, ExtractionError> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(Value::Object(map)) => {
            let wrapped = matches!(map.get(ITEMS_FIELD), Some(Value::Array(_)));
            map.into_iter()
                .filter(|(key, _)| !wrapped || key == ITEMS_FIELD)
                .find_map(|(_, value)| match value {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .ok_or(ExtractionError::NotAnArray { found: "object" })
        }
        Ok(other) => Err(ExtractionError::NotAnArray {
            found: json_kind(&other),
        }),
        Err(_) => extract_json_array(text),
    }
}

/// Decodes extracted array elements into typed records.
///
/// Any element that does not fit `T` rejects the whole reply.
pub fn decode_records<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, ExtractionError> {
    serde_json::from_value(Value::Array(values))
        .map_err(|e| ExtractionError::InvalidJson(e.to_string()))
}

/// Returns the slice from `start` (which must be `[`) to its matching `]`.
fn balanced_block(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

fn parse_array(block: &str) -> Result<Vec<Value>, ExtractionError> {
    match serde_json::from_str::<Value>(block) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(ExtractionError::NotAnArray {
            found: json_kind(&other),
        }),
        Err(e) => Err(ExtractionError::InvalidJson(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
