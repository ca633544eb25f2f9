//! Normalization of raw calorie strings.
//!
//! Form values arrive as free text. Cleaning strips sign characters and
//! whitespace; validation rejects scientific-notation-like runs before the
//! value ever reaches a sum. This is best-effort sanitization, not full
//! numeric parsing — [`parse_calories`] is the only function here that
//! decides whether the remainder is actually a number.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{InputError, Result};

/// Disallowed pattern: one or more digits immediately followed by `e`/`E`
/// immediately followed by one or more digits. A sign or decimal point in
/// the exponent breaks the run, so `-1e-5` on its own does not match.
fn notation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\d+e\d+").expect("notation pattern compiles"))
}

/// Remove `+`, `-`, and whitespace characters anywhere in the value.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '+' && *c != '-' && !c.is_whitespace())
        .collect()
}

/// Search for a disallowed scientific-notation run, returning the matched
/// substring when found.
pub fn invalid_notation(value: &str) -> Option<&str> {
    notation_pattern().find(value).map(|m| m.as_str())
}

/// Normalize and convert one raw value.
///
/// Cleans the value, rejects it if the cleaned text contains a
/// scientific-notation run, then parses it as a float. An empty cleaned
/// value (an untouched field) counts as zero. Values that fail to parse, or
/// parse to something non-finite (`inf`, `nan`), are rejected outright so
/// no NaN can propagate into downstream sums.
pub fn parse_calories(raw: &str) -> Result<f64> {
    let cleaned = clean(raw);

    if let Some(matched) = invalid_notation(&cleaned) {
        tracing::debug!(raw, matched, "rejected scientific notation");
        return Err(InputError::InvalidNotation {
            matched: matched.to_string(),
            raw: raw.to_string(),
        });
    }

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::debug!(raw, "rejected non-numeric value");
            Err(InputError::Malformed {
                raw: raw.to_string(),
            })
        }
    }
}
