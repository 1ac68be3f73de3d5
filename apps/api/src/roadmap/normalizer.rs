//! Milestone Normalizer: turns any milestone-ish list into exactly 15 valid milestones.
//!
//! Rules per entry:
//! - title: provided non-empty text, else "Task"; cut to 80 chars
//! - description: provided text, else ""; cut to 500 chars
//! - days: integer parse (numbers truncate, strings use their leading
//!   integer), 2 when unparseable, then clamped to 1..=7
//!
//! Entries past the 15th are dropped; a short list is padded with default
//! milestones. Never fails on data. Normalizing a normalized roadmap is a no-op.

use serde_json::Value;

use crate::models::lenient::scalar_text;
use crate::models::roadmap::{
    Milestone, RawMilestone, Roadmap, MAX_DAYS, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS, MIN_DAYS,
    ROADMAP_LEN,
};
use crate::roadmap::RoadmapError;

const DEFAULT_TITLE: &str = "Task";
const DEFAULT_DAYS: i64 = 2;

/// Normalizes an untrusted list into a roadmap.
pub fn normalize_milestones(raw: &[RawMilestone]) -> Roadmap {
    let mut milestones: Vec<Milestone> =
        raw.iter().take(ROADMAP_LEN).map(normalize_entry).collect();
    milestones.resize_with(ROADMAP_LEN, default_milestone);
    Roadmap::from_normalized(milestones)
}

/// Entry point for raw JSON. The value must be an array: anything else is a
/// programming error upstream and is reported instead of being papered over.
pub fn normalize_value(raw: &Value) -> Result<Roadmap, RoadmapError> {
    let items = raw.as_array().ok_or_else(|| {
        RoadmapError::InvalidArgument(format!(
            "milestone list must be a JSON array, got {}",
            json_kind(raw)
        ))
    })?;
    let entries: Vec<RawMilestone> = items.iter().cloned().map(RawMilestone::from).collect();
    Ok(normalize_milestones(&entries))
}

pub fn normalize_entry(raw: &RawMilestone) -> Milestone {
    match raw {
        RawMilestone::Record {
            title,
            description,
            days,
        } => {
            let title = title
                .as_ref()
                .and_then(scalar_text)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string());
            let description = description
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or_default();
            let days = days.as_ref().and_then(parse_days).unwrap_or(DEFAULT_DAYS);

            Milestone {
                title: truncate_chars(&title, MAX_TITLE_CHARS),
                description: truncate_chars(&description, MAX_DESCRIPTION_CHARS),
                days: clamp_days(days),
            }
        }
        RawMilestone::Other(_) => default_milestone(),
    }
}

fn default_milestone() -> Milestone {
    Milestone {
        title: DEFAULT_TITLE.to_string(),
        description: String::new(),
        days: clamp_days(DEFAULT_DAYS),
    }
}

fn clamp_days(days: i64) -> u8 {
    // Clamped into 1..=7, so the narrowing cast cannot truncate.
    days.clamp(MIN_DAYS, MAX_DAYS) as u8
}

/// Integer reading of a `days` value, or `None` when there is no number to read.
fn parse_days(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

/// Parses an optional sign and the digits that follow leading whitespace:
/// "3.7" → 3, "5 days" → 5, "-5" → -5, "abc" → None. Overflow saturates.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
