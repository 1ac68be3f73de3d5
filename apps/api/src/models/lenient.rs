//! Serde helpers for records produced by an LLM or an untrusted client.
//!
//! Upstream JSON routinely carries `null`, a bare string, or mixed arrays where
//! a list of strings is expected. These helpers absorb that instead of failing
//! the whole request: non-list values become an empty list, non-string items
//! are dropped.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Strings pass through, numbers and booleans are rendered, anything else is empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text).unwrap_or_default())
}

pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_list")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "string")]
        label: String,
    }

    #[test]
    fn test_null_list_becomes_empty() {
        let probe: Probe = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(probe.items.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.items.is_empty());
        assert_eq!(probe.label, "");
    }

    #[test]
    fn test_scalar_list_becomes_empty() {
        let probe: Probe = serde_json::from_str(r#"{"items": "React"}"#).unwrap();
        assert!(probe.items.is_empty());
    }

    #[test]
    fn test_mixed_list_keeps_strings_in_order() {
        let probe: Probe =
            serde_json::from_str(r#"{"items": ["Rust", 3, null, "Go", {"x": 1}]}"#).unwrap();
        assert_eq!(probe.items, vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_numeric_label_is_rendered() {
        let probe: Probe = serde_json::from_str(r#"{"label": 42}"#).unwrap();
        assert_eq!(probe.label, "42");
    }
}
