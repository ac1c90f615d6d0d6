//! Lenient field readers for model replies.
//!
//! The model is asked for a fixed JSON shape but does not always honour it:
//! list fields sometimes arrive as a single string, text fields as null.
//! These readers turn such values into `None` or a normalized value so each
//! reply struct can apply its own named default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a text field. Null, blank and non-string values become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads a list-of-strings field. A bare string becomes a one-element list;
/// null, blank entries and empty lists become `None`.
pub fn optional_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items: Vec<String> = match value {
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    let items: Vec<String> = items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(if items.is_empty() { None } else { Some(items) })
}
