//! Forgiving field decoders for model-authored JSON
//!
//! Generated replies routinely quote numbers (`"roll_difficulty": "12"`), send `null`
//! for lists, hand back a single string where a list belongs, or list objects where
//! plain labels were asked for. These helpers are used with
//! `#[serde(deserialize_with = ...)]` so any JSON value decodes into the field;
//! values that cannot mean anything for the field become its empty value.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text from any value; null is empty and objects or arrays are kept as JSON text
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(value_text)
        .unwrap_or_default())
}

/// Flag from a boolean, a `"true"`/`"false"` string or a number
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    })
}

/// Entries of a list that may arrive as a single value; null is empty
pub fn values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter(|v| !v.is_null()).collect(),
        Some(single) => vec![single],
    })
}

/// List of labels; object entries contribute their `name`, or their JSON text
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(values(deserializer)?.into_iter().map(entry_label).collect())
}

fn entry_label(value: Value) -> String {
    if let Value::Object(map) = &value {
        if let Some(Value::String(name)) = map.get("name") {
            return name.clone();
        }
    }
    value_text(value)
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Integer that may arrive as a number or a numeric string; anything else is absent
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))),
        Some(Value::String(s)) => Ok(parse_int(&s)),
        Some(_) => Ok(None),
    }
}

/// Integer clamped to zero or above; absent or unparseable values become zero
pub fn non_negative_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_int(deserializer)?.unwrap_or(0).max(0))
}

/// Enum from a case-insensitive name; unknown or empty names become `None`
pub fn optional_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(s.trim().parse().ok()),
        Some(_) => Ok(None),
    }
}

/// Text where an empty string or the literal "null" means absent
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<Value>::deserialize(deserializer)?.map(value_text);
    Ok(text.filter(|t| {
        let t = t.trim();
        !t.is_empty() && !t.eq_ignore_ascii_case("null")
    }))
}

fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|f| f.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "optional_int")]
        difficulty: Option<i64>,
        #[serde(default, deserialize_with = "non_negative_int")]
        damage: i64,
        #[serde(default, deserialize_with = "optional_text")]
        npc: Option<String>,
        #[serde(default, deserialize_with = "text_list")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "flag")]
        requires_roll: bool,
        #[serde(default, deserialize_with = "text")]
        title: String,
    }

    fn fields(value: serde_json::Value) -> Result<Fields, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_quoted_numbers_are_accepted() {
        let p = fields(serde_json::json!({ "difficulty": " 14 ", "damage": "5" })).unwrap();
        assert_eq!(p.difficulty, Some(14));
        assert_eq!(p.damage, 5);
    }

    #[test]
    fn test_non_numeric_text_is_absent() {
        let p = fields(serde_json::json!({ "difficulty": "none", "damage": "n/a" })).unwrap();
        assert_eq!(p.difficulty, None);
        assert_eq!(p.damage, 0);
    }

    #[test]
    fn test_negative_damage_is_clamped() {
        let p = fields(serde_json::json!({ "damage": -7 })).unwrap();
        assert_eq!(p.damage, 0);
    }

    #[test]
    fn test_object_where_number_belongs_is_absent() {
        let p = fields(serde_json::json!({ "difficulty": { "value": 12 }, "damage": [3] })).unwrap();
        assert_eq!(p.difficulty, None);
        assert_eq!(p.damage, 0);
    }

    #[test]
    fn test_placeholder_text_is_absent() {
        let p = fields(serde_json::json!({ "npc": "null" })).unwrap();
        assert_eq!(p.npc, None);
        let p = fields(serde_json::json!({ "npc": "Old Maren" })).unwrap();
        assert_eq!(p.npc.as_deref(), Some("Old Maren"));
    }

    #[test]
    fn test_single_string_becomes_one_item_list() {
        let p = fields(serde_json::json!({ "items": "sword" })).unwrap();
        assert_eq!(p.items, vec!["sword"]);
    }

    #[test]
    fn test_object_entries_use_their_name() {
        let p = fields(serde_json::json!({
            "items": [{ "name": "Gate" }, { "kind": "door" }, 3, null, "rope"]
        }))
        .unwrap();
        assert_eq!(p.items, vec!["Gate", "{\"kind\":\"door\"}", "3", "rope"]);
    }

    #[test]
    fn test_flag_accepts_quoted_booleans() {
        assert!(fields(serde_json::json!({ "requires_roll": "TRUE" })).unwrap().requires_roll);
        assert!(fields(serde_json::json!({ "requires_roll": 1 })).unwrap().requires_roll);
        assert!(!fields(serde_json::json!({ "requires_roll": "no" })).unwrap().requires_roll);
    }

    #[test]
    fn test_text_accepts_any_value() {
        assert_eq!(fields(serde_json::json!({ "title": 42 })).unwrap().title, "42");
        assert_eq!(fields(serde_json::json!({ "title": null })).unwrap().title, "");
        assert_eq!(
            fields(serde_json::json!({ "title": { "ko": "X" } })).unwrap().title,
            "{\"ko\":\"X\"}"
        );
    }
}
